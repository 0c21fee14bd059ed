// Offset-binary fixed-point decoding.

use crate::error::{keys, MatError, MatResult};
use crate::source::ByteSource;

/// Widest element the accumulator can hold.
pub const MAX_ELEMENT_BYTES: u32 = 16;

/// Decode one element of `integer_bytes + fraction_bytes` big-endian bytes.
///
/// The stored value is unsigned and shifted by half the integer range:
/// `value = encoded / 2^(8 * fraction) - 2^(8 * integer) / 2`.
/// With both widths zero a single byte is returned unscaled.
pub fn decode_fixed<S: ByteSource + ?Sized>(
    source: &mut S,
    integer_bytes: u8,
    fraction_bytes: u8,
) -> MatResult<f32> {
    if integer_bytes == 0 && fraction_bytes == 0 {
        return Ok(f32::from(source.read()?));
    }

    let width = u32::from(integer_bytes) + u32::from(fraction_bytes);
    if width > MAX_ELEMENT_BYTES {
        return Err(MatError::new(keys::UNSUPPORTED_FORMAT)
            .with_arg("integer", integer_bytes)
            .with_arg("fraction", fraction_bytes));
    }

    let mut encoded: u128 = 0;
    for _ in 0..width {
        encoded = (encoded << 8) | u128::from(source.read()?);
    }

    Ok(offset_binary(encoded, integer_bytes, fraction_bytes))
}

/// Apply the fraction scale and the half-range offset to a raw magnitude.
///
/// The offset is an integer halving, so with no integer bytes it is zero and
/// pure-fraction elements come out unsigned in `[0, 1)`.
pub fn offset_binary(encoded: u128, integer_bytes: u8, fraction_bytes: u8) -> f32 {
    let scale = 2f64.powi(i32::from(fraction_bytes) * 8);
    let bias = (1u128 << (u32::from(integer_bytes) * 8)) / 2;
    (encoded as f64 / scale - bias as f64) as f32
}
