// Narrowing conversions from decoded values to stored element types.
// All of them truncate toward zero; none of them round.

/// Metadata bytes. Saturates outside `0..=255`.
pub fn to_meta_byte(value: f32) -> u8 {
    value as u8
}

/// Text bytes. The value is truncated to an unsigned byte first and its bits
/// reinterpreted, so 200.0 becomes -56 rather than saturating at 127.
pub fn to_text_byte(value: f32) -> i8 {
    to_meta_byte(value) as i8
}

/// Skin and slot indices. Negative values become 0.
pub fn to_index(value: f32) -> u32 {
    value as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(to_meta_byte(2.9), 2);
        assert_eq!(to_index(7.99), 7);
        assert_eq!(to_text_byte(99.5), 99);
    }

    #[test]
    fn out_of_range_values() {
        assert_eq!(to_meta_byte(-3.0), 0);
        assert_eq!(to_meta_byte(300.0), 255);
        assert_eq!(to_index(-1.5), 0);
        assert_eq!(to_index(f32::NAN), 0);
    }

    #[test]
    fn text_keeps_high_bytes() {
        assert_eq!(to_text_byte(200.0), -56);
        assert_eq!(to_text_byte(255.0), -1);
        assert_eq!(to_text_byte(b'c' as f32), b'c' as i8);
    }
}
