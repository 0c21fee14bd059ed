use super::AttributeKind;
use crate::error::MatResult;
use crate::source::ByteSource;

/// Packed byte widths of one payload element.
///
/// High nibble is the integer width, low nibble the fraction width. Zero means
/// a single raw byte per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format(pub u8);

impl Format {
    pub const RAW: Format = Format(0);

    pub fn new(integer_bytes: u8, fraction_bytes: u8) -> Self {
        Format(((integer_bytes & 0x0F) << 4) | (fraction_bytes & 0x0F))
    }

    pub fn integer_bytes(self) -> u8 {
        self.0 >> 4
    }

    pub fn fraction_bytes(self) -> u8 {
        self.0 & 0x0F
    }

    pub fn is_raw(self) -> bool {
        self.0 == 0
    }

    /// Bytes occupied by one element on disk.
    pub fn element_width(self) -> u64 {
        if self.is_raw() {
            1
        } else {
            u64::from(self.integer_bytes()) + u64::from(self.fraction_bytes())
        }
    }
}

/// Fixed 10-byte header in front of every attribute payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub entity_id: u32,
    pub kind: AttributeKind,
    pub format: Format,
    pub count: u32,
}

impl RecordHeader {
    pub const SIZE: u64 = 10;

    pub fn read<S: ByteSource + ?Sized>(source: &mut S) -> MatResult<Self> {
        let entity_id = source.read_u32_be()?;
        let kind = AttributeKind::from_code(source.read()?);
        let format = Format(source.read()?);
        let count = source.read_u32_be()?;
        Ok(Self {
            entity_id,
            kind,
            format,
            count,
        })
    }

    /// Payload length in bytes, derived from the header alone.
    pub fn payload_len(&self) -> u64 {
        u64::from(self.count) * self.format.element_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    #[test]
    fn format_nibbles() {
        let f = Format(0x31);
        assert_eq!(f.integer_bytes(), 3);
        assert_eq!(f.fraction_bytes(), 1);
        assert_eq!(f.element_width(), 4);
        assert_eq!(Format::new(3, 1), f);
        assert_eq!(Format::RAW.element_width(), 1);
    }

    #[test]
    fn header_is_big_endian() {
        let mut src = MemorySource::new(vec![0, 0, 1, 2, 0x22, 0x12, 0, 0, 0, 9]);
        let header = RecordHeader::read(&mut src).unwrap();
        assert_eq!(header.entity_id, 0x0102);
        assert_eq!(header.kind, AttributeKind::Vert);
        assert_eq!(header.format, Format(0x12));
        assert_eq!(header.count, 9);
        assert_eq!(header.payload_len(), 27);
        assert_eq!(src.head(), RecordHeader::SIZE);
    }
}
