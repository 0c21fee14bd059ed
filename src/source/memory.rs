use super::ByteSource;
use crate::error::{keys, MatError, MatResult};

/// Byte source over an in-memory buffer (`Vec<u8>`, `&[u8]`, ...).
#[derive(Debug, Clone)]
pub struct MemorySource<B> {
    data: B,
    pos: u64,
}

impl<B: AsRef<[u8]>> MemorySource<B> {
    pub fn new(data: B) -> Self {
        Self { data, pos: 0 }
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]>> ByteSource for MemorySource<B> {
    fn read(&mut self) -> MatResult<u8> {
        let bytes = self.data.as_ref();
        let byte = usize::try_from(self.pos)
            .ok()
            .and_then(|i| bytes.get(i).copied())
            .ok_or_else(|| {
                MatError::new(keys::UNEXPECTED_EOF)
                    .with_arg("offset", self.pos)
                    .with_arg("size", bytes.len())
            })?;
        self.pos += 1;
        Ok(byte)
    }

    // Seeking past the end is allowed; the next read reports it.
    fn seek(&mut self, offset: u64) -> MatResult<()> {
        self.pos = offset;
        Ok(())
    }

    fn head(&self) -> u64 {
        self.pos
    }

    fn size(&self) -> u64 {
        self.data.as_ref().len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_head() {
        let mut src = MemorySource::new(vec![0x12, 0x34, 0x56, 0x78, 0x9A]);
        assert_eq!(src.size(), 5);
        assert_eq!(src.read_u32_be().unwrap(), 0x1234_5678);
        assert_eq!(src.head(), 4);
        assert_eq!(src.remaining(), 1);
        assert_eq!(src.read().unwrap(), 0x9A);
    }

    #[test]
    fn read_past_end_is_an_error() {
        let mut src = MemorySource::new(&[1u8][..]);
        src.read().unwrap();
        let err = src.read().unwrap_err();
        assert_eq!(err.key, "unexpected-eof");
        assert_eq!(err.arg("offset"), Some("1"));
    }

    #[test]
    fn seek_and_skip_are_absolute_and_relative() {
        let mut src = MemorySource::new(vec![0, 1, 2, 3, 4, 5]);
        src.seek(4).unwrap();
        assert_eq!(src.read().unwrap(), 4);
        src.seek(0).unwrap();
        src.skip(2).unwrap();
        assert_eq!(src.read().unwrap(), 2);
    }
}
