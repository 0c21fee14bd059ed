// Byte sources the decoder reads from.
// The decoder only ever needs four primitives; everything else is built on top.

mod file;
mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

use crate::error::{keys, MatError, MatResult};
use byteorder::{BigEndian, ByteOrder};

/// Positional byte stream consumed by the scanner.
///
/// Every call moves the same read cursor, so one source must not be shared
/// between concurrent decodes. The `&mut self` receivers enforce that.
pub trait ByteSource {
    /// Read the next byte and advance by one.
    fn read(&mut self) -> MatResult<u8>;

    /// Move the cursor to an absolute offset.
    fn seek(&mut self, offset: u64) -> MatResult<()>;

    /// Current absolute offset.
    fn head(&self) -> u64;

    /// Total stream length in bytes.
    fn size(&self) -> u64;

    fn remaining(&self) -> u64 {
        self.size().saturating_sub(self.head())
    }

    fn read_u32_be(&mut self) -> MatResult<u32> {
        let mut bytes = [0u8; 4];
        for b in bytes.iter_mut() {
            *b = self.read()?;
        }
        Ok(BigEndian::read_u32(&bytes))
    }

    /// Advance past `len` bytes without reading them.
    fn skip(&mut self, len: u64) -> MatResult<()> {
        let target = self
            .head()
            .checked_add(len)
            .ok_or_else(|| MatError::new(keys::SEEK_OVERFLOW).with_arg("len", len))?;
        self.seek(target)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read(&mut self) -> MatResult<u8> {
        (**self).read()
    }

    fn seek(&mut self, offset: u64) -> MatResult<()> {
        (**self).seek(offset)
    }

    fn head(&self) -> u64 {
        (**self).head()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read(&mut self) -> MatResult<u8> {
        (**self).read()
    }

    fn seek(&mut self, offset: u64) -> MatResult<()> {
        (**self).seek(offset)
    }

    fn head(&self) -> u64 {
        (**self).head()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }
}
