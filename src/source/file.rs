use super::ByteSource;
use crate::error::{keys, MatError, MatResult};
use byteorder::ReadBytesExt;
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;

/// Byte source backed by an open file, read through a `BufReader`.
#[derive(Debug)]
pub struct FileSource {
    reader: BufReader<File>,
    pos: u64,
    len: u64,
}

impl FileSource {
    pub fn open(path: impl AsRef<Path>) -> MatResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MatError::new(keys::OPEN_FAILED)
                .with_arg("path", path.display())
                .push_std(e)
        })?;
        Self::from_file(file)
    }

    pub fn from_file(file: File) -> MatResult<Self> {
        let len = file.metadata()?.len();
        let mut reader = BufReader::new(file);
        reader.seek(SeekFrom::Start(0))?;
        Ok(Self {
            reader,
            pos: 0,
            len,
        })
    }
}

impl ByteSource for FileSource {
    fn read(&mut self) -> MatResult<u8> {
        let byte = self.reader.read_u8()?;
        self.pos += 1;
        Ok(byte)
    }

    fn seek(&mut self, offset: u64) -> MatResult<()> {
        // seek_relative keeps the buffer when the target is close by
        let delta = offset as i128 - self.pos as i128;
        match i64::try_from(delta) {
            Ok(delta) => self.reader.seek_relative(delta)?,
            Err(_) => {
                self.reader.seek(SeekFrom::Start(offset))?;
            }
        }
        self.pos = offset;
        Ok(())
    }

    fn head(&self) -> u64 {
        self.pos
    }

    fn size(&self) -> u64 {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_matches_contents() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&[0, 0, 0, 7, 0xAA, 0xBB]).unwrap();
        tmp.flush().unwrap();

        let mut src = FileSource::open(tmp.path()).unwrap();
        assert_eq!(src.size(), 6);
        assert_eq!(src.read_u32_be().unwrap(), 7);
        src.seek(5).unwrap();
        assert_eq!(src.read().unwrap(), 0xBB);
        src.seek(4).unwrap();
        assert_eq!(src.head(), 4);
        assert_eq!(src.read().unwrap(), 0xAA);
    }

    #[test]
    fn missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::open(dir.path().join("missing.mat")).unwrap_err();
        assert_eq!(err.key, "open-failed");
    }
}
