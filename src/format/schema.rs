use super::{MAT_MAGIC, MAT_VERSION};
use crate::error::MatResult;
use crate::source::ByteSource;
use crate::settings::SchemaChoice;
use log::debug;

/// How records are assigned to entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// Each record carries its entity index in the `entity_id` field.
    Explicit,
    /// The n-th record of a kind belongs to entity n; `entity_id` is ignored.
    Implicit,
}

/// Stream layout decided once when a stream is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub numbering: Numbering,
    /// Offset of the first record header.
    pub data_start: u64,
    /// Version from the stream marker, if the stream has one.
    pub version: Option<u8>,
}

impl Schema {
    pub const UNMARKED: Schema = Schema {
        numbering: Numbering::Explicit,
        data_start: 0,
        version: None,
    };

    pub fn for_version(version: u8) -> Self {
        let numbering = if version >= MAT_VERSION {
            Numbering::Explicit
        } else {
            Numbering::Implicit
        };
        Self {
            numbering,
            data_start: MAT_MAGIC.len() as u64 + 1,
            version: Some(version),
        }
    }

    /// Inspect the start of the stream for a `MAT` marker.
    ///
    /// The marker is not self-delimiting: an unmarked stream whose first
    /// record id starts with the bytes `4D 41 54` reads as a marked stream,
    /// with the id's low byte taken as the version. Use
    /// [`SchemaChoice`] to force the numbering for such files.
    ///
    /// Leaves the source positioned at offset 0.
    pub fn detect<S: ByteSource + ?Sized>(source: &mut S) -> MatResult<Self> {
        let schema = if source.size() >= MAT_MAGIC.len() as u64 + 1 {
            source.seek(0)?;
            let mut magic = [0u8; 3];
            for b in magic.iter_mut() {
                *b = source.read()?;
            }
            if magic == MAT_MAGIC {
                Self::for_version(source.read()?)
            } else {
                Self::UNMARKED
            }
        } else {
            Self::UNMARKED
        };
        source.seek(0)?;
        debug!("detected schema {:?}", schema);
        Ok(schema)
    }

    /// Apply a settings override on top of what the stream declares.
    pub fn resolve<S: ByteSource + ?Sized>(source: &mut S, choice: SchemaChoice) -> MatResult<Self> {
        let detected = Self::detect(source)?;
        Ok(match choice {
            SchemaChoice::Auto => detected,
            SchemaChoice::Explicit => Self {
                numbering: Numbering::Explicit,
                ..detected
            },
            SchemaChoice::Implicit => Self {
                numbering: Numbering::Implicit,
                ..detected
            },
        })
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::UNMARKED
    }
}
