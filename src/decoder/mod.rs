// Decoding of MAT streams: scan, skip, decode, assemble.

pub mod assembler;
pub mod fixed;
pub mod narrow;
pub mod scanner;


pub use assembler::{assemble_animation, assemble_mesh};
pub use fixed::decode_fixed;
pub use narrow::*;
pub use scanner::{scan, AttributeData};

use crate::error::MatResult;
use crate::format::{AttributeKind, Schema};
use crate::model::{Animation, Mesh};
use crate::settings::DecoderSettings;
use crate::source::{ByteSource, FileSource, MemorySource};
use std::path::Path;

/// One open MAT stream with its schema settled.
#[derive(Debug)]
pub struct Decoder<S> {
    source: S,
    schema: Schema,
}

impl Decoder<FileSource> {
    pub fn open(path: impl AsRef<Path>) -> MatResult<Self> {
        Self::new(FileSource::open(path)?)
    }

    pub fn open_with(path: impl AsRef<Path>, settings: &DecoderSettings) -> MatResult<Self> {
        Self::with_settings(FileSource::open(path)?, settings)
    }
}

impl<B: AsRef<[u8]>> Decoder<MemorySource<B>> {
    pub fn from_bytes(bytes: B) -> MatResult<Self> {
        Self::new(MemorySource::new(bytes))
    }
}

impl<S: ByteSource> Decoder<S> {
    pub fn new(source: S) -> MatResult<Self> {
        Self::with_settings(source, &DecoderSettings::default())
    }

    pub fn with_settings(mut source: S, settings: &DecoderSettings) -> MatResult<Self> {
        let schema = Schema::resolve(&mut source, settings.schema)?;
        Ok(Self { source, schema })
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Decode a single attribute of one entity.
    pub fn scan(&mut self, entity: u32, kind: AttributeKind) -> MatResult<Option<AttributeData>> {
        scan(&mut self.source, &self.schema, entity, kind)
    }

    pub fn mesh(&mut self, index: u32) -> MatResult<Mesh> {
        assemble_mesh(&mut self.source, &self.schema, index)
    }

    pub fn animation(&mut self, index: u32) -> MatResult<Option<Animation>> {
        assemble_animation(&mut self.source, &self.schema, index)
    }

    /// Meshes 0, 1, 2, ... up to the first empty one.
    pub fn meshes(&mut self) -> Meshes<'_, S> {
        Meshes {
            decoder: self,
            next: 0,
            done: false,
        }
    }

    /// Animations 0, 1, 2, ... up to the first missing or invalid one.
    pub fn animations(&mut self) -> Animations<'_, S> {
        Animations {
            decoder: self,
            next: 0,
            done: false,
        }
    }
}

pub struct Meshes<'a, S> {
    decoder: &'a mut Decoder<S>,
    next: u32,
    done: bool,
}

impl<S: ByteSource> Iterator for Meshes<'_, S> {
    type Item = MatResult<Mesh>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.decoder.mesh(self.next);
        match &result {
            Ok(mesh) if mesh.is_empty() => {
                self.done = true;
                return None;
            }
            Ok(_) => self.next = self.next.saturating_add(1),
            Err(_) => self.done = true,
        }
        Some(result)
    }
}

impl<S: ByteSource> std::iter::FusedIterator for Meshes<'_, S> {}

pub struct Animations<'a, S> {
    decoder: &'a mut Decoder<S>,
    next: u32,
    done: bool,
}

impl<S: ByteSource> Iterator for Animations<'_, S> {
    type Item = MatResult<Animation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.decoder.animation(self.next) {
            Ok(Some(animation)) => {
                self.next = self.next.saturating_add(1);
                Some(Ok(animation))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: ByteSource> std::iter::FusedIterator for Animations<'_, S> {}
