//! Decoder for MAT asset streams: meshes and stepped skeletal animations
//! stored as flat runs of tagged attribute records.
//!
//! ```no_run
//! let mut decoder = matvis::Decoder::open("cube.mat")?;
//! for mesh in decoder.meshes() {
//!     let mesh = mesh?;
//!     println!("{:?}: {} vertices", mesh.name_str(), mesh.vertex_count());
//! }
//! if let Some(walk) = decoder.animation(0)? {
//!     let root = walk.pose_matrix(0.5, 0);
//!     println!("{root}");
//! }
//! # Ok::<(), matvis::MatError>(())
//! ```

pub mod animation;
pub mod decoder;
pub mod error;
pub mod format;
pub mod model;
pub mod settings;
pub mod source;

pub use animation::{pose_mesh, sample_pose, PosedMesh};
pub use decoder::{AttributeData, Decoder};
pub use error::{MatError, MatResult};
pub use format::{AttributeKind, Format, Schema};
pub use model::{Animation, Mesh, Text};
pub use settings::{DecoderSettings, SchemaChoice};
pub use source::{ByteSource, FileSource, MemorySource};

use std::path::Path;

pub const CONFY_APP_NAME: &str = "matvis-rs";

/// Open `path` and decode the mesh at `index`.
pub fn load_mesh(path: impl AsRef<Path>, index: u32) -> MatResult<Mesh> {
    Decoder::open(path)?.mesh(index)
}

/// Open `path` and decode the animation at `index`.
pub fn load_animation(path: impl AsRef<Path>, index: u32) -> MatResult<Option<Animation>> {
    Decoder::open(path)?.animation(index)
}
