// On-disk layout of MAT streams: attribute kinds, format byte, record header
// and the entity-numbering schema.

mod header;
mod kind;
mod schema;

pub use header::*;
pub use kind::*;
pub use schema::*;

/// Format revision written by current exporters.
pub const MAT_VERSION: u8 = 9;

/// Optional stream marker: `b"MAT"` followed by one version byte.
pub const MAT_MAGIC: [u8; 3] = *b"MAT";
