mod animation;
mod mesh;
mod text;

pub use animation::*;
pub use mesh::*;
pub use text::*;
