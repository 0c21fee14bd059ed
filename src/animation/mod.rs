// Animation playback on top of decoded records.

pub mod pose;
pub mod skinning;

pub use pose::*;
pub use skinning::*;
