//! Hand-built MAT streams for integration tests.

#![allow(dead_code)]

pub const MESH: u8 = 0x10;
pub const VERT: u8 = 0x22;
pub const NORM: u8 = 0x32;
pub const TEXT: u8 = 0x51;
pub const SKIN: u8 = 0x60;
pub const ANIM: u8 = 0x70;
pub const POSE: u8 = 0x8B;
pub const SLOT: u8 = 0x90;
pub const TIME: u8 = 0xA0;

#[derive(Default)]
pub struct StreamBuilder {
    bytes: Vec<u8>,
}

impl StreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marked(version: u8) -> Self {
        let mut bytes = b"MAT".to_vec();
        bytes.push(version);
        Self { bytes }
    }

    pub fn record(mut self, id: u32, kind: u8, format: u8, count: u32, payload: &[u8]) -> Self {
        self.bytes.extend_from_slice(&id.to_be_bytes());
        self.bytes.push(kind);
        self.bytes.push(format);
        self.bytes.extend_from_slice(&count.to_be_bytes());
        self.bytes.extend_from_slice(payload);
        self
    }

    pub fn raw(self, id: u32, kind: u8, payload: &[u8]) -> Self {
        self.record(id, kind, 0, payload.len() as u32, payload)
    }

    /// Values stored with one integer and one fraction byte (range -128..128).
    pub fn fixed_1_1(self, id: u32, kind: u8, values: &[f32]) -> Self {
        let payload: Vec<u8> = values
            .iter()
            .flat_map(|v| {
                let encoded = ((v + 128.0) * 256.0).round() as u16;
                encoded.to_be_bytes()
            })
            .collect();
        self.record(id, kind, 0x11, values.len() as u32, &payload)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// A cube-ish file: two meshes and one two-keyframe animation.
pub fn sample_file() -> Vec<u8> {
    let translate = |x: f32| vec![1.0, 0.0, 0.0, x, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let mut pose = translate(0.0);
    pose.extend(translate(2.0));

    StreamBuilder::new()
        .raw(0, MESH, b"cube")
        .fixed_1_1(0, VERT, &[-1.0, -1.0, 0.5, 1.0, 1.0, 0.5])
        .fixed_1_1(0, NORM, &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0])
        .fixed_1_1(0, TEXT, &[0.0, 0.0, 1.0, 1.0])
        .raw(0, SKIN, &[0, 0])
        .raw(1, MESH, b"plane")
        .fixed_1_1(1, VERT, &[0.25, 0.0, 0.0])
        .raw(0, ANIM, b"slide")
        .fixed_1_1(0, POSE, &pose)
        .raw(0, SLOT, &[0, 1])
        .fixed_1_1(0, TIME, &[0.0, 1.5])
        .build()
}
