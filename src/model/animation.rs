use super::Text;
use crate::animation::{frame_at, sample_pose};
use nalgebra_glm as glm;
use serde::Serialize;

/// Skeletal animation for one entity index.
///
/// Pose, slot and time buffers are never empty; [`Animation::new`] refuses to
/// build one otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    name: Option<Text>,
    /// Flattened 3x4 row-major affine blocks.
    pose: Vec<f32>,
    /// Index of the first pose block of each keyframe, in blocks.
    slots: Vec<u32>,
    /// Keyframe times, expected to increase.
    times: Vec<f32>,
}

impl Animation {
    pub fn new(name: Option<Text>, pose: Vec<f32>, slots: Vec<u32>, times: Vec<f32>) -> Option<Self> {
        if pose.is_empty() || slots.is_empty() || times.is_empty() {
            return None;
        }
        Some(Self {
            name,
            pose,
            slots,
            times,
        })
    }

    pub fn name(&self) -> Option<&Text> {
        self.name.as_ref()
    }

    pub fn name_str(&self) -> Option<String> {
        self.name.as_ref().map(|n| n.to_str_lossy().into_owned())
    }

    pub fn pose(&self) -> &[f32] {
        &self.pose
    }

    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    pub fn times(&self) -> &[f32] {
        &self.times
    }

    /// Time of the last keyframe.
    pub fn duration(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    pub fn frame_count(&self) -> usize {
        self.slots.len()
    }

    /// Keyframe selected for `time` (stepped, no blending).
    pub fn frame_at(&self, time: f32) -> usize {
        frame_at(&self.times, self.slots.len(), time)
    }

    /// Row-major 4x4 transform of `bone` at `time`.
    pub fn sample_pose(&self, time: f32, bone: u32) -> [f32; 16] {
        sample_pose(self, time, bone)
    }

    pub fn pose_matrix(&self, time: f32, bone: u32) -> glm::Mat4 {
        glm::Mat4::from_row_slice(&self.sample_pose(time, bone))
    }
}
