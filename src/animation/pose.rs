// Stepped pose sampling.
// A time maps straight to one keyframe; adjacent keyframes are never blended.

use crate::model::Animation;

/// Floats per bone transform: 3 rows of 4 columns.
pub const POSE_BLOCK: usize = 12;

/// Keyframe index for `time` given keyframe times and the number of slots.
///
/// `time` is clamped to `[0, duration]` where duration is the last keyframe
/// time, then mapped linearly onto `0..slot_count` and floored.
pub fn frame_at(times: &[f32], slot_count: usize, time: f32) -> usize {
    let Some(&duration) = times.last() else {
        return 0;
    };
    if slot_count == 0 || duration.is_nan() || duration <= 0.0 {
        return 0;
    }

    let time = time.max(0.0).min(duration);
    let frame = (time / duration * (slot_count - 1) as f32) as usize;
    frame.min(slot_count - 1)
}

/// Transform of `bone` at `time` as a row-major 4x4 matrix.
///
/// Source indices past the end of the pose buffer are clamped to its last
/// element one by one.
pub fn sample_pose(animation: &Animation, time: f32, bone: u32) -> [f32; 16] {
    let frame = animation.frame_at(time);
    let slot = animation.slots().get(frame).copied().unwrap_or(0) as usize;
    let base = slot
        .saturating_mul(POSE_BLOCK)
        .saturating_add((bone as usize).saturating_mul(POSE_BLOCK));

    let pose = animation.pose();
    let last = pose.len().saturating_sub(1);

    let mut out = [0.0f32; 16];
    for (i, value) in out[..POSE_BLOCK].iter_mut().enumerate() {
        *value = pose.get(base.saturating_add(i).min(last)).copied().unwrap_or(0.0);
    }
    out[15] = 1.0;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Block `n` is filled with `n * 100 + i` for i in 0..12.
    fn numbered_blocks(n: usize) -> Vec<f32> {
        (0..n)
            .flat_map(|b| (0..POSE_BLOCK).map(move |i| (b * 100 + i) as f32))
            .collect()
    }

    fn walk() -> Animation {
        // 4 keyframes, 2 bones per keyframe
        Animation::new(
            None,
            numbered_blocks(8),
            vec![0, 2, 4, 6],
            vec![0.0, 1.0, 2.0, 3.0],
        )
        .unwrap()
    }

    #[test]
    fn time_zero_selects_first_slot() {
        let anim = walk();
        assert_eq!(anim.frame_at(0.0), 0);
        let pose = anim.sample_pose(0.0, 0);
        assert_eq!(pose[0], 0.0);
        assert_eq!(pose[11], 11.0);
    }

    #[test]
    fn end_and_beyond_select_last_slot() {
        let anim = walk();
        assert_eq!(anim.frame_at(3.0), 3);
        assert_eq!(anim.frame_at(99.0), 3);
        assert_eq!(anim.sample_pose(3.0, 0)[0], 600.0);
        assert_eq!(anim.sample_pose(50.0, 1)[0], 700.0);
    }

    #[test]
    fn negative_and_nan_time_clamp_to_start() {
        let anim = walk();
        assert_eq!(anim.frame_at(-5.0), 0);
        assert_eq!(anim.frame_at(f32::NAN), 0);
    }

    #[test]
    fn sampling_is_stepped() {
        let anim = walk();
        // 1.9 / 3 * 3 = 1.9 -> frame 1, no blend toward frame 2
        assert_eq!(anim.frame_at(1.9), 1);
        assert_eq!(anim.sample_pose(1.9, 0)[0], 200.0);
        assert_eq!(anim.sample_pose(1.9, 1)[5], 305.0);
    }

    #[test]
    fn bottom_row_is_homogeneous() {
        let pose = walk().sample_pose(1.0, 1);
        assert_eq!(&pose[12..], &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn undersized_pose_buffer_clamps_per_element() {
        // one and a half blocks, slot points well past the end
        let pose: Vec<f32> = (0..18).map(|i| i as f32).collect();
        let anim = Animation::new(None, pose, vec![0, 40], vec![0.0, 1.0]).unwrap();

        let tail = anim.sample_pose(1.0, 0);
        assert!(tail[..12].iter().all(|&v| v == 17.0));

        // bone 1 of slot 0 straddles the end: 12..17 then clamped
        let straddle = anim.sample_pose(0.0, 1);
        assert_eq!(&straddle[..6], &[12.0, 13.0, 14.0, 15.0, 16.0, 17.0]);
        assert!(straddle[6..12].iter().all(|&v| v == 17.0));
    }

    #[test]
    fn huge_indices_do_not_overflow() {
        let anim = Animation::new(None, numbered_blocks(1), vec![u32::MAX], vec![1.0]).unwrap();
        let pose = anim.sample_pose(0.5, u32::MAX);
        assert!(pose[..12].iter().all(|&v| v == 11.0));
    }

    #[test]
    fn zero_duration_uses_first_frame() {
        let anim = Animation::new(None, numbered_blocks(2), vec![1, 0], vec![0.0, 0.0]).unwrap();
        assert_eq!(anim.frame_at(0.0), 0);
        assert_eq!(anim.sample_pose(0.0, 0)[0], 100.0);
    }

    #[test]
    fn single_keyframe() {
        let anim = Animation::new(None, numbered_blocks(2), vec![1], vec![0.5]).unwrap();
        assert_eq!(anim.frame_at(0.25), 0);
        assert_eq!(anim.sample_pose(0.25, 0)[0], 100.0);
    }

    #[test]
    fn matrix_view_is_row_major() {
        let anim = walk();
        let m = anim.pose_matrix(0.0, 0);
        // row 0, column 3 is the x translation (element 3 of the block)
        assert_eq!(m[(0, 3)], 3.0);
        assert_eq!(m[(2, 0)], 8.0);
        assert_eq!(m[(3, 3)], 1.0);
    }
}
