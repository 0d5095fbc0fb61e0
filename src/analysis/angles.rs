//! Joint angle calculation using dot product
//!
//! The angle at a joint is measured between the rays to its two neighbouring
//! joints: cos(θ) = (v1 · v2) / (|v1| × |v2|). Low-confidence keypoints make
//! the whole frame yield no sample for that joint, never a zero.

use nalgebra::Vector2;

use super::pose::{FramePose, Joint};

/// Keypoints at or below this confidence are treated as undetected
pub const CONFIDENCE_THRESHOLD: f32 = 0.3;

/// Rays shorter than this produce no angle (degenerate geometry)
const MIN_RAY_LENGTH: f32 = 1e-4;

/// Angle in degrees at `vertex` between the rays to `a` and `b`.
///
/// Returns 180° for collinear points with the vertex between them, 0° when
/// both rays point the same way, and `None` when either ray is (near) zero
/// length.
pub fn angle_between(a: (f32, f32), vertex: (f32, f32), b: (f32, f32)) -> Option<f32> {
    let v1 = Vector2::new(a.0 - vertex.0, a.1 - vertex.1);
    let v2 = Vector2::new(b.0 - vertex.0, b.1 - vertex.1);

    let mag1 = v1.norm();
    let mag2 = v2.norm();
    if mag1 < MIN_RAY_LENGTH || mag2 < MIN_RAY_LENGTH {
        return None;
    }

    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    Some(cos_angle.acos().to_degrees())
}

/// Position of `joint` if detected above the confidence gate
fn gated(pose: &FramePose, joint: Joint) -> Option<(f32, f32)> {
    let point = pose.get(joint)?;
    if point.confidence > CONFIDENCE_THRESHOLD {
        Some(point.position())
    } else {
        None
    }
}

/// Left knee angle: hip–knee–ankle
pub fn knee_angle(pose: &FramePose) -> Option<f32> {
    let hip = gated(pose, Joint::LeftHip)?;
    let knee = gated(pose, Joint::LeftKnee)?;
    let ankle = gated(pose, Joint::LeftAnkle)?;
    angle_between(hip, knee, ankle)
}

/// Right hip angle: shoulder–hip–knee
pub fn hip_angle(pose: &FramePose) -> Option<f32> {
    let shoulder = gated(pose, Joint::RightShoulder)?;
    let hip = gated(pose, Joint::RightHip)?;
    let knee = gated(pose, Joint::RightKnee)?;
    angle_between(shoulder, hip, knee)
}

/// Arm angle: mean of the left and right elbow angles (shoulder–elbow–wrist).
///
/// Both sides must pass the confidence gate; averaging the two elbows keeps
/// a single occluded side from skewing the bench trace.
pub fn arm_angle(pose: &FramePose) -> Option<f32> {
    let right = angle_between(
        gated(pose, Joint::RightShoulder)?,
        gated(pose, Joint::RightElbow)?,
        gated(pose, Joint::RightWrist)?,
    )?;
    let left = angle_between(
        gated(pose, Joint::LeftShoulder)?,
        gated(pose, Joint::LeftElbow)?,
        gated(pose, Joint::LeftWrist)?,
    )?;
    Some((right + left) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pose::Keypoint;

    #[test]
    fn collinear_points_give_180() {
        let angle = angle_between((0.0, 0.0), (0.5, 0.0), (1.0, 0.0)).unwrap();
        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn right_angle() {
        let angle = angle_between((0.0, 0.0), (0.5, 0.0), (0.5, 0.5)).unwrap();
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn parallel_rays_give_0() {
        let angle = angle_between((1.0, 0.0), (0.0, 0.0), (0.5, 0.0)).unwrap();
        assert!(angle.abs() < 1e-3);
    }

    #[test]
    fn zero_length_ray_gives_no_sample() {
        assert!(angle_between((0.5, 0.5), (0.5, 0.5), (1.0, 0.0)).is_none());
    }

    fn leg_pose(confidence: f32) -> FramePose {
        let mut pose = FramePose::new();
        pose.set(Joint::LeftHip, Keypoint::new(0.5, 0.2, confidence));
        pose.set(Joint::LeftKnee, Keypoint::new(0.5, 0.5, confidence));
        pose.set(Joint::LeftAnkle, Keypoint::new(0.5, 0.8, confidence));
        pose
    }

    #[test]
    fn confidence_gate_is_strictly_greater() {
        // 0.30 is excluded, 0.31 is included
        assert!(knee_angle(&leg_pose(0.30)).is_none());
        assert!(knee_angle(&leg_pose(0.31)).is_some());
    }

    #[test]
    fn straight_leg_knee_angle() {
        let angle = knee_angle(&leg_pose(0.9)).unwrap();
        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn arm_angle_averages_both_elbows() {
        let mut pose = FramePose::new();
        // Right arm straight (180°)
        pose.set(Joint::RightShoulder, Keypoint::new(0.2, 0.2, 0.9));
        pose.set(Joint::RightElbow, Keypoint::new(0.2, 0.5, 0.9));
        pose.set(Joint::RightWrist, Keypoint::new(0.2, 0.8, 0.9));
        // Left arm bent at 90°
        pose.set(Joint::LeftShoulder, Keypoint::new(0.8, 0.2, 0.9));
        pose.set(Joint::LeftElbow, Keypoint::new(0.8, 0.5, 0.9));
        pose.set(Joint::LeftWrist, Keypoint::new(0.5, 0.5, 0.9));

        let angle = arm_angle(&pose).unwrap();
        assert!((angle - 135.0).abs() < 1e-3);
    }

    #[test]
    fn arm_angle_requires_both_sides() {
        let mut pose = FramePose::new();
        pose.set(Joint::RightShoulder, Keypoint::new(0.2, 0.2, 0.9));
        pose.set(Joint::RightElbow, Keypoint::new(0.2, 0.5, 0.9));
        pose.set(Joint::RightWrist, Keypoint::new(0.2, 0.8, 0.9));
        // Left side occluded
        assert!(arm_angle(&pose).is_none());
    }
}
