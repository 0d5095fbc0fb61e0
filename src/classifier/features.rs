//! Feature extraction for the exercise classifier
//!
//! One frame becomes a 3×18 block: an x row, a y row, and a confidence row
//! over the 18-joint vocabulary, matching the CNN training layout. Joints
//! failing the confidence gate contribute zeros.

use crate::analysis::{FramePose, Joint, CONFIDENCE_THRESHOLD};

/// Channels per frame: x row, y row, confidence row
pub const CHANNELS: usize = 3;

/// Joints per row
pub const JOINTS: usize = Joint::COUNT;

/// Per-frame classifier input block
pub type FrameFeatures = [[f32; JOINTS]; CHANNELS];

/// Extract the 3×18 feature block for one frame
pub fn extract_frame_features(pose: &FramePose) -> FrameFeatures {
    let mut features = empty_frame_features();

    for (k, &joint) in Joint::ALL.iter().enumerate() {
        if let Some(point) = pose.get(joint) {
            if point.confidence > CONFIDENCE_THRESHOLD {
                features[0][k] = point.x;
                features[1][k] = point.y;
                features[2][k] = point.confidence;
            }
        }
    }

    features
}

/// All-zero block, used for frames with no detected pose
pub fn empty_frame_features() -> FrameFeatures {
    [[0.0; JOINTS]; CHANNELS]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Keypoint;

    #[test]
    fn detected_joint_fills_all_three_rows() {
        let mut pose = FramePose::new();
        pose.set(Joint::Neck, Keypoint::new(0.4, 0.3, 0.9));

        let features = extract_frame_features(&pose);
        let k = Joint::Neck.index();
        assert_eq!(features[0][k], 0.4);
        assert_eq!(features[1][k], 0.3);
        assert_eq!(features[2][k], 0.9);
    }

    #[test]
    fn gated_joint_stays_zero() {
        let mut pose = FramePose::new();
        pose.set(Joint::Nose, Keypoint::new(0.4, 0.3, 0.2));

        let features = extract_frame_features(&pose);
        let k = Joint::Nose.index();
        assert_eq!(features[0][k], 0.0);
        assert_eq!(features[1][k], 0.0);
        assert_eq!(features[2][k], 0.0);
    }
}
