//! Body pose data model
//!
//! A frame of pose data is a fixed set of 18 named keypoints, each with a
//! normalized 2D position and a detection confidence. The ordering matches
//! the wire layout the JS pose detector pushes (and the CNN training data).

/// Named body joints, declared in wire order.
///
/// The discriminant of each variant is its index in the flat per-frame
/// array sent from JavaScript.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Joint {
    Nose = 0,
    Neck = 1,
    RightShoulder = 2,
    RightElbow = 3,
    RightWrist = 4,
    LeftShoulder = 5,
    LeftElbow = 6,
    LeftWrist = 7,
    RightHip = 8,
    RightKnee = 9,
    RightAnkle = 10,
    LeftHip = 11,
    LeftKnee = 12,
    LeftAnkle = 13,
    RightEye = 14,
    LeftEye = 15,
    RightEar = 16,
    LeftEar = 17,
}

impl Joint {
    /// Number of joints in the vocabulary
    pub const COUNT: usize = 18;

    /// All joints in wire order
    pub const ALL: [Joint; Joint::COUNT] = [
        Joint::Nose,
        Joint::Neck,
        Joint::RightShoulder,
        Joint::RightElbow,
        Joint::RightWrist,
        Joint::LeftShoulder,
        Joint::LeftElbow,
        Joint::LeftWrist,
        Joint::RightHip,
        Joint::RightKnee,
        Joint::RightAnkle,
        Joint::LeftHip,
        Joint::LeftKnee,
        Joint::LeftAnkle,
        Joint::RightEye,
        Joint::LeftEye,
        Joint::RightEar,
        Joint::LeftEar,
    ];

    /// Index into the per-frame keypoint array
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single detected keypoint (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    /// Detection confidence in [0, 1]; 0 means "not detected"
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }

    /// 2D position as a tuple
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// All keypoints detected in one video frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FramePose {
    points: [Keypoint; Joint::COUNT],
}

impl FramePose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a frame from the flat wire layout: 18 joints × (x, y, confidence).
    ///
    /// Returns `None` when the slice has the wrong length. Undetected joints
    /// arrive zeroed and stay invisible through [`FramePose::get`].
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() != Joint::COUNT * 3 {
            return None;
        }

        let mut pose = Self::new();
        for (i, chunk) in data.chunks_exact(3).enumerate() {
            pose.points[i] = Keypoint::new(chunk[0], chunk[1], chunk[2]);
        }
        Some(pose)
    }

    /// Record a keypoint for `joint`
    pub fn set(&mut self, joint: Joint, keypoint: Keypoint) {
        self.points[joint.index()] = keypoint;
    }

    /// Look up a joint; `None` when the detector did not see it
    pub fn get(&self, joint: Joint) -> Option<&Keypoint> {
        let point = &self.points[joint.index()];
        if point.confidence > 0.0 {
            Some(point)
        } else {
            None
        }
    }
}
