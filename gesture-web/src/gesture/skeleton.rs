//! Hand skeleton model - 21 MediaPipe hand landmarks
//!
//! The "exactly 21 points, fixed anatomical order" contract lives in the type:
//! a `HandSkeleton` can only be built from a complete, finite point set, so
//! everything downstream indexes it without checks.

use std::ops::Index;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of landmarks per detected hand
pub const LANDMARK_COUNT: usize = 21;

/// Floats per hand in the flat detector buffer (21 × xyz)
pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

// ============================================================================
// LANDMARK
// ============================================================================

/// A single 3D hand landmark (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized, origin top-left
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth, more negative = closer to camera
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector(self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_vector(v: Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Projection onto the camera plane
    pub fn xy(self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A 2D point in normalized (or, after scaling, screen) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// JOINTS AND FINGERS
// ============================================================================

/// The 21 MediaPipe hand joints, in detector order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandJoint {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl HandJoint {
    pub const ALL: [HandJoint; LANDMARK_COUNT] = [
        HandJoint::Wrist,
        HandJoint::ThumbCmc, HandJoint::ThumbMcp, HandJoint::ThumbIp, HandJoint::ThumbTip,
        HandJoint::IndexMcp, HandJoint::IndexPip, HandJoint::IndexDip, HandJoint::IndexTip,
        HandJoint::MiddleMcp, HandJoint::MiddlePip, HandJoint::MiddleDip, HandJoint::MiddleTip,
        HandJoint::RingMcp, HandJoint::RingPip, HandJoint::RingDip, HandJoint::RingTip,
        HandJoint::PinkyMcp, HandJoint::PinkyPip, HandJoint::PinkyDip, HandJoint::PinkyTip,
    ];

    /// Index into the detector's landmark array (0-20)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            HandJoint::Wrist => "wrist",
            HandJoint::ThumbCmc => "thumb_cmc",
            HandJoint::ThumbMcp => "thumb_mcp",
            HandJoint::ThumbIp => "thumb_ip",
            HandJoint::ThumbTip => "thumb_tip",
            HandJoint::IndexMcp => "index_mcp",
            HandJoint::IndexPip => "index_pip",
            HandJoint::IndexDip => "index_dip",
            HandJoint::IndexTip => "index_tip",
            HandJoint::MiddleMcp => "middle_mcp",
            HandJoint::MiddlePip => "middle_pip",
            HandJoint::MiddleDip => "middle_dip",
            HandJoint::MiddleTip => "middle_tip",
            HandJoint::RingMcp => "ring_mcp",
            HandJoint::RingPip => "ring_pip",
            HandJoint::RingDip => "ring_dip",
            HandJoint::RingTip => "ring_tip",
            HandJoint::PinkyMcp => "pinky_mcp",
            HandJoint::PinkyPip => "pinky_pip",
            HandJoint::PinkyDip => "pinky_dip",
            HandJoint::PinkyTip => "pinky_tip",
        }
    }
}

/// Hand skeleton connections for overlay drawing
pub const HAND_CONNECTIONS: [(HandJoint, HandJoint); 21] = [
    (HandJoint::Wrist, HandJoint::ThumbCmc), (HandJoint::ThumbCmc, HandJoint::ThumbMcp),
    (HandJoint::ThumbMcp, HandJoint::ThumbIp), (HandJoint::ThumbIp, HandJoint::ThumbTip),
    (HandJoint::Wrist, HandJoint::IndexMcp), (HandJoint::IndexMcp, HandJoint::IndexPip),
    (HandJoint::IndexPip, HandJoint::IndexDip), (HandJoint::IndexDip, HandJoint::IndexTip),
    (HandJoint::IndexMcp, HandJoint::MiddleMcp), (HandJoint::MiddleMcp, HandJoint::MiddlePip),
    (HandJoint::MiddlePip, HandJoint::MiddleDip), (HandJoint::MiddleDip, HandJoint::MiddleTip),
    (HandJoint::MiddleMcp, HandJoint::RingMcp), (HandJoint::RingMcp, HandJoint::RingPip),
    (HandJoint::RingPip, HandJoint::RingDip), (HandJoint::RingDip, HandJoint::RingTip),
    (HandJoint::RingMcp, HandJoint::PinkyMcp), (HandJoint::Wrist, HandJoint::PinkyMcp),
    (HandJoint::PinkyMcp, HandJoint::PinkyPip), (HandJoint::PinkyPip, HandJoint::PinkyDip),
    (HandJoint::PinkyDip, HandJoint::PinkyTip),
];

/// The five digits, reported to callers by lowercase name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }

    /// First joint of the finger chain (CMC for the thumb, MCP otherwise)
    pub fn base(self) -> HandJoint {
        match self {
            Finger::Thumb => HandJoint::ThumbCmc,
            Finger::Index => HandJoint::IndexMcp,
            Finger::Middle => HandJoint::MiddleMcp,
            Finger::Ring => HandJoint::RingMcp,
            Finger::Pinky => HandJoint::PinkyMcp,
        }
    }

    pub fn tip(self) -> HandJoint {
        match self {
            Finger::Thumb => HandJoint::ThumbTip,
            Finger::Index => HandJoint::IndexTip,
            Finger::Middle => HandJoint::MiddleTip,
            Finger::Ring => HandJoint::RingTip,
            Finger::Pinky => HandJoint::PinkyTip,
        }
    }
}

/// Detector-supplied hand label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Parse MediaPipe's "Left"/"Right" label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("left") {
            Some(Handedness::Left)
        } else if label.eq_ignore_ascii_case("right") {
            Some(Handedness::Right)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }

    /// Slot index for per-hand storage
    pub fn slot(self) -> usize {
        match self {
            Handedness::Left => 0,
            Handedness::Right => 1,
        }
    }
}

// ============================================================================
// SKELETON
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkeletonError {
    #[error("invalid landmark data length: {actual} (expected {expected})")]
    WrongLength { expected: usize, actual: usize },

    #[error("non-finite coordinate at {joint}")]
    NonFiniteCoordinate { joint: &'static str },
}

/// One detected hand: exactly 21 landmarks in detector order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandSkeleton {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandSkeleton {
    /// Build from a complete landmark array, rejecting NaN/inf coordinates
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Result<Self, SkeletonError> {
        if let Some(bad) = landmarks.iter().position(|l| !l.is_finite()) {
            return Err(SkeletonError::NonFiniteCoordinate {
                joint: HandJoint::ALL[bad].name(),
            });
        }
        Ok(Self { landmarks })
    }

    /// Build from a landmark slice of exactly 21 points
    pub fn from_points(points: &[Landmark]) -> Result<Self, SkeletonError> {
        let landmarks: [Landmark; LANDMARK_COUNT] =
            points.try_into().map_err(|_| SkeletonError::WrongLength {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            })?;
        Self::new(landmarks)
    }

    /// Build from a flat `[x0, y0, z0, x1, ...]` buffer of exactly 63 floats
    pub fn from_flat(data: &[f32]) -> Result<Self, SkeletonError> {
        if data.len() != FLOATS_PER_HAND {
            return Err(SkeletonError::WrongLength {
                expected: FLOATS_PER_HAND,
                actual: data.len(),
            });
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (landmark, xyz) in landmarks.iter_mut().zip(data.chunks_exact(3)) {
            *landmark = Landmark::new(xyz[0], xyz[1], xyz[2]);
        }
        Self::new(landmarks)
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn joint(&self, joint: HandJoint) -> Landmark {
        self.landmarks[joint.index()]
    }

    /// Copy of this skeleton with every landmark shifted by `offset`
    pub fn translated(&self, offset: Vector3<f32>) -> Self {
        let mut landmarks = self.landmarks;
        for landmark in landmarks.iter_mut() {
            *landmark = Landmark::from_vector(landmark.to_vector() + offset);
        }
        Self { landmarks }
    }

    /// Copy of this skeleton with one landmark replaced
    pub fn with_joint(&self, joint: HandJoint, landmark: Landmark) -> Result<Self, SkeletonError> {
        let mut landmarks = self.landmarks;
        landmarks[joint.index()] = landmark;
        Self::new(landmarks)
    }
}

impl Index<HandJoint> for HandSkeleton {
    type Output = Landmark;

    fn index(&self, joint: HandJoint) -> &Landmark {
        &self.landmarks[joint.index()]
    }
}
