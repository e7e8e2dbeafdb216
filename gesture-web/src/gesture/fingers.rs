//! Finger extension classification
//!
//! A finger counts as extended when its tip is meaningfully farther from the
//! wrist (in the camera plane) than its reference joint. Curling a finger pulls
//! the tip back towards the wrist.

use serde::Serialize;

use super::config::{GestureConfig, RingReferenceJoint};
use super::geometry::distance_2d;
use super::skeleton::{Finger, HandJoint, HandSkeleton};

/// Per-finger extended flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    pub fn get(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn extended_count(&self) -> usize {
        Finger::ALL.iter().filter(|f| self.get(**f)).count()
    }

    pub fn all_extended(&self) -> bool {
        self.extended_count() == Finger::ALL.len()
    }

    pub fn none_extended(&self) -> bool {
        self.extended_count() == 0
    }
}

/// `tip` is extended when `|tip - wrist| > |reference - wrist| * ratio` (2D)
pub fn is_finger_extended(
    skeleton: &HandSkeleton,
    tip: HandJoint,
    reference: HandJoint,
    wrist: HandJoint,
    ratio: f32,
) -> bool {
    let w = skeleton.joint(wrist);
    distance_2d(skeleton.joint(tip), w) > distance_2d(skeleton.joint(reference), w) * ratio
}

/// Joint the tip is compared against for each finger
pub fn reference_joint(finger: Finger, ring: RingReferenceJoint) -> HandJoint {
    match finger {
        // Thumbs have no PIP
        Finger::Thumb => HandJoint::ThumbIp,
        Finger::Index => HandJoint::IndexPip,
        Finger::Middle => HandJoint::MiddlePip,
        Finger::Ring => match ring {
            RingReferenceJoint::Dip => HandJoint::RingDip,
            RingReferenceJoint::Pip => HandJoint::RingPip,
        },
        Finger::Pinky => HandJoint::PinkyPip,
    }
}

pub fn detect_finger_states(skeleton: &HandSkeleton, config: &GestureConfig) -> FingerStates {
    let extended = |finger: Finger| {
        is_finger_extended(
            skeleton,
            finger.tip(),
            reference_joint(finger, config.ring_reference),
            HandJoint::Wrist,
            config.extension_ratio,
        )
    };

    FingerStates {
        thumb: extended(Finger::Thumb),
        index: extended(Finger::Index),
        middle: extended(Finger::Middle),
        ring: extended(Finger::Ring),
        pinky: extended(Finger::Pinky),
    }
}
