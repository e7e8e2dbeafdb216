//! Two-hand predicates
//!
//! Stateless, threshold-gated booleans over a left and a right skeleton.
//! Callers that want one-shot triggers wrap them in `tracking::GestureTrigger`.

use nalgebra::Vector3;

use super::geometry::{distance_2d, segments_cross};
use super::skeleton::{HandJoint, HandSkeleton};

const KNUCKLES: [HandJoint; 4] = [
    HandJoint::IndexMcp,
    HandJoint::MiddleMcp,
    HandJoint::RingMcp,
    HandJoint::PinkyMcp,
];

/// 3D centroid of the four non-thumb knuckles
pub fn knuckle_centroid(skeleton: &HandSkeleton) -> Vector3<f32> {
    let sum: Vector3<f32> = KNUCKLES
        .iter()
        .map(|joint| skeleton.joint(*joint).to_vector())
        .sum();
    sum / KNUCKLES.len() as f32
}

/// Knuckles of both hands pressed together
pub fn detect_knuckles_together(left: &HandSkeleton, right: &HandSkeleton, threshold: f32) -> bool {
    (knuckle_centroid(left) - knuckle_centroid(right)).norm() < threshold
}

/// Forearms crossed in an X in front of the chest.
///
/// The wrist→middle-fingertip segments of both hands must cross, and the
/// wrists must be within `max_wrist_distance` of each other (2D).
pub fn detect_arms_crossed(left: &HandSkeleton, right: &HandSkeleton, max_wrist_distance: f32) -> bool {
    let left_wrist = left.joint(HandJoint::Wrist);
    let right_wrist = right.joint(HandJoint::Wrist);

    if distance_2d(left_wrist, right_wrist) >= max_wrist_distance {
        return false;
    }

    segments_cross(
        left_wrist.xy(),
        left.joint(HandJoint::MiddleTip).xy(),
        right_wrist.xy(),
        right.joint(HandJoint::MiddleTip).xy(),
    )
}
