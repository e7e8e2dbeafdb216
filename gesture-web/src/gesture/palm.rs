//! Palm descriptors: anchor point, presented area, hand size, facing test

use super::config::GestureConfig;
use super::geometry::distance_2d;
use super::skeleton::{Finger, HandJoint, HandSkeleton, Point2};

/// Knuckle polygon, in perimeter order starting at the wrist
const PALM_OUTLINE: [HandJoint; 5] = [
    HandJoint::Wrist,
    HandJoint::IndexMcp,
    HandJoint::MiddleMcp,
    HandJoint::RingMcp,
    HandJoint::PinkyMcp,
];

/// Mean of wrist, index knuckle and pinky knuckle (2D)
pub fn palm_center(skeleton: &HandSkeleton) -> Point2 {
    let wrist = skeleton.joint(HandJoint::Wrist);
    let index = skeleton.joint(HandJoint::IndexMcp);
    let pinky = skeleton.joint(HandJoint::PinkyMcp);

    Point2::new(
        (wrist.x + index.x + pinky.x) / 3.0,
        (wrist.y + index.y + pinky.y) / 3.0,
    )
}

/// Shoelace area of the wrist + four knuckles polygon.
/// Grows as the palm opens or approaches the camera.
pub fn palm_area(skeleton: &HandSkeleton) -> f32 {
    let mut twice_area = 0.0;
    for i in 0..PALM_OUTLINE.len() {
        let a = skeleton.joint(PALM_OUTLINE[i]);
        let b = skeleton.joint(PALM_OUTLINE[(i + 1) % PALM_OUTLINE.len()]);
        twice_area += a.x * b.y - b.x * a.y;
    }
    twice_area.abs() / 2.0
}

/// Mean 2D wrist-to-fingertip distance; coarse proxy for camera distance
pub fn hand_size(skeleton: &HandSkeleton) -> f32 {
    let wrist = skeleton.joint(HandJoint::Wrist);
    let total: f32 = Finger::ALL
        .iter()
        .map(|finger| distance_2d(wrist, skeleton.joint(finger.tip())))
        .sum();
    total / Finger::ALL.len() as f32
}

/// Palm presented flat towards the camera.
///
/// All three must hold:
/// - wrist sits behind the middle knuckle by more than `palm_depth_margin`
/// - index and pinky knuckles at similar depth (palm not edge-on)
/// - middle fingertip not behind the wrist by more than `fingertip_depth_margin`
pub fn is_palm_facing_camera(skeleton: &HandSkeleton, config: &GestureConfig) -> bool {
    let wrist = skeleton.joint(HandJoint::Wrist);
    let middle_mcp = skeleton.joint(HandJoint::MiddleMcp);
    let index_mcp = skeleton.joint(HandJoint::IndexMcp);
    let pinky_mcp = skeleton.joint(HandJoint::PinkyMcp);
    let middle_tip = skeleton.joint(HandJoint::MiddleTip);

    let wrist_behind = wrist.z - middle_mcp.z > config.palm_depth_margin;
    let knuckles_level = (index_mcp.z - pinky_mcp.z).abs() < config.palm_flatness_tolerance;
    let fingers_forward = middle_tip.z - wrist.z <= config.fingertip_depth_margin;

    wrist_behind && knuckles_level && fingers_forward
}
