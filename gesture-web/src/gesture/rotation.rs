//! Roll / pitch / yaw estimates from hand geometry
//!
//! Each axis is an independent single-axis estimate in degrees, good enough to
//! drive sliders and radial menus. They are not a composed 3D orientation:
//! there is no guarantee of orthogonality between the three.

use serde::Serialize;

use super::config::RollMethod;
use super::palm::palm_center;
use super::skeleton::{Finger, HandJoint, HandSkeleton};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct HandRotation {
    /// On-screen pointing angle, [-180, 180]
    pub roll: f32,
    /// Forward/back tilt, [-90, 90]
    pub pitch: f32,
    /// Turn about the vertical axis, [-180, 180]
    pub yaw: f32,
}

pub fn calculate_hand_rotation(skeleton: &HandSkeleton, method: RollMethod) -> HandRotation {
    HandRotation {
        roll: calculate_roll(skeleton, method),
        pitch: calculate_pitch(skeleton),
        yaw: calculate_yaw(skeleton),
    }
}

pub fn calculate_roll(skeleton: &HandSkeleton, method: RollMethod) -> f32 {
    match method {
        RollMethod::PalmCenter => {
            let center = palm_center(skeleton);
            let tip = skeleton.joint(HandJoint::MiddleTip);
            (tip.y - center.y).atan2(tip.x - center.x).to_degrees()
        }
        RollMethod::FingerAverage => {
            // Circular mean so +179° and -179° average to 180°, not 0°
            let (sin_sum, cos_sum) = Finger::ALL.iter().fold((0.0f32, 0.0f32), |(s, c), finger| {
                let base = skeleton.joint(finger.base());
                let tip = skeleton.joint(finger.tip());
                let angle = (tip.y - base.y).atan2(tip.x - base.x);
                (s + angle.sin(), c + angle.cos())
            });
            let n = Finger::ALL.len() as f32;
            (sin_sum / n).atan2(cos_sum / n).to_degrees()
        }
    }
}

/// Depth change along wrist → middle knuckle against the vertical drop.
/// Using |dy| keeps the denominator non-negative, bounding pitch to ±90°.
pub fn calculate_pitch(skeleton: &HandSkeleton) -> f32 {
    let wrist = skeleton.joint(HandJoint::Wrist);
    let middle_mcp = skeleton.joint(HandJoint::MiddleMcp);
    (middle_mcp.z - wrist.z)
        .atan2((middle_mcp.y - wrist.y).abs())
        .to_degrees()
}

/// Depth differential across the knuckle line (index → pinky)
pub fn calculate_yaw(skeleton: &HandSkeleton) -> f32 {
    let index_mcp = skeleton.joint(HandJoint::IndexMcp);
    let pinky_mcp = skeleton.joint(HandJoint::PinkyMcp);
    (index_mcp.z - pinky_mcp.z)
        .atan2(index_mcp.x - pinky_mcp.x)
        .to_degrees()
}
