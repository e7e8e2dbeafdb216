//! Per-hand, per-frame gesture analysis
//!
//! Single entry point that runs every detector over one skeleton and packs
//! the results into a `GestureState`.

use serde::Serialize;

use super::config::GestureConfig;
use super::fingers::{detect_finger_states, FingerStates};
use super::palm::{hand_size, is_palm_facing_camera, palm_area, palm_center};
use super::pinch::{detect_all_pinches, PinchSet};
use super::rotation::{calculate_hand_rotation, HandRotation};
use super::skeleton::{HandSkeleton, Point2};

/// Everything known about one hand in one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureState {
    pub pinches: PinchSet,
    pub rotation: HandRotation,
    pub palm_center: Point2,
    pub palm_area: f32,
    pub hand_size: f32,
    /// All five fingers extended
    pub is_open: bool,
    /// No finger extended
    pub is_fist: bool,
    pub is_palm_facing_camera: bool,
    pub finger_states: FingerStates,
}

pub fn analyze_gesture(skeleton: &HandSkeleton, config: &GestureConfig) -> GestureState {
    let finger_states = detect_finger_states(skeleton, config);

    GestureState {
        pinches: detect_all_pinches(skeleton, config.pinch_threshold),
        rotation: calculate_hand_rotation(skeleton, config.roll_method),
        palm_center: palm_center(skeleton),
        palm_area: palm_area(skeleton),
        hand_size: hand_size(skeleton),
        is_open: finger_states.all_extended(),
        is_fist: finger_states.none_extended(),
        is_palm_facing_camera: is_palm_facing_camera(skeleton, config),
        finger_states,
    }
}

/// `analyze_gesture` with default thresholds
pub fn analyze_gesture_default(skeleton: &HandSkeleton) -> GestureState {
    analyze_gesture(skeleton, &GestureConfig::default())
}
