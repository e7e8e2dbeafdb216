//! Stateless JS entry points
//!
//! One-off analysis for callers that keep their own per-frame state. These
//! read the session's gesture thresholds but never touch its history.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::gesture::{
    analyze_gesture, detect_arms_crossed, detect_knuckles_together, normalize_to_screen,
    rotation_to_slider_value, HandSkeleton, Point2, HAND_CONNECTIONS,
};

use super::hand_landmarks::{current_gesture_config, BridgeError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TwoHandCheck {
    knuckles_together: bool,
    arms_crossed: bool,
}

/// Analyze one hand (63 floats) and return its `GestureState` as JSON
#[wasm_bindgen]
pub fn analyze_hand(flat_data: &[f32]) -> Result<String, JsValue> {
    let skeleton = HandSkeleton::from_flat(flat_data).map_err(BridgeError::from)?;
    let state = analyze_gesture(&skeleton, &current_gesture_config());
    serde_json::to_string(&state).map_err(|e| BridgeError::from(e).into())
}

/// Evaluate the two-hand poses once; JSON `{ knucklesTogether, armsCrossed }`
#[wasm_bindgen]
pub fn check_two_hand_gestures(left: &[f32], right: &[f32]) -> Result<String, JsValue> {
    let left = HandSkeleton::from_flat(left)
        .map_err(|source| BridgeError::Skeleton { hand: 0, source })?;
    let right = HandSkeleton::from_flat(right)
        .map_err(|source| BridgeError::Skeleton { hand: 1, source })?;
    let config = current_gesture_config();

    let check = TwoHandCheck {
        knuckles_together: detect_knuckles_together(&left, &right, config.knuckles_threshold),
        arms_crossed: detect_arms_crossed(&left, &right, config.crossed_wrist_distance),
    };
    serde_json::to_string(&check).map_err(|e| BridgeError::from(e).into())
}

/// Map a rotation angle (degrees) onto a slider range
#[wasm_bindgen]
pub fn hand_rotation_slider(angle: f32, min: f32, max: f32) -> f32 {
    rotation_to_slider_value(angle, min, max)
}

/// Normalized landmark position to canvas pixels, as `[x, y]`
#[wasm_bindgen]
pub fn landmark_to_screen(x: f32, y: f32, width: f32, height: f32) -> Vec<f32> {
    let p = normalize_to_screen(Point2::new(x, y), width, height);
    vec![p.x, p.y]
}

/// Joint-index pairs for drawing the hand overlay: `[a0, b0, a1, b1, ...]`
#[wasm_bindgen]
pub fn get_hand_connections() -> Vec<u32> {
    HAND_CONNECTIONS
        .iter()
        .flat_map(|(a, b)| [a.index() as u32, b.index() as u32])
        .collect()
}
