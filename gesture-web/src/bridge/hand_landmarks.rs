//! Hand landmark intake and gesture session storage
//!
//! JS hands over each MediaPipe HandLandmarker result as one flat Float32Array
//! (63 floats per hand) plus the matching handedness labels. The session lives
//! in thread-local storage (WASM is single-threaded); results are read back as
//! JSON.

use std::cell::RefCell;

use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::gesture::{ConfigError, GestureConfig, HandSkeleton, Handedness, SkeletonError, FLOATS_PER_HAND};
use crate::tracking::{GestureSession, SessionConfig};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("hand {hand}: {source}")]
    Skeleton {
        hand: usize,
        #[source]
        source: SkeletonError,
    },

    #[error(transparent)]
    Tracking(#[from] SkeletonError),

    #[error("landmark data holds {floats} floats for {labels} handedness labels (expected {expected})")]
    HandCountMismatch {
        floats: usize,
        labels: usize,
        expected: usize,
    },

    #[error("unknown handedness label: {0:?}")]
    UnknownHandedness(String),

    #[error("invalid gesture config: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Split a flat multi-hand buffer into labelled skeletons
pub fn parse_hands<S: AsRef<str>>(
    flat_data: &[f32],
    labels: &[S],
) -> Result<Vec<(Handedness, HandSkeleton)>, BridgeError> {
    let expected = labels.len() * FLOATS_PER_HAND;
    if flat_data.len() != expected {
        return Err(BridgeError::HandCountMismatch {
            floats: flat_data.len(),
            labels: labels.len(),
            expected,
        });
    }

    flat_data
        .chunks_exact(FLOATS_PER_HAND)
        .zip(labels)
        .enumerate()
        .map(|(hand, (chunk, label))| {
            let label = label.as_ref();
            let handedness = Handedness::from_label(label)
                .ok_or_else(|| BridgeError::UnknownHandedness(label.to_string()))?;
            let skeleton = HandSkeleton::from_flat(chunk)
                .map_err(|source| BridgeError::Skeleton { hand, source })?;
            Ok((handedness, skeleton))
        })
        .collect()
}

thread_local! {
    static SESSION: RefCell<GestureSession> = RefCell::new(GestureSession::default());
}

// ============================================================================
// INTERNAL API
// ============================================================================

/// Gesture thresholds currently applied to the session
pub fn current_gesture_config() -> GestureConfig {
    SESSION.with(|session_cell| session_cell.borrow().config().gesture.clone())
}

// ============================================================================
// WASM API
// ============================================================================

/// Parse and check a JSON session config without applying it
pub fn parse_session_config(json: &str) -> Result<SessionConfig, BridgeError> {
    let config: SessionConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Apply a JSON `{ gesture: {...}, tracking: {...} }` config; omitted fields
/// keep their defaults. Resets tracking history. Out-of-range values are
/// rejected and the current config stays in place.
#[wasm_bindgen]
pub fn configure_gestures(json: &str) -> Result<(), JsValue> {
    let config = parse_session_config(json)?;
    SESSION.with(|session_cell| session_cell.borrow_mut().set_config(config));
    web_sys::console::log_1(&"🖐️ Gesture config applied".into());
    Ok(())
}

/// Current config as JSON
#[wasm_bindgen]
pub fn get_gesture_config() -> Result<String, JsValue> {
    SESSION.with(|session_cell| -> Result<String, JsValue> {
        serde_json::to_string(session_cell.borrow().config())
            .map_err(|e| BridgeError::from(e).into())
    })
}

/// Called from JavaScript once per HandLandmarker result.
///
/// `flat_data`: `labels.length * 63` floats, hands in detector order.
/// `handedness`: array of "Left"/"Right" strings, one per hand.
#[wasm_bindgen]
pub fn apply_hand_landmarks(flat_data: &[f32], handedness: &js_sys::Array) -> Result<(), JsValue> {
    let labels: Vec<String> = handedness
        .iter()
        .map(|v| v.as_string().unwrap_or_default())
        .collect();

    let hands = match parse_hands(flat_data, &labels) {
        Ok(hands) => hands,
        Err(err) => {
            web_sys::console::warn_1(&format!("Rejected hand frame: {}", err).into());
            return Err(err.into());
        }
    };

    let now = js_sys::Date::now();
    SESSION.with(|session_cell| -> Result<(), JsValue> {
        let mut session = session_cell.borrow_mut();
        let report = session.process_frame(&hands, now).map_err(BridgeError::from)?;

        if report.two_hand.knuckles_triggered {
            web_sys::console::log_1(&"👊 Knuckles together".into());
        }
        if report.two_hand.arms_crossed_triggered {
            web_sys::console::log_1(&"🙅 Arms crossed".into());
        }
        Ok(())
    })
}

/// Latest frame report as JSON (`{ left, right, twoHand }`), or undefined
/// before the first frame
#[wasm_bindgen]
pub fn get_frame_report() -> Result<Option<String>, JsValue> {
    SESSION.with(|session_cell| -> Result<Option<String>, JsValue> {
        let session = session_cell.borrow();
        let report = session.last_report();
        if report.hand_count() == 0 {
            return Ok(None);
        }
        serde_json::to_string(report)
            .map(Some)
            .map_err(|e| BridgeError::from(e).into())
    })
}

/// One hand's latest tracked gesture as JSON, by "Left"/"Right" label
#[wasm_bindgen]
pub fn get_hand_gesture(label: &str) -> Result<Option<String>, JsValue> {
    let handedness = Handedness::from_label(label)
        .ok_or_else(|| BridgeError::UnknownHandedness(label.to_string()))?;

    SESSION.with(|session_cell| -> Result<Option<String>, JsValue> {
        let session = session_cell.borrow();
        match session.last_report().hand(handedness) {
            Some(hand) => serde_json::to_string(hand)
                .map(Some)
                .map_err(|e| BridgeError::from(e).into()),
            None => Ok(None),
        }
    })
}

/// Drop all tracking history (e.g. camera restarted)
#[wasm_bindgen]
pub fn reset_gestures() {
    SESSION.with(|session_cell| session_cell.borrow_mut().reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::HandJoint;

    fn hand_floats(offset: f32) -> Vec<f32> {
        (0..FLOATS_PER_HAND).map(|i| offset + i as f32 * 0.001).collect()
    }

    #[test]
    fn test_parse_two_hands_in_order() {
        let mut flat = hand_floats(0.1);
        flat.extend(hand_floats(0.5));

        let hands = parse_hands(&flat, &["Right", "Left"]).unwrap();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0].0, Handedness::Right);
        assert_eq!(hands[1].0, Handedness::Left);
        assert!((hands[1].1.joint(HandJoint::Wrist).x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_parse_no_hands() {
        let labels: [&str; 0] = [];
        assert!(parse_hands(&[], &labels).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_count_mismatch() {
        let flat = hand_floats(0.1);
        let err = parse_hands(&flat, &["Left", "Right"]).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::HandCountMismatch { floats: 63, labels: 2, expected: 126 }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let err = parse_hands(&hand_floats(0.1), &["Both"]).unwrap_err();
        assert!(matches!(err, BridgeError::UnknownHandedness(ref l) if l == "Both"));
    }

    #[test]
    fn test_parse_reports_bad_hand_index() {
        let mut flat = hand_floats(0.1);
        flat.extend(hand_floats(0.5));
        flat[FLOATS_PER_HAND + 4] = f32::INFINITY;

        let err = parse_hands(&flat, &["Left", "Right"]).unwrap_err();
        assert!(matches!(err, BridgeError::Skeleton { hand: 1, .. }));
        assert_eq!(err.to_string(), "hand 1: non-finite coordinate at thumb_cmc");
    }

    #[test]
    fn test_session_config_rejects_zero_pinch_threshold() {
        let err = parse_session_config(r#"{"gesture": {"pinchThreshold": 0}}"#).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Config(ConfigError::NotPositive { field: "pinchThreshold", .. })
        ));
        assert_eq!(
            err.to_string(),
            "invalid gesture config: pinchThreshold must be a positive number, got 0"
        );

        let config = parse_session_config(r#"{"gesture": {"pinchThreshold": 0.05}}"#).unwrap();
        assert_eq!(config.gesture.pinch_threshold, 0.05);
    }
}
