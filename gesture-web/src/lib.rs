//! Gesture Web - hand-gesture interpretation for MediaPipe hand landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! `gesture` is the pure per-frame analyzer, `tracking` layers temporal state
//! on top of it, and `bridge` exposes both to JavaScript.

pub mod bridge;
pub mod gesture;
pub mod tracking;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{analyze_hand, apply_hand_landmarks, configure_gestures, get_frame_report};
pub use gesture::{analyze_gesture, GestureConfig, GestureState, HandSkeleton};
pub use tracking::{GestureSession, SessionConfig};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!(
        "✅ Gesture module loaded ({} landmarks per hand)",
        gesture::LANDMARK_COUNT
    );
}
