//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod analysis;
mod hand_landmarks;

pub use hand_landmarks::{
    // WASM entry points
    apply_hand_landmarks,
    configure_gestures,
    get_gesture_config,
    get_frame_report,
    get_hand_gesture,
    reset_gestures,
    // Internal API
    current_gesture_config,
    parse_hands,
    parse_session_config,
    BridgeError,
};

pub use analysis::{
    analyze_hand,
    check_two_hand_gestures,
    get_hand_connections,
    hand_rotation_slider,
    landmark_to_screen,
};
