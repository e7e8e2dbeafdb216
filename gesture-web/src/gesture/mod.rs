//! Gesture module - pure hand-pose interpretation
//!
//! Converts one 21-point MediaPipe hand skeleton into a `GestureState`.
//! No state between calls; everything here is reentrant.
//! Re-exports only. All logic in submodules.

mod analysis;
mod config;
mod fingers;
mod geometry;
mod palm;
mod pinch;
mod rotation;
mod screen;
mod skeleton;
mod two_hand;

#[cfg(test)]
pub(crate) mod fixtures;

pub use analysis::{analyze_gesture, analyze_gesture_default, GestureState};
pub(crate) use config::{require_non_negative, require_positive};
pub use config::{
    ConfigError, GestureConfig, RingReferenceJoint, RollMethod, DEFAULT_CROSSED_WRIST_DISTANCE,
    DEFAULT_KNUCKLES_THRESHOLD, DEFAULT_PINCH_THRESHOLD, EXTENSION_RATIO,
};
pub use fingers::{detect_finger_states, is_finger_extended, reference_joint, FingerStates};
pub use geometry::{distance_2d, distance_3d, midpoint_2d};
pub use palm::{hand_size, is_palm_facing_camera, palm_area, palm_center};
pub use pinch::{detect_all_pinches, detect_pinch, PinchGesture, PinchSet, PINCH_PARTNERS};
pub use rotation::{calculate_hand_rotation, calculate_pitch, calculate_roll, calculate_yaw, HandRotation};
pub use screen::{normalize_to_screen, rotation_to_slider_value};
pub use skeleton::{
    Finger, HandJoint, HandSkeleton, Handedness, Landmark, Point2, SkeletonError,
    FLOATS_PER_HAND, HAND_CONNECTIONS, LANDMARK_COUNT,
};
pub use two_hand::{detect_arms_crossed, detect_knuckles_together, knuckle_centroid};
