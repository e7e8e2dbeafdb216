//! Tracking module - temporal state layered on the stateless gesture core
//!
//! Smoothing, hysteresis, size history and trigger debouncing. Nothing here
//! is required to use `gesture`; it is what a UI loop would otherwise keep in
//! ad-hoc timers and buffers.
//!
//! Re-exports only. All logic in submodules.

mod config;
mod hand;
mod one_euro;
mod pinch_latch;
mod session;
mod size_history;
mod trigger;

pub use config::{TrackingConfig, DEFAULT_MENU_PALM_AREA};
pub use hand::{HandTracker, TrackedHand};
pub use one_euro::{LandmarkSmoother, OneEuroFilter};
pub use pinch_latch::{PinchLatch, DEFAULT_ENGAGE_STRENGTH, DEFAULT_RELEASE_STRENGTH};
pub use session::{FrameReport, GestureSession, SessionConfig, TwoHandState};
pub use size_history::{HandSizeHistory, SIZE_DEAD_ZONE, SIZE_HISTORY_FRAMES};
pub use trigger::{GestureTrigger, TriggerPhase, DEFAULT_COOLDOWN_MS, DEFAULT_HOLD_MS};
