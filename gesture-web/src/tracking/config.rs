//! Temporal tracking parameters

use serde::{Deserialize, Serialize};

use crate::gesture::{require_non_negative, require_positive, ConfigError};

use super::pinch_latch::{DEFAULT_ENGAGE_STRENGTH, DEFAULT_RELEASE_STRENGTH};
use super::size_history::SIZE_HISTORY_FRAMES;
use super::trigger::{DEFAULT_COOLDOWN_MS, DEFAULT_HOLD_MS};

/// Minimum palm area for a palm-up menu to show
pub const DEFAULT_MENU_PALM_AREA: f32 = 0.002;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackingConfig {
    /// Run landmarks through the One Euro smoother before analysis
    pub smoothing: bool,
    pub smoothing_min_cutoff: f32,
    pub smoothing_beta: f32,
    pub pinch_engage_strength: f32,
    pub pinch_release_strength: f32,
    pub size_history_frames: usize,
    /// Hand-size growth across the history window that counts as approaching
    pub approach_threshold: f32,
    pub menu_palm_area: f32,
    pub trigger_hold_ms: f64,
    pub trigger_cooldown_ms: f64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            smoothing: true,
            smoothing_min_cutoff: 1.5,
            smoothing_beta: 0.3,
            pinch_engage_strength: DEFAULT_ENGAGE_STRENGTH,
            pinch_release_strength: DEFAULT_RELEASE_STRENGTH,
            size_history_frames: SIZE_HISTORY_FRAMES,
            approach_threshold: 0.02,
            menu_palm_area: DEFAULT_MENU_PALM_AREA,
            trigger_hold_ms: DEFAULT_HOLD_MS,
            trigger_cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

impl TrackingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("smoothingMinCutoff", self.smoothing_min_cutoff.into())?;
        require_non_negative("smoothingBeta", self.smoothing_beta.into())?;
        require_positive("pinchEngageStrength", self.pinch_engage_strength.into())?;
        require_non_negative("pinchReleaseStrength", self.pinch_release_strength.into())?;
        require_positive("sizeHistoryFrames", self.size_history_frames as f64)?;
        require_non_negative("approachThreshold", self.approach_threshold.into())?;
        require_non_negative("menuPalmArea", self.menu_palm_area.into())?;
        require_non_negative("triggerHoldMs", self.trigger_hold_ms)?;
        require_non_negative("triggerCooldownMs", self.trigger_cooldown_ms)?;
        Ok(())
    }
}
