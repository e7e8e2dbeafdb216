//! Gesture thresholds
//!
//! All empirical constants in one place. Deserializes from partial JSON so the
//! page can override a single field and keep the rest.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default pinch distance (3D, normalized units). 0.05 is the tighter
/// alternative some UIs prefer.
pub const DEFAULT_PINCH_THRESHOLD: f32 = 0.08;

/// Tip must be this much farther from the wrist than its reference joint
pub const EXTENSION_RATIO: f32 = 1.1;

/// Max distance between the two hands' knuckle centroids
pub const DEFAULT_KNUCKLES_THRESHOLD: f32 = 0.12;

/// Max 2D distance between wrists for the arms-crossed pose
pub const DEFAULT_CROSSED_WRIST_DISTANCE: f32 = 0.3;

/// How roll is derived from the skeleton
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RollMethod {
    /// Angle from palm center to middle fingertip
    #[default]
    PalmCenter,
    /// Circular mean of the five base-to-tip finger angles
    FingerAverage,
}

/// Which ring-finger joint the extension test compares against.
/// `Dip` matches the reference behaviour; `Pip` matches the other fingers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RingReferenceJoint {
    #[default]
    Dip,
    Pip,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureConfig {
    pub pinch_threshold: f32,
    pub extension_ratio: f32,
    pub ring_reference: RingReferenceJoint,
    pub roll_method: RollMethod,
    /// Wrist must be at least this much farther than the middle knuckle
    pub palm_depth_margin: f32,
    /// Max depth difference between index and pinky knuckles
    pub palm_flatness_tolerance: f32,
    /// Middle fingertip may be at most this much farther than the wrist
    pub fingertip_depth_margin: f32,
    pub knuckles_threshold: f32,
    pub crossed_wrist_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
            extension_ratio: EXTENSION_RATIO,
            ring_reference: RingReferenceJoint::Dip,
            roll_method: RollMethod::PalmCenter,
            palm_depth_margin: 0.02,
            palm_flatness_tolerance: 0.05,
            fingertip_depth_margin: 0.02,
            knuckles_threshold: DEFAULT_KNUCKLES_THRESHOLD,
            crossed_wrist_distance: DEFAULT_CROSSED_WRIST_DISTANCE,
        }
    }
}

impl GestureConfig {
    /// Reject thresholds the detectors cannot divide by or compare against
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("pinchThreshold", self.pinch_threshold.into())?;
        require_positive("extensionRatio", self.extension_ratio.into())?;
        require_positive("knucklesThreshold", self.knuckles_threshold.into())?;
        require_positive("crossedWristDistance", self.crossed_wrist_distance.into())?;
        require_non_negative("palmDepthMargin", self.palm_depth_margin.into())?;
        require_non_negative("palmFlatnessTolerance", self.palm_flatness_tolerance.into())?;
        require_non_negative("fingertipDepthMargin", self.fingertip_depth_margin.into())?;
        Ok(())
    }
}
