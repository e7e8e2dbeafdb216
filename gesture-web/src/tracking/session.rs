//! Gesture session - everything the page needs per detector callback
//!
//! Routes each detected hand to its left/right tracker, evaluates the two-hand
//! poses when both hands are present, and debounces them into triggers.

use serde::{Deserialize, Serialize};

use crate::gesture::{
    detect_arms_crossed, detect_knuckles_together, ConfigError, GestureConfig, HandSkeleton, Handedness,
    SkeletonError,
};

use super::config::TrackingConfig;
use super::hand::{HandTracker, TrackedHand};
use super::trigger::GestureTrigger;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub gesture: GestureConfig,
    pub tracking: TrackingConfig,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gesture.validate()?;
        self.tracking.validate()
    }
}

/// Two-hand pose flags for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoHandState {
    pub knuckles_together: bool,
    /// Knuckles held together long enough; true on one frame only
    pub knuckles_triggered: bool,
    pub arms_crossed: bool,
    pub arms_crossed_triggered: bool,
}

/// Result of one detector callback
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub left: Option<TrackedHand>,
    pub right: Option<TrackedHand>,
    pub two_hand: TwoHandState,
}

impl FrameReport {
    pub fn hand(&self, handedness: Handedness) -> Option<&TrackedHand> {
        match handedness {
            Handedness::Left => self.left.as_ref(),
            Handedness::Right => self.right.as_ref(),
        }
    }

    pub fn hand_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }
}

pub struct GestureSession {
    config: SessionConfig,
    hands: [HandTracker; 2],
    knuckles_trigger: GestureTrigger,
    arms_crossed_trigger: GestureTrigger,
    last_report: FrameReport,
}

impl GestureSession {
    pub fn new(config: SessionConfig) -> Self {
        let tracking = &config.tracking;
        Self {
            hands: [
                HandTracker::new(Handedness::Left, tracking),
                HandTracker::new(Handedness::Right, tracking),
            ],
            knuckles_trigger: GestureTrigger::new(tracking.trigger_hold_ms, tracking.trigger_cooldown_ms),
            arms_crossed_trigger: GestureTrigger::new(tracking.trigger_hold_ms, tracking.trigger_cooldown_ms),
            last_report: FrameReport::default(),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replace the configuration; trackers restart with the new parameters
    pub fn set_config(&mut self, config: SessionConfig) {
        *self = Self::new(config);
    }

    /// Process one detector callback. `now_ms` is a monotonic timestamp.
    ///
    /// If the detector reports the same label twice, the later hand wins.
    pub fn process_frame(
        &mut self,
        hands: &[(Handedness, HandSkeleton)],
        now_ms: f64,
    ) -> Result<&FrameReport, SkeletonError> {
        let mut latest: [Option<&HandSkeleton>; 2] = [None; 2];
        for (handedness, skeleton) in hands {
            latest[handedness.slot()] = Some(skeleton);
        }

        let mut report = FrameReport::default();
        for (slot, skeleton) in latest.into_iter().enumerate() {
            let tracker = &mut self.hands[slot];
            let Some(skeleton) = skeleton else {
                tracker.reset();
                continue;
            };
            let tracked = tracker.update(
                skeleton,
                now_ms / 1000.0,
                &self.config.gesture,
                &self.config.tracking,
            )?;
            match tracked.handedness {
                Handedness::Left => report.left = Some(tracked),
                Handedness::Right => report.right = Some(tracked),
            }
        }

        report.two_hand = self.evaluate_two_hand(now_ms);
        self.last_report = report;
        Ok(&self.last_report)
    }

    fn evaluate_two_hand(&mut self, now_ms: f64) -> TwoHandState {
        let gesture = &self.config.gesture;
        let (knuckles_together, arms_crossed) = match (
            self.hands[Handedness::Left.slot()].last_skeleton(),
            self.hands[Handedness::Right.slot()].last_skeleton(),
        ) {
            (Some(left), Some(right)) => (
                detect_knuckles_together(left, right, gesture.knuckles_threshold),
                detect_arms_crossed(left, right, gesture.crossed_wrist_distance),
            ),
            _ => (false, false),
        };

        TwoHandState {
            knuckles_together,
            knuckles_triggered: self.knuckles_trigger.update(knuckles_together, now_ms),
            arms_crossed,
            arms_crossed_triggered: self.arms_crossed_trigger.update(arms_crossed, now_ms),
        }
    }

    pub fn last_report(&self) -> &FrameReport {
        &self.last_report
    }

    pub fn reset(&mut self) {
        for tracker in self.hands.iter_mut() {
            tracker.reset();
        }
        self.knuckles_trigger.reset();
        self.arms_crossed_trigger.reset();
        self.last_report = FrameReport::default();
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
