//! Per-hand tracker: smoothing, size history and pinch latch around the
//! stateless analyzer

use serde::Serialize;

use crate::gesture::{analyze_gesture, Finger, GestureConfig, GestureState, HandSkeleton, Handedness, SkeletonError};

use super::config::TrackingConfig;
use super::one_euro::LandmarkSmoother;
use super::pinch_latch::PinchLatch;
use super::size_history::HandSizeHistory;

/// One hand's analysis plus the frame-to-frame extras
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedHand {
    pub handedness: Handedness,
    pub gesture: GestureState,
    /// Pinches that passed the engage/release hysteresis
    pub latched_pinches: Vec<Finger>,
    /// Hand-size change across the history window
    pub size_delta: f32,
    pub is_approaching: bool,
    /// Palm facing camera and presented large enough for a menu
    pub is_menu_visible: bool,
}

#[derive(Clone, Debug)]
pub struct HandTracker {
    handedness: Handedness,
    smoother: LandmarkSmoother,
    size_history: HandSizeHistory,
    pinch_latch: PinchLatch,
    /// Last skeleton fed to the analyzer (post-smoothing)
    last_skeleton: Option<HandSkeleton>,
}

impl HandTracker {
    pub fn new(handedness: Handedness, config: &TrackingConfig) -> Self {
        Self {
            handedness,
            smoother: LandmarkSmoother::new(config.smoothing_min_cutoff, config.smoothing_beta),
            size_history: HandSizeHistory::new(config.size_history_frames),
            pinch_latch: PinchLatch::new(config.pinch_engage_strength, config.pinch_release_strength),
            last_skeleton: None,
        }
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Skeleton the last analysis ran on, if the hand is still tracked
    pub fn last_skeleton(&self) -> Option<&HandSkeleton> {
        self.last_skeleton.as_ref()
    }

    /// Analyze one frame of this hand; `t` in seconds
    pub fn update(
        &mut self,
        skeleton: &HandSkeleton,
        t: f64,
        gesture_config: &GestureConfig,
        tracking_config: &TrackingConfig,
    ) -> Result<TrackedHand, SkeletonError> {
        let skeleton = if tracking_config.smoothing {
            self.smoother.smooth(t, skeleton)?
        } else {
            *skeleton
        };

        let gesture = analyze_gesture(&skeleton, gesture_config);
        let size_delta = self.size_history.push(gesture.hand_size);
        let latched_pinches = self.pinch_latch.update(&gesture.pinches);
        self.last_skeleton = Some(skeleton);

        Ok(TrackedHand {
            handedness: self.handedness,
            latched_pinches,
            size_delta,
            is_approaching: size_delta > tracking_config.approach_threshold,
            is_menu_visible: gesture.is_palm_facing_camera
                && gesture.palm_area > tracking_config.menu_palm_area,
            gesture,
        })
    }

    /// Forget all history (hand left the frame)
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.size_history.clear();
        self.pinch_latch.reset();
        self.last_skeleton = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::fixtures::{fist, open_palm};
    use crate::gesture::{hand_size, HandJoint, Landmark};
    use nalgebra::Vector3;

    fn raw_config() -> TrackingConfig {
        TrackingConfig {
            smoothing: false,
            ..TrackingConfig::default()
        }
    }

    #[test]
    fn test_open_palm_shows_menu() {
        let config = raw_config();
        let mut tracker = HandTracker::new(Handedness::Right, &config);
        let hand = tracker
            .update(&open_palm(), 0.0, &GestureConfig::default(), &config)
            .unwrap();

        assert_eq!(hand.handedness, Handedness::Right);
        assert!(hand.gesture.is_open);
        assert!(hand.is_menu_visible);
        assert!(!hand.is_approaching);
        assert!(hand.latched_pinches.is_empty());
    }

    #[test]
    fn test_fist_hides_menu() {
        let config = raw_config();
        let mut tracker = HandTracker::new(Handedness::Left, &config);
        let hand = tracker
            .update(&fist(), 0.0, &GestureConfig::default(), &config)
            .unwrap();
        assert!(!hand.is_menu_visible);
    }

    #[test]
    fn test_growing_hand_is_approaching() {
        let config = raw_config();
        let mut tracker = HandTracker::new(Handedness::Right, &config);
        let open = open_palm();
        let wrist = open.joint(HandJoint::Wrist).to_vector();

        let mut last = None;
        for frame in 0..config.size_history_frames {
            // Scale about the wrist: the hand grows on screen
            let scale = 1.0 + frame as f32 * 0.05;
            let mut landmarks = *open.landmarks();
            for landmark in landmarks.iter_mut() {
                let v = wrist + (landmark.to_vector() - wrist) * scale;
                *landmark = Landmark::from_vector(v);
            }
            let grown = HandSkeleton::new(landmarks).unwrap();
            last = Some(
                tracker
                    .update(&grown, frame as f64 / 30.0, &GestureConfig::default(), &config)
                    .unwrap(),
            );
        }

        let hand = last.unwrap();
        assert!(hand.size_delta > 0.05);
        assert!(hand.is_approaching);
    }

    #[test]
    fn test_pinch_latch_tracks_across_frames() {
        let config = raw_config();
        let mut tracker = HandTracker::new(Handedness::Right, &config);
        let open = open_palm();
        let thumb = open.joint(HandJoint::ThumbTip);
        let pinched = open.with_joint(HandJoint::IndexTip, thumb).unwrap();

        let hand = tracker
            .update(&pinched, 0.0, &GestureConfig::default(), &config)
            .unwrap();
        assert_eq!(hand.latched_pinches, vec![Finger::Index]);

        let hand = tracker
            .update(&open, 0.033, &GestureConfig::default(), &config)
            .unwrap();
        assert!(hand.latched_pinches.is_empty());
    }

    #[test]
    fn test_smoothing_lags_sudden_jump() {
        let config = TrackingConfig::default();
        let mut tracker = HandTracker::new(Handedness::Right, &config);
        let open = open_palm();
        tracker.update(&open, 0.0, &GestureConfig::default(), &config).unwrap();

        let jumped = open.translated(Vector3::new(0.1, 0.0, 0.0));
        tracker.update(&jumped, 1.0 / 30.0, &GestureConfig::default(), &config).unwrap();

        let seen = tracker.last_skeleton().unwrap().joint(HandJoint::Wrist);
        assert!(seen.x > 0.5 && seen.x < 0.6, "wrist x = {}", seen.x);
        assert!((hand_size(tracker.last_skeleton().unwrap()) - hand_size(&open)).abs() < 1e-3);
    }

    #[test]
    fn test_reset_clears_history() {
        let config = raw_config();
        let mut tracker = HandTracker::new(Handedness::Right, &config);
        tracker.update(&open_palm(), 0.0, &GestureConfig::default(), &config).unwrap();
        tracker.reset();
        assert!(tracker.last_skeleton().is_none());
    }
}
