//! Pinch detection - fingertip proximity with a continuous strength score
//!
//! Only thumb pairings are ever tested. Strength is a linear falloff from
//! 1.0 (tips touching) to 0.0 (tips at the threshold); callers layer their own
//! "intentional pinch" cutoffs on top of it.

use serde::{Serialize, Serializer};

use super::geometry::{distance_3d, midpoint_2d};
use super::skeleton::{Finger, HandSkeleton, Point2};

/// Fingers checked against the thumb, in reporting order
pub const PINCH_PARTNERS: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinchGesture {
    pub is_pinching: bool,
    pub fingers: [Finger; 2],
    /// 0.0 at/after threshold, 1.0 at zero distance
    pub strength: f32,
    /// Midpoint of the two tips (normalized 2D)
    pub position: Point2,
}

/// Compare two fingertips against a 3D distance threshold.
///
/// A non-positive threshold never reports a pinch.
pub fn detect_pinch(
    skeleton: &HandSkeleton,
    finger_a: Finger,
    finger_b: Finger,
    threshold: f32,
) -> PinchGesture {
    let tip_a = skeleton.joint(finger_a.tip());
    let tip_b = skeleton.joint(finger_b.tip());
    let distance = distance_3d(tip_a, tip_b);
    let strength = if threshold > 0.0 {
        (1.0 - distance / threshold).clamp(0.0, 1.0)
    } else {
        0.0
    };

    PinchGesture {
        is_pinching: distance < threshold,
        fingers: [finger_a, finger_b],
        strength,
        position: midpoint_2d(tip_a, tip_b),
    }
}

/// Active thumb pinches in fixed order: index, middle, ring, pinky
pub fn detect_all_pinches(skeleton: &HandSkeleton, threshold: f32) -> PinchSet {
    let mut set = PinchSet::default();
    for finger in PINCH_PARTNERS {
        let pinch = detect_pinch(skeleton, Finger::Thumb, finger, threshold);
        if pinch.is_pinching {
            set.push(pinch);
        }
    }
    set
}

// ============================================================================
// PINCH SET
// ============================================================================

/// Up to four active pinches, stored inline
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchSet {
    slots: [Option<PinchGesture>; 4],
    len: usize,
}

impl PinchSet {
    fn push(&mut self, pinch: PinchGesture) {
        if self.len < self.slots.len() {
            self.slots[self.len] = Some(pinch);
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &PinchGesture> {
        self.slots[..self.len].iter().flatten()
    }

    /// The thumb pinch involving `finger`, if active
    pub fn find(&self, finger: Finger) -> Option<&PinchGesture> {
        self.iter().find(|p| p.fingers[1] == finger)
    }

    /// Highest-strength active pinch
    pub fn strongest(&self) -> Option<&PinchGesture> {
        self.iter().max_by(|a, b| a.strength.total_cmp(&b.strength))
    }
}

impl Serialize for PinchSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::config::DEFAULT_PINCH_THRESHOLD;
    use crate::gesture::fixtures::open_palm;
    use crate::gesture::skeleton::{HandJoint, Landmark};

    fn with_tip(skeleton: &HandSkeleton, joint: HandJoint, at: Landmark) -> HandSkeleton {
        skeleton.with_joint(joint, at).unwrap()
    }

    #[test]
    fn test_coincident_tips_full_strength() {
        let open = open_palm();
        let thumb = open.joint(HandJoint::ThumbTip);
        let hand = with_tip(&open, HandJoint::IndexTip, thumb);

        let pinch = detect_pinch(&hand, Finger::Thumb, Finger::Index, DEFAULT_PINCH_THRESHOLD);
        assert!(pinch.is_pinching);
        assert_eq!(pinch.strength, 1.0);
        assert_eq!(pinch.fingers, [Finger::Thumb, Finger::Index]);
        assert!((pinch.position.x - thumb.x).abs() < 1e-6);
        assert!((pinch.position.y - thumb.y).abs() < 1e-6);
    }

    #[test]
    fn test_strength_falls_off_linearly_and_clamps() {
        let open = open_palm();
        let thumb = open.joint(HandJoint::ThumbTip);
        let threshold = 0.08;

        let mut last = f32::INFINITY;
        for step in 0..=20 {
            let d = step as f32 * 0.01;
            let hand = with_tip(&open, HandJoint::IndexTip, Landmark::new(thumb.x + d, thumb.y, thumb.z));
            let pinch = detect_pinch(&hand, Finger::Thumb, Finger::Index, threshold);

            assert!(pinch.strength >= 0.0 && pinch.strength <= 1.0);
            assert!(pinch.strength <= last);
            last = pinch.strength;

            if d > threshold + 0.005 {
                assert_eq!(pinch.strength, 0.0);
                assert!(!pinch.is_pinching);
            }
        }

        let half = with_tip(&open, HandJoint::IndexTip, Landmark::new(thumb.x, thumb.y + 0.04, thumb.z));
        let pinch = detect_pinch(&half, Finger::Thumb, Finger::Index, threshold);
        assert!((pinch.strength - 0.5).abs() < 1e-4);
        assert!(pinch.is_pinching);
    }

    #[test]
    fn test_exactly_at_threshold_is_not_a_pinch() {
        let open = open_palm();
        let thumb = open.joint(HandJoint::ThumbTip);
        let hand = with_tip(&open, HandJoint::IndexTip, Landmark::new(thumb.x, thumb.y, thumb.z + 0.5));
        let pinch = detect_pinch(&hand, Finger::Thumb, Finger::Index, 0.5);
        assert!(!pinch.is_pinching);
        assert_eq!(pinch.strength, 0.0);
    }

    #[test]
    fn test_zero_threshold_never_pinches() {
        let open = open_palm();
        let thumb = open.joint(HandJoint::ThumbTip);
        let hand = with_tip(&open, HandJoint::IndexTip, thumb);

        for threshold in [0.0, -0.1] {
            let pinch = detect_pinch(&hand, Finger::Thumb, Finger::Index, threshold);
            assert!(!pinch.is_pinching);
            assert_eq!(pinch.strength, 0.0);
        }
        assert!(detect_all_pinches(&hand, 0.0).is_empty());
    }

    #[test]
    fn test_depth_counts_towards_distance() {
        let open = open_palm();
        let thumb = open.joint(HandJoint::ThumbTip);
        let hand = with_tip(&open, HandJoint::IndexTip, Landmark::new(thumb.x, thumb.y, thumb.z + 0.1));
        let pinch = detect_pinch(&hand, Finger::Thumb, Finger::Index, DEFAULT_PINCH_THRESHOLD);
        assert!(!pinch.is_pinching);
    }

    #[test]
    fn test_open_palm_has_no_pinches() {
        assert!(detect_all_pinches(&open_palm(), DEFAULT_PINCH_THRESHOLD).is_empty());
    }

    #[test]
    fn test_all_pinches_thumb_only_in_fixed_order() {
        let open = open_palm();
        let thumb = open.joint(HandJoint::ThumbTip);
        let near = |dx: f32| Landmark::new(thumb.x + dx, thumb.y, thumb.z);

        let hand = open
            .with_joint(HandJoint::PinkyTip, near(0.01)).unwrap()
            .with_joint(HandJoint::IndexTip, near(0.03)).unwrap()
            .with_joint(HandJoint::RingTip, near(0.02)).unwrap();

        let pinches = detect_all_pinches(&hand, DEFAULT_PINCH_THRESHOLD);
        let order: Vec<Finger> = pinches.iter().map(|p| p.fingers[1]).collect();
        assert_eq!(order, vec![Finger::Index, Finger::Ring, Finger::Pinky]);
        assert!(pinches.iter().all(|p| p.fingers[0] == Finger::Thumb));
        assert!(pinches.find(Finger::Middle).is_none());
        assert_eq!(pinches.strongest().map(|p| p.fingers[1]), Some(Finger::Pinky));
    }

    #[test]
    fn test_non_thumb_pairs_never_reported() {
        // Index and middle tips touching, thumb far away
        let open = open_palm();
        let middle = open.joint(HandJoint::MiddleTip);
        let hand = with_tip(&open, HandJoint::IndexTip, middle);
        assert!(detect_all_pinches(&hand, DEFAULT_PINCH_THRESHOLD).is_empty());
    }

    #[test]
    fn test_pinch_set_serializes_as_array() {
        let open = open_palm();
        let thumb = open.joint(HandJoint::ThumbTip);
        let hand = with_tip(&open, HandJoint::MiddleTip, thumb);
        let json = serde_json::to_value(detect_all_pinches(&hand, DEFAULT_PINCH_THRESHOLD)).unwrap();

        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["isPinching"], true);
        assert_eq!(entries[0]["fingers"][1], "middle");
    }
}
