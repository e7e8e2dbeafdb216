//! Pinch hysteresis
//!
//! Raw pinch strength flickers around any single cutoff. A latch engages only
//! once strength reaches `engage` and stays held until it drops below
//! `release`, so drags don't drop mid-gesture.

use crate::gesture::{Finger, PinchSet, PINCH_PARTNERS};

pub const DEFAULT_ENGAGE_STRENGTH: f32 = 0.8;
pub const DEFAULT_RELEASE_STRENGTH: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct PinchLatch {
    engage: f32,
    release: f32,
    /// Held state per thumb partner, in `PINCH_PARTNERS` order
    held: [bool; 4],
}

impl PinchLatch {
    pub fn new(engage: f32, release: f32) -> Self {
        Self {
            engage,
            release: release.min(engage),
            held: [false; 4],
        }
    }

    /// Feed this frame's pinches; returns the fingers currently latched
    pub fn update(&mut self, pinches: &PinchSet) -> Vec<Finger> {
        for (held, finger) in self.held.iter_mut().zip(PINCH_PARTNERS) {
            let strength = pinches.find(finger).map_or(0.0, |p| p.strength);
            *held = if *held {
                strength >= self.release
            } else {
                strength >= self.engage
            };
        }
        self.latched()
    }

    pub fn latched(&self) -> Vec<Finger> {
        PINCH_PARTNERS
            .iter()
            .zip(self.held.iter())
            .filter(|(_, held)| **held)
            .map(|(finger, _)| *finger)
            .collect()
    }

    pub fn is_held(&self, finger: Finger) -> bool {
        PINCH_PARTNERS
            .iter()
            .position(|f| *f == finger)
            .map_or(false, |i| self.held[i])
    }

    pub fn reset(&mut self) {
        self.held = [false; 4];
    }
}

impl Default for PinchLatch {
    fn default() -> Self {
        Self::new(DEFAULT_ENGAGE_STRENGTH, DEFAULT_RELEASE_STRENGTH)
    }
}
