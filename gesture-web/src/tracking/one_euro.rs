//! One Euro Filter - adaptive low-pass filter for landmark jitter
//!
//! Smooth when the hand rests (menus stop shaking), responsive when it moves
//! (pinch drags keep up). `LandmarkSmoother` runs one filter per coordinate.

use std::f32::consts::PI;

use crate::gesture::{HandSkeleton, Landmark, SkeletonError, LANDMARK_COUNT};

/// Adaptive low-pass filter for a single scalar signal
#[derive(Clone, Debug)]
pub struct OneEuroFilter {
    /// Cutoff at rest (Hz) - lower = smoother when still
    min_cutoff: f32,
    /// How fast cutoff rises with speed - higher = less lag in motion
    beta: f32,
    /// Cutoff for the derivative estimate (Hz)
    d_cutoff: f32,

    prev: Option<Sample>,
}

#[derive(Clone, Copy, Debug)]
struct Sample {
    value: f32,
    derivative: f32,
    t: f64,
}

impl OneEuroFilter {
    pub fn new(min_cutoff: f32, beta: f32) -> Self {
        Self {
            min_cutoff,
            beta,
            d_cutoff: 1.0,
            prev: None,
        }
    }

    /// Tuned for MediaPipe hand landmarks at ~30 Hz
    pub fn for_hands() -> Self {
        Self::new(1.5, 0.3)
    }

    fn alpha(dt: f32, cutoff: f32) -> f32 {
        let r = 2.0 * PI * cutoff * dt;
        r / (r + 1.0)
    }

    /// Filter `x` observed at `t` seconds
    pub fn filter(&mut self, t: f64, x: f32) -> f32 {
        let Some(prev) = self.prev else {
            self.prev = Some(Sample { value: x, derivative: 0.0, t });
            return x;
        };

        let dt = (t - prev.t) as f32;
        if dt <= 0.0 {
            return prev.value;
        }

        let a_d = Self::alpha(dt, self.d_cutoff);
        let derivative = a_d * (x - prev.value) / dt + (1.0 - a_d) * prev.derivative;

        let cutoff = self.min_cutoff + self.beta * derivative.abs();
        let a = Self::alpha(dt, cutoff);
        let value = a * x + (1.0 - a) * prev.value;

        self.prev = Some(Sample { value, derivative, t });
        value
    }

    pub fn reset(&mut self) {
        self.prev = None;
    }
}

impl Default for OneEuroFilter {
    fn default() -> Self {
        Self::for_hands()
    }
}

/// One filter per coordinate of a 21-point hand
#[derive(Clone, Debug)]
pub struct LandmarkSmoother {
    filters: [[OneEuroFilter; 3]; LANDMARK_COUNT],
}

impl LandmarkSmoother {
    pub fn new(min_cutoff: f32, beta: f32) -> Self {
        Self {
            filters: std::array::from_fn(|_| std::array::from_fn(|_| OneEuroFilter::new(min_cutoff, beta))),
        }
    }

    pub fn smooth(&mut self, t: f64, skeleton: &HandSkeleton) -> Result<HandSkeleton, SkeletonError> {
        let mut out = [Landmark::default(); LANDMARK_COUNT];
        for ((landmark, raw), [fx, fy, fz]) in out
            .iter_mut()
            .zip(skeleton.landmarks().iter())
            .zip(self.filters.iter_mut())
        {
            *landmark = Landmark::new(fx.filter(t, raw.x), fy.filter(t, raw.y), fz.filter(t, raw.z));
        }
        HandSkeleton::new(out)
    }

    pub fn reset(&mut self) {
        for filter in self.filters.iter_mut().flatten() {
            filter.reset();
        }
    }
}

impl Default for LandmarkSmoother {
    fn default() -> Self {
        let base = OneEuroFilter::for_hands();
        Self::new(base.min_cutoff, base.beta)
    }
}
