//! Hand-size history for "hand moving closer" detection
//!
//! Keeps the last few `hand_size` readings and reports the change across the
//! window. Changes inside the dead zone read as zero so resting hands don't
//! register as approaching.

use std::collections::VecDeque;

/// Default number of frames compared (oldest vs newest)
pub const SIZE_HISTORY_FRAMES: usize = 5;

/// Size changes below this are treated as zero
pub const SIZE_DEAD_ZONE: f32 = 0.005;

#[derive(Clone, Debug)]
pub struct HandSizeHistory {
    history: VecDeque<f32>,
    frames: usize,
}

impl HandSizeHistory {
    pub fn new(frames: usize) -> Self {
        let frames = frames.max(2);
        Self {
            history: VecDeque::with_capacity(frames + 1),
            frames,
        }
    }

    /// Record a size, returns the newest-minus-oldest change across the window
    pub fn push(&mut self, size: f32) -> f32 {
        self.history.push_back(size);
        if self.history.len() > self.frames {
            self.history.pop_front();
        }
        self.delta()
    }

    /// Change across the window (0 until the window has filled)
    pub fn delta(&self) -> f32 {
        if self.history.len() < self.frames {
            return 0.0;
        }

        let (Some(oldest), Some(newest)) = (self.history.front(), self.history.back()) else {
            return 0.0;
        };
        let change = newest - oldest;
        if change.abs() < SIZE_DEAD_ZONE {
            0.0
        } else {
            change
        }
    }

    /// Hand grew by more than `threshold` across the window
    pub fn is_approaching(&self, threshold: f32) -> bool {
        self.delta() > threshold
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for HandSizeHistory {
    fn default() -> Self {
        Self::new(SIZE_HISTORY_FRAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delta_until_window_full() {
        let mut history = HandSizeHistory::new(3);
        assert_eq!(history.push(0.20), 0.0);
        assert_eq!(history.push(0.30), 0.0);
        assert!((history.push(0.40) - 0.20).abs() < 1e-6);
    }

    #[test]
    fn test_window_slides() {
        let mut history = HandSizeHistory::new(3);
        for size in [0.1, 0.2, 0.3, 0.3, 0.3] {
            history.push(size);
        }
        assert_eq!(history.delta(), 0.0);
    }

    #[test]
    fn test_dead_zone_suppresses_jitter() {
        let mut history = HandSizeHistory::new(3);
        for size in [0.300, 0.302, 0.303] {
            history.push(size);
        }
        assert_eq!(history.delta(), 0.0);
        assert!(!history.is_approaching(0.0));
    }

    #[test]
    fn test_approach_and_retreat() {
        let mut history = HandSizeHistory::default();
        for i in 0..SIZE_HISTORY_FRAMES {
            history.push(0.30 + i as f32 * 0.01);
        }
        assert!(history.is_approaching(0.02));
        assert!(!history.is_approaching(0.05));

        history.clear();
        for i in 0..SIZE_HISTORY_FRAMES {
            history.push(0.40 - i as f32 * 0.01);
        }
        assert!(history.delta() < 0.0);
        assert!(!history.is_approaching(0.0));
    }
}
