//! One-shot trigger over a boolean pose predicate
//!
//! The pose must be held continuously for `hold_ms` before the trigger fires.
//! After firing it stays quiet for `cooldown_ms`, and it will not fire again
//! until the pose has been released and re-entered.

pub const DEFAULT_HOLD_MS: f64 = 300.0;
pub const DEFAULT_COOLDOWN_MS: f64 = 1500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerPhase {
    Idle,
    /// Pose active, waiting out the hold time
    Holding,
    /// Fired during this hold; waiting for release
    Fired,
}

#[derive(Clone, Debug)]
pub struct GestureTrigger {
    hold_ms: f64,
    cooldown_ms: f64,
    phase: TriggerPhase,
    hold_started: f64,
    last_fired: Option<f64>,
}

impl GestureTrigger {
    pub fn new(hold_ms: f64, cooldown_ms: f64) -> Self {
        Self {
            hold_ms,
            cooldown_ms,
            phase: TriggerPhase::Idle,
            hold_started: 0.0,
            last_fired: None,
        }
    }

    /// Feed this frame's predicate value; true on the frame the trigger fires
    pub fn update(&mut self, active: bool, now_ms: f64) -> bool {
        if !active {
            self.phase = TriggerPhase::Idle;
            return false;
        }

        match self.phase {
            TriggerPhase::Idle => {
                self.phase = TriggerPhase::Holding;
                self.hold_started = now_ms;
                self.try_fire(now_ms)
            }
            TriggerPhase::Holding => self.try_fire(now_ms),
            TriggerPhase::Fired => false,
        }
    }

    fn try_fire(&mut self, now_ms: f64) -> bool {
        let held_long_enough = now_ms - self.hold_started >= self.hold_ms;
        let cooled_down = self
            .last_fired
            .map_or(true, |t| now_ms - t >= self.cooldown_ms);

        if held_long_enough && cooled_down {
            self.phase = TriggerPhase::Fired;
            self.last_fired = Some(now_ms);
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    /// How long the current hold has lasted (0 when idle)
    pub fn held_for(&self, now_ms: f64) -> f64 {
        match self.phase {
            TriggerPhase::Idle => 0.0,
            _ => now_ms - self.hold_started,
        }
    }

    pub fn reset(&mut self) {
        self.phase = TriggerPhase::Idle;
        self.last_fired = None;
    }
}

impl Default for GestureTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_MS, DEFAULT_COOLDOWN_MS)
    }
}
