/// Fixed rate stepper - accumulates frame deltas and reports how many fixed
/// ticks are due, so animated camera moves run at the same speed regardless
/// of frame rate
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    interval: f32,
    accumulator: f32,
    max_steps: u32,
}

/// Tick rate of animated camera moves
pub const MOTION_HZ: f32 = 60.0;

impl FixedStep {
    /// Create a stepper firing at `hz`, catching up at most `max_steps` per update
    pub fn new(hz: f32, max_steps: u32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Add `delta` seconds, return the number of ticks to run now.
    ///
    /// At most `max_steps` ticks are returned. Ticks due beyond the cap are
    /// dropped, not carried into the next call, so a long stall never causes
    /// a burst of catch-up ticks afterwards.
    pub fn tick(&mut self, delta: f32) -> u32 {
        if !delta.is_finite() || delta <= 0.0 {
            return 0;
        }
        self.accumulator += delta;

        let due = (self.accumulator / self.interval).floor();
        let steps = (due as u32).min(self.max_steps);
        self.accumulator = (self.accumulator - due * self.interval).max(0.0);
        steps
    }

    /// Fraction of the next tick already accumulated
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.interval
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(MOTION_HZ, 4)
    }
}
