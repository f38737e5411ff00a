use strum::Display;

use crate::units::Seconds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CycleState {
    Constructing,
    Complete,
    Resetting,
}

/// One full construction pass, from groundbreaking to reset.
/// Section count and duration are fixed by the configuration;
/// the cycle tracks only where it began and what it is doing.
#[derive(Debug, Clone)]
pub struct Cycle {
    pub start_time: f64,
    pub state: CycleState,
}

impl Cycle {
    pub fn new(start_time: f64) -> Self {
        Self {
            start_time,
            state: CycleState::Constructing,
        }
    }

    /// Fraction of the cycle elapsed at the given clock reading,
    /// clamped to [0,1]. Elapsed time never goes negative, so a
    /// regressing clock cannot produce progress before the start.
    pub fn progress(&self, clock: f64, duration: Seconds) -> f32 {
        let elapsed = (clock - self.start_time).max(0.0);
        (elapsed / *duration as f64).clamp(0.0, 1.0) as f32
    }
}
