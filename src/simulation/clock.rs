//! Simulated time bookkeeping.
//!
//! The clock never feeds back into the physics; it only reports how much
//! simulated time has passed.

use crate::error::{ConfigurationError, Result};
use crate::units::seconds_to_days;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    step_seconds: f64,
    elapsed_seconds: f64,
    steps: u64,
}

impl SimulationClock {
    pub fn new(step_seconds: f64) -> Result<Self> {
        if !step_seconds.is_finite() || step_seconds <= 0.0 {
            return Err(ConfigurationError::InvalidParameter {
                name: "step_seconds",
                reason: format!("must be finite and > 0 (got {step_seconds})"),
            });
        }
        Ok(Self {
            step_seconds,
            elapsed_seconds: 0.0,
            steps: 0,
        })
    }

    /// Move simulated time forward by one tick.
    pub fn advance(&mut self) {
        self.elapsed_seconds += self.step_seconds;
        self.steps += 1;
    }

    pub fn step_seconds(&self) -> f64 {
        self.step_seconds
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn elapsed_days(&self) -> f64 {
        seconds_to_days(self.elapsed_seconds)
    }

    /// Number of completed ticks.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::SECONDS_PER_DAY;

    #[test]
    fn advance_accumulates() -> Result<()> {
        let mut clock = SimulationClock::new(SECONDS_PER_DAY)?;
        assert_eq!(clock.steps(), 0);
        for _ in 0..10 {
            clock.advance();
        }
        assert_eq!(clock.steps(), 10);
        assert_eq!(clock.elapsed_seconds(), 10.0 * SECONDS_PER_DAY);
        assert_eq!(clock.elapsed_days(), 10.0);
        Ok(())
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(SimulationClock::new(0.0).is_err());
        assert!(SimulationClock::new(-1.0).is_err());
        assert!(SimulationClock::new(f64::NAN).is_err());
    }
}
