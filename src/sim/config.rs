//! Simulation configuration.

use crate::{core::Ticks, error::SimError};

/// Quantum used when the caller does not pick one.
pub const DEFAULT_QUANTUM: Ticks = 2;

/// Maximum contiguous slice a process gets per dispatch. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantum(Ticks);

impl Quantum {
    pub fn new(quantum: i64) -> Result<Self, SimError> {
        if quantum < 1 {
            return Err(SimError::InvalidQuantum(quantum));
        }
        Ok(Self(quantum as Ticks))
    }

    pub fn get(self) -> Ticks {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

/// Settings for one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimConfig {
    pub quantum: Quantum,
    /// Keep a per-tick record of the running process.
    pub record_timeline: bool,
}

impl SimConfig {
    pub fn new(quantum: Quantum) -> Self {
        Self {
            quantum,
            record_timeline: false,
        }
    }

    pub fn with_timeline(mut self, record_timeline: bool) -> Self {
        self.record_timeline = record_timeline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantum_must_be_positive() {
        assert_eq!(Quantum::new(0), Err(SimError::InvalidQuantum(0)));
        assert_eq!(Quantum::new(-3), Err(SimError::InvalidQuantum(-3)));
        assert_eq!(Quantum::new(1).map(Quantum::get), Ok(1));
    }

    #[test]
    fn defaults_to_quantum_two_without_timeline() {
        let config = SimConfig::default();
        assert_eq!(config.quantum.get(), 2);
        assert!(!config.record_timeline);
        assert!(config.with_timeline(true).record_timeline);
    }
}
