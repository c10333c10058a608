//! Seeded random workloads.

use rand::prelude::*;

use super::process::ProcessSpec;

/// Bernoulli arrival process: at every tick a process arrives with
/// probability `p_arrival` and is short with probability `p_short`.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadConfig {
    pub ticks: u64,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_burst: i64,
    pub long_burst: i64,
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            ticks: 50,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
            seed: 0,
        }
    }
}

impl WorkloadConfig {
    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_bursts(mut self, short_burst: i64, long_burst: i64) -> Self {
        self.short_burst = short_burst;
        self.long_burst = long_burst;
        self
    }

    pub fn with_probabilities(mut self, p_arrival: f64, p_short: f64) -> Self {
        self.p_arrival = p_arrival;
        self.p_short = p_short;
        self
    }
}

/// Same config, same workload.
pub fn bernoulli_specs(config: &WorkloadConfig) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut specs = Vec::new();

    for t in 0..config.ticks {
        if rng.random::<f64>() < config.p_arrival {
            let burst = if rng.random::<f64>() < config.p_short {
                config.short_burst
            } else {
                config.long_burst
            };

            specs.push(ProcessSpec::new(
                format!("P{}", specs.len() + 1),
                t as i64,
                burst,
            ));
        }
    }

    specs
}
