use average::{Estimate, Mean};
use rustc_hash::FxHashMap;

use crate::core::{Process, Ticks};

/// Response time reported for a process that was never dispatched.
pub const NEVER_STARTED: i64 = -1;

/// One entry of the execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub name: String,
    pub at: Ticks,
    pub slice: Ticks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Process names, one per dispatch.
    pub execution_order: Vec<String>,
    pub dispatches: Vec<Dispatch>,
    /// Keyed by process name; duplicate names keep the later process.
    pub response_times: FxHashMap<String, i64>,
    pub average_response_time: f64,
    pub average_turnaround_time: f64,
    /// Running process per tick, when requested.
    pub timeline: Option<Vec<String>>,
    /// Final state of every process, in arrival order.
    pub processes: Vec<Process>,
    pub total_ticks: Ticks,
}

impl SimulationResult {
    pub fn from_run(
        processes: Vec<Process>,
        dispatches: Vec<Dispatch>,
        timeline: Option<Vec<String>>,
        total_ticks: Ticks,
    ) -> Self {
        let execution_order = dispatches.iter().map(|d| d.name.clone()).collect();

        let responses: Vec<i64> = processes
            .iter()
            .map(|p| {
                p.response_time()
                    .map_or(NEVER_STARTED, |response| response as i64)
            })
            .collect();

        let response_times = processes
            .iter()
            .zip(&responses)
            .map(|(p, &response)| (p.name.clone(), response))
            .collect();

        // Sentinels go into the mean as-is
        let average_response_time = avg(responses.iter().map(|&r| r as f64));
        let average_turnaround_time = avg(
            processes
                .iter()
                .filter_map(Process::turnaround_time)
                .map(|t| t as f64),
        );

        Self {
            execution_order,
            dispatches,
            response_times,
            average_response_time,
            average_turnaround_time,
            timeline,
            processes,
            total_ticks,
        }
    }

    pub fn response_time(&self, name: &str) -> Option<i64> {
        self.response_times.get(name).copied()
    }

    pub fn process(&self, name: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.name == name)
    }

    /// Sum of the slices dispatched to `name`.
    pub fn dispatched_time(&self, name: &str) -> Ticks {
        self.dispatches
            .iter()
            .filter(|d| d.name == name)
            .map(|d| d.slice)
            .sum()
    }
}

// 0.0 for an empty set
fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    let mean: Mean = iter.collect();
    if mean.is_empty() { 0.0 } else { mean.estimate() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(name: &str, arrival: Ticks, burst: Ticks, start: Ticks, finish: Ticks) -> Process {
        let mut p = Process::new(name, arrival, burst).unwrap();
        p.start = Some(start);
        p.finish = Some(finish);
        p.remaining = 0;
        p
    }

    #[test]
    fn empty_run_averages_to_zero() {
        let result = SimulationResult::from_run(Vec::new(), Vec::new(), None, 0);
        assert!(result.execution_order.is_empty());
        assert!(result.response_times.is_empty());
        assert_eq!(result.average_response_time, 0.0);
        assert_eq!(result.average_turnaround_time, 0.0);
    }

    #[test]
    fn never_started_process_counts_as_sentinel() {
        let procs = vec![
            finished("P1", 0, 2, 0, 2),
            Process::new("P2", 10, 1).unwrap(),
        ];
        let result = SimulationResult::from_run(procs, Vec::new(), None, 2);
        assert_eq!(result.response_time("P2"), Some(NEVER_STARTED));
        assert_eq!(result.average_response_time, -0.5);
        assert_eq!(result.average_turnaround_time, 2.0);
    }

    #[test]
    fn duplicate_names_keep_the_later_entry() {
        let procs = vec![finished("P1", 0, 1, 0, 1), finished("P1", 1, 1, 3, 4)];
        let result = SimulationResult::from_run(procs, Vec::new(), None, 4);
        assert_eq!(result.response_times.len(), 1);
        assert_eq!(result.response_time("P1"), Some(2));
        assert_eq!(result.average_response_time, 1.0);
    }
}
