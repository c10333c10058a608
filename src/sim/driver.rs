use tracing::{debug, info};

use super::{
    config::{Quantum, SimConfig},
    process::ProcessSpec,
    result::{Dispatch, SimulationResult},
};
use crate::{
    core::{ProcId, Process, RrCore, SimEvent, Ticks},
    error::SimError,
};

/// The Round Robin simulator.
///
/// Owns an arrival-sorted copy of the processes; the ready queue holds
/// indices into it. Admission is checked after every tick, so a process
/// arriving mid-slice queues ahead of the preempted one.
pub struct RoundRobin {
    pub core: RrCore,
    // Next process (in arrival order) not yet admitted
    arrival_cursor: usize,
    dispatches: Vec<Dispatch>,
    started: bool,
    halted: bool,
}

impl RoundRobin {
    pub fn new(mut procs: Vec<Process>, config: SimConfig) -> Self {
        // Stable: equal arrivals keep input order
        procs.sort_by_key(|p| p.arrival);

        Self {
            core: RrCore::new(procs, config.quantum, config.record_timeline),
            arrival_cursor: 0,
            dispatches: Vec::new(),
            started: false,
            halted: false,
        }
    }

    /// Validates `specs` and builds a simulator; nothing runs on error.
    pub fn from_specs(specs: &[ProcessSpec], config: SimConfig) -> Result<Self, SimError> {
        let procs = specs
            .iter()
            .map(ProcessSpec::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(procs, config))
    }

    /// Advances the simulation by one tick, or by one idle jump when the
    /// ready queue is empty. `None` once the run is over.
    pub fn step(&mut self) -> Option<Vec<SimEvent>> {
        if !self.started {
            self.started = true;
            info!(
                processes = self.core.ctx.procs.len(),
                quantum = self.quantum().get(),
                timeline = self.core.ctx.record_timeline,
                "Starting simulation"
            );
        }

        if self.halted || self.core.ctx.all_completed() {
            return None;
        }

        let mut events = self.handle_arrivals();

        if self.core.ctx.cpu_is_idle() {
            match self.core.dispatch() {
                Some(event) => {
                    self.record_dispatch(&event);
                    events.push(event);
                }
                None => {
                    let Some(next) = self.next_arrival() else {
                        // Nothing queued and nothing left to arrive
                        self.halted = true;
                        return None;
                    };
                    let from = self.core.now();
                    let to = from.max(next);
                    self.core.ctx.advance_time(to - from);
                    debug!(from, to, "Idle until next arrival");

                    events.push(SimEvent::IdleJump { from, to });
                    events.extend(self.handle_arrivals());
                    self.core.observe();
                    return Some(events);
                }
            }
        }

        events.extend(self.core.tick());
        events.extend(self.handle_arrivals());
        events.extend(self.core.settle());
        self.core.observe();

        Some(events)
    }

    fn handle_arrivals(&mut self) -> Vec<SimEvent> {
        let now = self.core.now();
        let mut events = Vec::new();

        // Contiguous, since procs are sorted by arrival
        while self.arrival_cursor < self.core.ctx.procs.len()
            && self.core.ctx.proc(self.arrival_cursor).arrival <= now
        {
            let proc: ProcId = self.arrival_cursor;
            self.core.ctx.mark_ready(proc);
            self.core.ctx.enqueue(proc);
            debug!(process = %self.core.ctx.proc(proc).name, now, "Arrived");

            events.push(SimEvent::Arrived { proc });
            self.arrival_cursor += 1;
        }

        events
    }

    fn record_dispatch(&mut self, event: &SimEvent) {
        if let SimEvent::Dispatched {
            proc, at, slice, ..
        } = *event
        {
            self.dispatches.push(Dispatch {
                name: self.core.ctx.proc(proc).name.clone(),
                at,
                slice,
            });
        }
    }

    fn next_arrival(&self) -> Option<Ticks> {
        self.core
            .ctx
            .procs
            .get(self.arrival_cursor)
            .map(|p| p.arrival)
    }

    pub fn all_processes_completed(&self) -> bool {
        self.core.ctx.all_completed()
    }

    pub fn quantum(&self) -> Quantum {
        self.core.quantum()
    }

    /// Runs to completion (continuing from any steps already taken) and
    /// aggregates the result.
    pub fn simulate(mut self) -> SimulationResult {
        while self.step().is_some() {}

        let total_ticks = self.core.now();
        let ctx = self.core.ctx;
        let timeline = ctx.timeline().map(|ticks| {
            ticks
                .iter()
                .map(|&id| ctx.procs[id].name.clone())
                .collect()
        });

        let result =
            SimulationResult::from_run(ctx.procs, self.dispatches, timeline, total_ticks);
        info!(
            dispatches = result.execution_order.len(),
            total_ticks,
            average_response_time = result.average_response_time,
            "Simulation finished"
        );
        result
    }

    /// Like [`RoundRobin::simulate`], overriding whether the timeline is
    /// reported. Ticks taken before the call are included.
    pub fn simulate_with_timeline(mut self, include_timeline: bool) -> SimulationResult {
        self.core.ctx.record_timeline = include_timeline;
        self.simulate()
    }
}

/// Construct-and-run: validates the descriptors and quantum, then simulates.
pub fn simulate_specs(
    specs: &[ProcessSpec],
    quantum: i64,
    record_timeline: bool,
) -> Result<SimulationResult, SimError> {
    let config = SimConfig::new(Quantum::new(quantum)?).with_timeline(record_timeline);
    Ok(RoundRobin::from_specs(specs, config)?.simulate())
}
