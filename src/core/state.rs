use std::collections::VecDeque;

use crate::error::SimError;

// Index into the arrival-sorted process table
pub type ProcId = usize;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    /// Not admitted yet: the clock has not reached its arrival.
    Pending,
    Ready,
    Running,
    Completed,
}

/// One schedulable unit and its run-time bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub name: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    /// Tick of the first dispatch.
    pub start: Option<Ticks>,
    /// Tick at which `remaining` reached zero.
    pub finish: Option<Ticks>,
    pub remaining: Ticks,
    pub state: ProcessState,
}

impl Process {
    pub fn new(
        name: impl Into<String>,
        arrival: Ticks,
        burst: Ticks,
    ) -> Result<Self, SimError> {
        let name = name.into();
        if burst == 0 {
            return Err(SimError::InvalidBurst { name, burst: 0 });
        }

        Ok(Self {
            name,
            arrival,
            burst,
            start: None,
            finish: None,
            remaining: burst,
            state: ProcessState::Pending,
        })
    }

    /// `start - arrival`, once the process has been dispatched.
    pub fn response_time(&self) -> Option<Ticks> {
        self.start.map(|start| start - self.arrival)
    }

    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.finish.map(|finish| finish - self.arrival)
    }

    /// Time spent in the ready queue: turnaround minus burst.
    pub fn waiting_time(&self) -> Option<Ticks> {
        self.turnaround_time().map(|t| t - self.burst)
    }

    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }
}

/// The single CPU of the simulated machine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cpu {
    pub current: Option<ProcId>,
    /// Ticks left in the current slice.
    pub slice_left: Ticks,
}

#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub cpu: Cpu,
    pub procs: Vec<Process>,
    pub ready: VecDeque<ProcId>,
    // One entry per executed tick, always kept
    pub ticks: Vec<ProcId>,
    /// Whether the result exposes `ticks` as a timeline.
    pub record_timeline: bool,

    completed: usize,
}

impl SimCtx {
    pub fn new(procs: Vec<Process>, record_timeline: bool) -> Self {
        let ready = VecDeque::with_capacity(procs.len());
        Self {
            now: 0,
            cpu: Cpu::default(),
            procs,
            ready,
            ticks: Vec::new(),
            record_timeline,
            completed: 0,
        }
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn proc(&self, id: ProcId) -> &Process {
        &self.procs[id]
    }

    pub fn proc_mut(&mut self, id: ProcId) -> &mut Process {
        &mut self.procs[id]
    }

    pub fn cpu_is_idle(&self) -> bool {
        self.cpu.current.is_none()
    }

    pub fn completed_count(&self) -> usize {
        self.completed
    }

    pub fn all_completed(&self) -> bool {
        self.completed == self.procs.len()
    }

    /// Appends `id` to the back of the ready queue.
    pub fn enqueue(&mut self, id: ProcId) {
        debug_assert!(
            !self.ready.contains(&id),
            "Process {id} already present in the ready queue"
        );

        debug_assert_eq!(
            self.proc(id).state,
            ProcessState::Ready,
            "Process {id} must be Ready when enqueued"
        );

        self.ready.push_back(id);
    }

    pub fn mark_ready(&mut self, id: ProcId) {
        let proc = self.proc_mut(id);
        debug_assert!(
            proc.state != ProcessState::Completed,
            "Completed process {} cannot be ready",
            proc.name
        );
        proc.state = ProcessState::Ready;
    }

    pub fn pop_ready(&mut self) -> Option<ProcId> {
        self.ready.pop_front()
    }

    // Return true on the first dispatch of the process
    pub fn set_running(&mut self, id: ProcId, slice: Ticks) -> bool {
        debug_assert!(self.cpu.current.is_none(), "CPU already running a process");
        debug_assert!(slice > 0, "Process {id} dispatched with an empty slice");

        let now = self.now;
        self.cpu = Cpu {
            current: Some(id),
            slice_left: slice,
        };

        let proc = self.proc_mut(id);
        debug_assert_eq!(
            proc.state,
            ProcessState::Ready,
            "Process {id} must be Ready before dispatch"
        );
        proc.state = ProcessState::Running;
        if proc.start.is_none() {
            proc.start = Some(now);
            true
        } else {
            false
        }
    }

    pub fn clear_cpu(&mut self) {
        self.cpu = Cpu::default();
    }

    pub fn mark_completed(&mut self, id: ProcId) {
        let now = self.now;
        let proc = self.proc_mut(id);
        debug_assert_eq!(
            proc.state,
            ProcessState::Running,
            "Process {id} must have been running before marked complete"
        );
        debug_assert_eq!(proc.remaining, 0, "Process {id} completed with work left");

        proc.state = ProcessState::Completed;
        proc.finish = Some(now);
        self.completed += 1;
    }

    pub fn record_tick(&mut self, id: ProcId) {
        self.ticks.push(id);
    }

    /// Per-tick record for the result, if requested.
    pub fn timeline(&self) -> Option<&[ProcId]> {
        self.record_timeline.then_some(self.ticks.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(bursts: &[Ticks]) -> SimCtx {
        let procs = bursts
            .iter()
            .enumerate()
            .map(|(i, &burst)| Process::new(format!("P{}", i + 1), 0, burst).unwrap())
            .collect();
        SimCtx::new(procs, true)
    }

    #[test]
    fn zero_burst_is_rejected() {
        let err = Process::new("P1", 0, 0).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidBurst {
                name: "P1".into(),
                burst: 0
            }
        );
    }

    #[test]
    fn new_process_has_no_timings() {
        let p = Process::new("P1", 3, 4).unwrap();
        assert_eq!(p.remaining, 4);
        assert_eq!(p.state, ProcessState::Pending);
        assert_eq!(p.response_time(), None);
        assert_eq!(p.turnaround_time(), None);
        assert_eq!(p.waiting_time(), None);
    }

    #[test]
    fn start_is_set_only_on_first_dispatch() {
        let mut ctx = ctx(&[4]);
        ctx.mark_ready(0);
        ctx.enqueue(0);
        let id = ctx.pop_ready().unwrap();
        assert!(ctx.set_running(id, 2));

        ctx.advance_time(2);
        ctx.clear_cpu();
        ctx.mark_ready(id);
        ctx.enqueue(id);
        let id = ctx.pop_ready().unwrap();
        assert!(!ctx.set_running(id, 2));
        assert_eq!(ctx.proc(id).start, Some(0));
    }

    #[test]
    fn derived_timings_follow_start_and_finish() {
        let mut p = Process::new("P2", 1, 3).unwrap();
        p.start = Some(2);
        p.finish = Some(9);
        assert_eq!(p.response_time(), Some(1));
        assert_eq!(p.turnaround_time(), Some(8));
        assert_eq!(p.waiting_time(), Some(5));
    }

    #[test]
    fn ticks_are_kept_whether_or_not_timeline_is_requested() {
        let mut off = SimCtx::new(vec![Process::new("P1", 0, 1).unwrap()], false);
        off.record_tick(0);
        assert_eq!(off.ticks, [0]);
        assert_eq!(off.timeline(), None);

        // Turning recording on later still sees the earlier ticks
        off.record_timeline = true;
        assert_eq!(off.timeline(), Some(&[0][..]));
    }
}
