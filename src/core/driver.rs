use tracing::{debug, trace};

use super::{
    event::SimEvent,
    observer::Observer,
    state::{Process, SimCtx, Ticks},
};
use crate::sim::Quantum;

/// Single-CPU execution engine.
///
/// Works one tick at a time so the caller can admit arrivals between the
/// tick and the end-of-slice decision.
pub struct RrCore {
    pub ctx: SimCtx,
    quantum: Quantum,
    observer: Observer,
}

impl RrCore {
    pub fn new(procs: Vec<Process>, quantum: Quantum, record_timeline: bool) -> Self {
        Self {
            ctx: SimCtx::new(procs, record_timeline),
            quantum,
            observer: Observer::new(),
        }
    }

    /// Moves the ready queue head onto the CPU with a slice of
    /// `min(quantum, remaining)`. `None` when the queue is empty.
    pub fn dispatch(&mut self) -> Option<SimEvent> {
        debug_assert!(self.ctx.cpu_is_idle(), "Dispatch onto a busy CPU");

        let proc = self.ctx.pop_ready()?;
        let slice = self.quantum.get().min(self.ctx.proc(proc).remaining);
        let at = self.ctx.now;
        let first = self.ctx.set_running(proc, slice);

        debug!(
            process = %self.ctx.proc(proc).name,
            at,
            slice,
            first,
            "Dispatch"
        );

        Some(SimEvent::Dispatched {
            proc,
            at,
            slice,
            first,
        })
    }

    /// Runs the current process for one tick.
    pub fn tick(&mut self) -> Option<SimEvent> {
        let proc = self.ctx.cpu.current?;
        let at = self.ctx.now;

        // In its own block to avoid double-mutable-borrow
        {
            let p = self.ctx.proc_mut(proc);
            debug_assert!(p.remaining > 0, "Running process {proc} has no work left");
            p.remaining -= 1;
        }
        self.ctx.cpu.slice_left -= 1;
        self.ctx.advance_time(1);
        self.ctx.record_tick(proc);

        trace!(process = %self.ctx.proc(proc).name, at, "Tick");
        Some(SimEvent::Ticked { proc, at })
    }

    /// Ends the slice if the process finished or used up its quantum.
    ///
    /// Must run after the arrivals of the elapsed tick were admitted, so a
    /// preempted process lands behind them.
    pub fn settle(&mut self) -> Option<SimEvent> {
        let proc = self.ctx.cpu.current?;
        let remaining = self.ctx.proc(proc).remaining;

        if remaining == 0 {
            self.ctx.clear_cpu();
            self.ctx.mark_completed(proc);
            let at = self.ctx.now;
            debug!(process = %self.ctx.proc(proc).name, at, "Completed");
            return Some(SimEvent::Completed { proc, at });
        }

        if self.ctx.cpu.slice_left == 0 {
            self.ctx.clear_cpu();
            self.ctx.mark_ready(proc);
            self.ctx.enqueue(proc);
            debug!(process = %self.ctx.proc(proc).name, remaining, "Requeued");
            return Some(SimEvent::Requeued { proc, remaining });
        }

        None
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn quantum(&self) -> Quantum {
        self.quantum
    }

    pub fn observe(&mut self) {
        self.observer.observe(&self.ctx);
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
