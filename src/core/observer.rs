use super::state::{ProcessState, SimCtx, Ticks};

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;

        if let Some(id) = ctx.cpu.current {
            let proc = ctx.proc(id);
            debug_assert_eq!(
                proc.state,
                ProcessState::Running,
                "cpu.current process {id} must be Running"
            );
            debug_assert!(
                ctx.cpu.slice_left <= proc.remaining,
                "Slice of process {id} outlasts its remaining work"
            );
        }

        for &id in &ctx.ready {
            let proc = ctx.proc(id);
            debug_assert_eq!(
                proc.state,
                ProcessState::Ready,
                "Queued process {id} must be Ready"
            );
            debug_assert!(
                proc.remaining > 0,
                "Process {id} with no work left is still queued"
            );
            debug_assert!(
                proc.arrival <= ctx.now,
                "Process {id} queued before its arrival"
            );
        }

        let executed: Ticks = ctx.procs.iter().map(|p| p.burst - p.remaining).sum();
        debug_assert_eq!(
            ctx.ticks.len() as Ticks,
            executed,
            "Tick record out of sync with executed work"
        );
        debug_assert_eq!(
            ctx.completed_count(),
            ctx.procs.iter().filter(|p| p.is_completed()).count(),
            "Completed counter out of sync with process states"
        );

        for (id, proc) in ctx.procs.iter().enumerate() {
            debug_assert!(
                proc.remaining <= proc.burst,
                "Process {id} remaining exceeds its burst"
            );
            if let (Some(start), Some(finish)) = (proc.start, proc.finish) {
                debug_assert!(start <= finish, "Process {id} finished before it started");
            }
            debug_assert_eq!(
                proc.finish.is_some(),
                proc.is_completed(),
                "Process {id} finish tick out of sync with its state"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Process;

    #[test]
    fn counts_observed_steps() {
        let ctx = SimCtx::new(vec![Process::new("P1", 0, 2).unwrap()], false);
        let mut observer = Observer::new();
        observer.observe(&ctx);
        observer.observe(&ctx);
        assert_eq!(observer.steps(), 2);
    }
}
