use crate::core::{ProcId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    Arrived {
        proc: ProcId,
    },
    // Ready queue empty: clock skipped to the next arrival
    IdleJump {
        from: Ticks,
        to: Ticks,
    },
    Dispatched {
        proc: ProcId,
        at: Ticks,
        slice: Ticks,
        first: bool,
    },
    Ticked {
        proc: ProcId,
        at: Ticks,
    },
    // Slice expired with work left
    Requeued {
        proc: ProcId,
        remaining: Ticks,
    },
    Completed {
        proc: ProcId,
        at: Ticks,
    },
}
