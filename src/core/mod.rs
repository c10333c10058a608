pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::RrCore;
pub use event::SimEvent;
pub use state::{Cpu, ProcId, Process, ProcessState, SimCtx, Ticks};
