//! Round Robin CPU scheduling simulator.
//!
//! A deterministic, single-threaded, tick-level simulation of one CPU
//! rotating a FIFO ready queue in fixed quanta.
//!
//! ```
//! use rr_model::{default_example, simulate_specs};
//!
//! let result = simulate_specs(&default_example(), 2, false).unwrap();
//! assert_eq!(result.execution_order.len(), 8);
//! ```

pub mod core;
pub mod error;
pub mod input;
pub mod report;
pub mod sim;

pub use crate::core::{Process, SimEvent, Ticks};
pub use error::{InputError, SimError};
pub use sim::{
    ProcessSpec, Quantum, RoundRobin, SimConfig, SimulationResult, default_example,
    simulate_specs,
};
