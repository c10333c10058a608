pub mod config;
pub mod driver;
pub mod process;
pub mod result;
pub mod workload;

pub use config::{DEFAULT_QUANTUM, Quantum, SimConfig};
pub use driver::{RoundRobin, simulate_specs};
pub use process::{ProcessSpec, default_example};
pub use result::{Dispatch, NEVER_STARTED, SimulationResult};
pub use workload::{WorkloadConfig, bernoulli_specs};
