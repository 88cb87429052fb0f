pub mod driver;
pub mod process;
pub mod workload;

pub use driver::{SimReport, simulate, simulate_named};
pub use process::{Pid, Process, Ticks, Workload};
pub use workload::{UniformSource, WorkloadSource};
