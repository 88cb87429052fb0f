//! Tick-based CPU scheduling simulator.
//!
//! A [`Workload`] of synthetic processes is consumed by one of four
//! scheduling policies (FCFS, SJF, round-robin, priority), producing a
//! per-process [`MetricsTable`] and an append-only [`EventLog`] trace.

pub mod adaptive;
pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Action, Event, EventLog, MetricsTable, ProcessMetrics, SimError};
pub use scheduler::{Policy, QUANTUM_DFL};
pub use sim::{Pid, Process, SimReport, Ticks, UniformSource, Workload, WorkloadSource};
