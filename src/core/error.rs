use std::io;

use thiserror::Error;

use crate::sim::Pid;

#[derive(Debug, Error)]
pub enum SimError {
    /// Policy name is not one of FCFS, SJF, RR, PR.
    #[error("unknown scheduling policy `{0}`")]
    InvalidPolicy(String),

    /// Burst time must be positive for termination to be guaranteed.
    #[error("process {pid}: burst time must be positive")]
    InvalidProcess { pid: Pid },

    /// Workload ids must be unique.
    #[error("duplicate process id {0} in workload")]
    DuplicatePid(Pid),

    /// The event log sink rejected a write. Metrics already computed for
    /// the run remain valid; log completeness does not.
    #[error("event log sink failure: {0}")]
    LogSink(#[from] io::Error),
}
