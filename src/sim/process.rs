use rustc_hash::FxHashSet;

use crate::core::SimError;

/// Simulated clock ticks.
pub type Ticks = u64;
/// Process identifier, unique within one workload.
pub type Pid = u32;

/// One unit of work: fixed arrival/burst/priority plus the remaining-time
/// counter mutated by whichever policy run owns this copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    /// Lower value = more urgent. Only the priority policy reads it.
    pub priority: u32,
    remaining: Ticks,
}

impl Process {
    /// Burst time must be positive, otherwise the process could never
    /// terminate.
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks, priority: u32) -> Result<Self, SimError> {
        if burst_time == 0 {
            return Err(SimError::InvalidProcess { pid });
        }
        Ok(Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining: burst_time,
        })
    }

    pub fn remaining(&self) -> Ticks {
        self.remaining
    }

    /// Execute for at most `quantum` ticks, returning the ticks actually
    /// consumed. Never runs past the point `remaining` reaches 0.
    pub fn run_for(&mut self, quantum: Ticks) -> Ticks {
        let executed = quantum.min(self.remaining);
        self.remaining -= executed;
        executed
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// An ordered collection of processes forming one simulation input.
///
/// Insertion order is irrelevant to correctness (policies sort as needed)
/// but serves as the tie-break of last resort for equal arrival times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    procs: Vec<Process>,
}

impl Workload {
    pub fn new(procs: Vec<Process>) -> Result<Self, SimError> {
        let mut seen = FxHashSet::default();
        for p in &procs {
            if !seen.insert(p.pid) {
                return Err(SimError::DuplicatePid(p.pid));
            }
        }
        Ok(Self { procs })
    }

    pub fn processes(&self) -> &[Process] {
        &self.procs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.procs.iter()
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    // Stable, so equal arrivals keep workload order.
    pub(crate) fn sorted_by_arrival(&self) -> Vec<Process> {
        let mut procs = self.procs.clone();
        procs.sort_by_key(|p| p.arrival_time);
        procs
    }
}
