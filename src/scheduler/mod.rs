pub mod fcfs;
pub mod priority;
pub mod rr;
pub mod sjf;

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::core::{EventLog, MetricsTable, SimError};
use crate::sim::{Pid, Ticks, Workload};

/// Default round-robin time slice.
pub const QUANTUM_DFL: NonZeroU64 = match NonZeroU64::new(2) {
    Some(q) => q,
    None => unreachable!(),
};

/// The closed set of scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    RoundRobin,
    Priority,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Policy::Fcfs, Policy::Sjf, Policy::RoundRobin, Policy::Priority];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::RoundRobin => "RR",
            Policy::Priority => "PR",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Policy::Fcfs),
            "SJF" => Ok(Policy::Sjf),
            "RR" => Ok(Policy::RoundRobin),
            "PR" | "PRIORITY" => Ok(Policy::Priority),
            _ => Err(SimError::InvalidPolicy(s.to_owned())),
        }
    }
}

/// Run `policy` over `workload`, appending trace events to `log`.
///
/// `quantum` is only consulted by round-robin. An empty workload yields an
/// empty table.
pub fn run(policy: Policy, workload: &Workload, quantum: NonZeroU64, log: &mut EventLog) -> MetricsTable {
    match policy {
        Policy::Fcfs => fcfs::run(workload, log),
        Policy::Sjf => sjf::run(workload, log),
        Policy::RoundRobin => rr::run(workload, quantum, log),
        Policy::Priority => priority::run(workload, log),
    }
}

/// String-facing variant of [`run`] for callers holding a policy name.
pub fn run_named(
    name: &str,
    workload: &Workload,
    quantum: NonZeroU64,
    log: &mut EventLog,
) -> Result<MetricsTable, SimError> {
    let policy: Policy = name.parse()?;
    Ok(run(policy, workload, quantum, log))
}

// KeyedPriorityQueue is a max-heap, so the rank ordering is inverted:
// the smallest (metric, arrival, pid) triple pops first.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub(crate) struct RankKey {
    pub metric: u64,
    pub arrival: Ticks,
    pub pid: Pid,
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.metric, other.arrival, other.pid).cmp(&(self.metric, self.arrival, self.pid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Process;

    #[test]
    fn policy_names_round_trip() {
        for policy in Policy::ALL {
            assert_eq!(policy.name().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("fcfs".parse::<Policy>().unwrap(), Policy::Fcfs);
        assert_eq!("Priority".parse::<Policy>().unwrap(), Policy::Priority);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        let err = "CFS".parse::<Policy>().unwrap_err();
        assert!(matches!(err, SimError::InvalidPolicy(name) if name == "CFS"));
    }

    #[test]
    fn empty_workload_yields_empty_table() {
        let workload = Workload::default();
        for policy in Policy::ALL {
            let mut log = EventLog::new();
            let table = run(policy, &workload, QUANTUM_DFL, &mut log);
            assert!(table.is_empty());
            assert!(log.is_empty());
        }
    }

    #[test]
    fn run_named_rejects_unknown_policy_before_executing() {
        let workload = Workload::new(vec![Process::new(0, 0, 1, 1).unwrap()]).unwrap();
        let mut log = EventLog::new();
        assert!(run_named("MLFQ", &workload, QUANTUM_DFL, &mut log).is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn rank_key_pops_smallest_triple_first() {
        let mut queue = keyed_priority_queue::KeyedPriorityQueue::new();
        queue.push(
            0,
            RankKey {
                metric: 5,
                arrival: 0,
                pid: 0,
            },
        );
        queue.push(
            1,
            RankKey {
                metric: 2,
                arrival: 3,
                pid: 1,
            },
        );
        queue.push(
            2,
            RankKey {
                metric: 2,
                arrival: 1,
                pid: 2,
            },
        );
        assert_eq!(queue.pop().map(|t| t.0), Some(2));
        assert_eq!(queue.pop().map(|t| t.0), Some(1));
        assert_eq!(queue.pop().map(|t| t.0), Some(0));
    }
}
