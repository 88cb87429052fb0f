use std::num::NonZeroU64;

use log::{debug, info};

use super::process::Workload;
use crate::core::{EventLog, MetricsTable, SimError};
use crate::scheduler::{self, Policy};

/// Everything one policy run produces.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub policy: Policy,
    pub metrics: MetricsTable,
    pub log: EventLog,
}

/// Run one policy over one workload with a fresh event log.
pub fn simulate(policy: Policy, workload: &Workload, quantum: NonZeroU64) -> SimReport {
    info!("scheduling {} processes under {policy}", workload.len());
    let mut log = EventLog::new();
    let metrics = scheduler::run(policy, workload, quantum, &mut log);
    debug!(
        "{policy} done: {} events, avg waiting {:.2}, avg turnaround {:.2}",
        log.len(),
        metrics.avg_waiting(),
        metrics.avg_turnaround()
    );
    SimReport {
        policy,
        metrics,
        log,
    }
}

/// [`simulate`] for callers holding a policy name string.
pub fn simulate_named(name: &str, workload: &Workload, quantum: NonZeroU64) -> Result<SimReport, SimError> {
    let policy: Policy = name.parse()?;
    Ok(simulate(policy, workload, quantum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::QUANTUM_DFL;
    use crate::sim::Process;

    fn two_process_workload() -> Workload {
        Workload::new(vec![
            Process::new(0, 0, 4, 1).unwrap(),
            Process::new(1, 1, 3, 2).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn report_carries_metrics_and_log() {
        let report = simulate(Policy::Fcfs, &two_process_workload(), QUANTUM_DFL);
        assert_eq!(report.policy, Policy::Fcfs);
        assert_eq!(report.metrics.len(), 2);
        assert!(!report.log.is_empty());
    }

    #[test]
    fn named_dispatch_matches_enum_dispatch() {
        let workload = two_process_workload();
        let by_name = simulate_named("sjf", &workload, QUANTUM_DFL).unwrap();
        let by_enum = simulate(Policy::Sjf, &workload, QUANTUM_DFL);
        assert_eq!(by_name.metrics, by_enum.metrics);
    }
}
