//! Policy selection from workload shape.
//!
//! The engine never depends on a predictor's internals: anything that can
//! map [`WorkloadFeatures`] to a [`Policy`] (a trained model, a lookup
//! table, the baseline heuristic below) plugs in through
//! [`PolicySelector`].

use std::num::NonZeroU64;

use average::Variance;
use log::info;
use rustc_hash::FxHashSet;

use crate::scheduler::Policy;
use crate::sim::{SimReport, Workload, simulate};

/// Summary statistics a selector decides from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadFeatures {
    pub len: usize,
    pub mean_burst: f64,
    /// Population standard deviation of burst times.
    pub burst_spread: f64,
    pub mean_arrival: f64,
    pub priority_levels: usize,
}

impl WorkloadFeatures {
    pub fn from_workload(workload: &Workload) -> Self {
        if workload.is_empty() {
            return Self {
                len: 0,
                mean_burst: 0.0,
                burst_spread: 0.0,
                mean_arrival: 0.0,
                priority_levels: 0,
            };
        }

        let burst: Variance = workload.iter().map(|p| p.burst_time as f64).collect();
        let arrival: Variance = workload.iter().map(|p| p.arrival_time as f64).collect();
        let priorities: FxHashSet<u32> = workload.iter().map(|p| p.priority).collect();

        Self {
            len: workload.len(),
            mean_burst: burst.mean(),
            burst_spread: burst.population_variance().sqrt(),
            mean_arrival: arrival.mean(),
            priority_levels: priorities.len(),
        }
    }
}

pub trait PolicySelector {
    fn select(&self, features: &WorkloadFeatures) -> Policy;
}

/// Always picks the same policy. Useful as a control in sweeps.
pub struct FixedSelector(pub Policy);

impl PolicySelector for FixedSelector {
    fn select(&self, _features: &WorkloadFeatures) -> Policy {
        self.0
    }
}

/// Rule-of-thumb baseline used when no trained predictor is plugged in:
/// widely spread bursts favor SJF, mixed urgencies favor priority, big
/// batches favor round-robin fairness, everything else falls back to FCFS.
pub struct HeuristicSelector;

impl PolicySelector for HeuristicSelector {
    fn select(&self, f: &WorkloadFeatures) -> Policy {
        if f.len == 0 {
            Policy::Fcfs
        } else if f.burst_spread > f.mean_burst / 2.0 {
            Policy::Sjf
        } else if f.priority_levels > 1 {
            Policy::Priority
        } else if f.len >= 8 {
            Policy::RoundRobin
        } else {
            Policy::Fcfs
        }
    }
}

/// Let `selector` pick the policy for `workload`, then run it.
pub fn run_adaptive<S: PolicySelector>(
    selector: &S,
    workload: &Workload,
    quantum: NonZeroU64,
) -> SimReport {
    let features = WorkloadFeatures::from_workload(workload);
    let policy = selector.select(&features);
    info!("selector chose {policy} for {} processes", features.len);
    simulate(policy, workload, quantum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::QUANTUM_DFL;
    use crate::sim::Process;

    fn uniform_priority_workload(bursts: &[u64]) -> Workload {
        let procs = bursts
            .iter()
            .enumerate()
            .map(|(i, &b)| Process::new(i as u32, 0, b, 1).unwrap())
            .collect();
        Workload::new(procs).unwrap()
    }

    #[test]
    fn features_summarize_the_workload() {
        let f = WorkloadFeatures::from_workload(&uniform_priority_workload(&[2, 4, 6]));
        assert_eq!(f.len, 3);
        assert_eq!(f.mean_burst, 4.0);
        assert_eq!(f.priority_levels, 1);
    }

    #[test]
    fn spread_bursts_pick_sjf() {
        let f = WorkloadFeatures::from_workload(&uniform_priority_workload(&[1, 1, 10, 10]));
        assert_eq!(HeuristicSelector.select(&f), Policy::Sjf);
    }

    #[test]
    fn uniform_small_batch_picks_fcfs() {
        let f = WorkloadFeatures::from_workload(&uniform_priority_workload(&[3, 3, 3]));
        assert_eq!(HeuristicSelector.select(&f), Policy::Fcfs);
    }

    #[test]
    fn fixed_selector_ignores_features() {
        let workload = uniform_priority_workload(&[5, 5]);
        let report = run_adaptive(&FixedSelector(Policy::RoundRobin), &workload, QUANTUM_DFL);
        assert_eq!(report.policy, Policy::RoundRobin);
    }
}
