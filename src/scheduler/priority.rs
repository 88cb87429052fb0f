use super::sjf;
use crate::core::{EventLog, MetricsTable};
use crate::sim::Workload;

/// Priority scheduling, non-preemptive. Lower value = more urgent.
///
/// Same decision loop as SJF with `priority` as the rank metric; ties
/// broken by earliest arrival then pid.
pub fn run(workload: &Workload, log: &mut EventLog) -> MetricsTable {
    sjf::run_ranked(workload, log, |p| u64::from(p.priority))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Process, Ticks};

    fn workload(specs: &[(Ticks, Ticks, u32)]) -> Workload {
        let procs = specs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, burst, priority))| {
                Process::new(i as u32, arrival, burst, priority).unwrap()
            })
            .collect();
        Workload::new(procs).unwrap()
    }

    #[test]
    fn most_urgent_available_wins() {
        let table = run(&workload(&[(0, 4, 3), (0, 4, 1), (0, 4, 2)]), &mut EventLog::new());
        let order: Vec<u32> = table.iter().map(|r| r.pid).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn urgency_does_not_preempt() {
        // P1 is more urgent but arrives while P0 runs.
        let table = run(&workload(&[(0, 6, 5), (2, 2, 1)]), &mut EventLog::new());
        assert_eq!(table.get(0).unwrap().finish, 6);
        let p1 = table.get(1).unwrap();
        assert_eq!((p1.start, p1.waiting), (6, 4));
    }

    #[test]
    fn equal_priorities_break_by_arrival_then_pid() {
        let table = run(&workload(&[(1, 2, 2), (0, 2, 2), (1, 2, 2)]), &mut EventLog::new());
        let order: Vec<u32> = table.iter().map(|r| r.pid).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn metrics_carry_the_priority_column() {
        let table = run(&workload(&[(0, 1, 4)]), &mut EventLog::new());
        assert_eq!(table.get(0).unwrap().priority, 4);
    }
}
