use crate::core::{Action, EventLog, MetricsTable, ProcessMetrics};
use crate::sim::Workload;

/// First-come-first-served, non-preemptive.
///
/// Processes run to completion in arrival order; the clock jumps forward
/// over gaps where nothing has arrived yet.
pub fn run(workload: &Workload, log: &mut EventLog) -> MetricsTable {
    let order = workload.sorted_by_arrival();
    let mut clock = 0;
    let mut rows = Vec::with_capacity(order.len());

    for (i, p) in order.iter().enumerate() {
        if clock < p.arrival_time {
            clock = p.arrival_time;
        }

        let start = clock;
        let finish = start + p.burst_time;
        clock = finish;

        // order is arrival-sorted, so the arrived-but-waiting suffix is
        // contiguous.
        let waiting_at = |t| order[i + 1..].iter().take_while(|q| q.arrival_time <= t).count();
        log.log(start, p.pid, Action::Start, waiting_at(start));
        log.log(finish, p.pid, Action::Finish, waiting_at(finish));

        rows.push(ProcessMetrics::new(
            p.pid,
            p.arrival_time,
            p.burst_time,
            p.priority,
            start,
            finish,
            start - p.arrival_time,
        ));
    }

    MetricsTable::new(rows)
}
