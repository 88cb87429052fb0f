use keyed_priority_queue::KeyedPriorityQueue;
use rustc_hash::FxHashMap;

use super::RankKey;
use crate::core::{Action, EventLog, MetricsTable, ProcessMetrics};
use crate::sim::{Pid, Process, Ticks, Workload};

/// Shortest-job-first, non-preemptive.
///
/// Among arrived processes the smallest burst wins, ties broken by earliest
/// arrival then pid. A running process is never preempted, even when a
/// shorter job arrives mid-execution.
pub fn run(workload: &Workload, log: &mut EventLog) -> MetricsTable {
    run_ranked(workload, log, |p| p.burst_time)
}

/// Shared decision loop for the non-preemptive ranked policies (SJF and
/// priority). `metric` extracts the selection key; lower wins.
pub(super) fn run_ranked(
    workload: &Workload,
    log: &mut EventLog,
    metric: impl Fn(&Process) -> u64,
) -> MetricsTable {
    let order = workload.sorted_by_arrival();
    let table: FxHashMap<Pid, &Process> = order.iter().map(|p| (p.pid, p)).collect();

    let mut ready: KeyedPriorityQueue<Pid, RankKey> = KeyedPriorityQueue::new();
    let mut cursor = 0;
    let mut clock: Ticks = 0;
    let mut rows = Vec::with_capacity(order.len());

    let admit = |ready: &mut KeyedPriorityQueue<Pid, RankKey>, cursor: &mut usize, now: Ticks| {
        while *cursor < order.len() && order[*cursor].arrival_time <= now {
            let p = &order[*cursor];
            ready.push(
                p.pid,
                RankKey {
                    metric: metric(p),
                    arrival: p.arrival_time,
                    pid: p.pid,
                },
            );
            *cursor += 1;
        }
    };

    while rows.len() < order.len() {
        admit(&mut ready, &mut cursor, clock);

        let Some((pid, _)) = ready.pop() else {
            // Nothing has arrived; jump straight to the next arrival.
            clock = order[cursor].arrival_time;
            continue;
        };
        let p = table.get(&pid).expect("popped pid missing from process table");

        let start = clock;
        let finish = start + p.burst_time;
        clock = finish;

        log.log(start, pid, Action::Start, ready.len());
        admit(&mut ready, &mut cursor, clock);
        log.log(finish, pid, Action::Finish, ready.len());

        rows.push(ProcessMetrics::new(
            pid,
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
