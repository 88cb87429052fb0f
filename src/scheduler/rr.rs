use std::collections::VecDeque;
use std::num::NonZeroU64;

use log::trace;
use rustc_hash::FxHashMap;

use crate::core::{Action, EventLog, MetricsTable, ProcessMetrics};
use crate::sim::{Pid, Process, Ticks, Workload};

/// Round-robin, preemptive with a fixed quantum.
///
/// Each per-run `Process` copy carries the authoritative remaining-time
/// counter; there is no separate bookkeeping map to drift out of sync.
pub fn run(workload: &Workload, quantum: NonZeroU64, log: &mut EventLog) -> MetricsTable {
    let mut pending: VecDeque<Process> = workload.sorted_by_arrival().into();
    let mut ready: VecDeque<Process> = VecDeque::new();
    let mut first_start: FxHashMap<Pid, Ticks> = FxHashMap::default();
    let mut clock: Ticks = 0;
    let mut rows = Vec::with_capacity(pending.len());

    while !(pending.is_empty() && ready.is_empty()) {
        admit(&mut pending, &mut ready, clock);

        let Some(mut current) = ready.pop_front() else {
            // CPU idles; jump to the next arrival.
            clock = pending
                .front()
                .expect("pending non-empty while ready queue is drained")
                .arrival_time;
            continue;
        };

        let slice_start = clock;
        let executed = current.run_for(quantum.get());
        clock += executed;
        trace!("pid {} ran {}..{}", current.pid, slice_start, clock);

        let action = if first_start.contains_key(&current.pid) {
            Action::Run
        } else {
            first_start.insert(current.pid, slice_start);
            Action::Start
        };
        log.log(slice_start, current.pid, action, ready.len());

        // Arrivals during the slice queue ahead of the preempted process.
        admit(&mut pending, &mut ready, clock);

        if current.is_complete() {
            log.log(clock, current.pid, Action::Finish, ready.len());
            let start = first_start[&current.pid];
            rows.push(ProcessMetrics::new(
                current.pid,
                current.arrival_time,
                current.burst_time,
                current.priority,
                start,
                clock,
                clock - current.arrival_time - current.burst_time,
            ));
        } else {
            ready.push_back(current);
        }
    }

    MetricsTable::new(rows)
}

fn admit(pending: &mut VecDeque<Process>, ready: &mut VecDeque<Process>, now: Ticks) {
    while pending.front().is_some_and(|p| p.arrival_time <= now) {
        ready.push_back(pending.pop_front().expect("front presence just checked"));
    }
}
