use average::Estimate;

use crate::sim::{Pid, Ticks};

/// Timing metrics for one completed process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: u32,
    /// First tick of execution.
    pub start: Ticks,
    pub finish: Ticks,
    pub waiting: Ticks,
    pub turnaround: Ticks,
}

impl ProcessMetrics {
    pub(crate) fn new(
        pid: Pid,
        arrival: Ticks,
        burst: Ticks,
        priority: u32,
        start: Ticks,
        finish: Ticks,
        waiting: Ticks,
    ) -> Self {
        let turnaround = finish - arrival;
        debug_assert_eq!(
            turnaround,
            waiting + burst,
            "turnaround identity violated for process {pid}"
        );
        Self {
            pid,
            arrival,
            burst,
            priority,
            start,
            finish,
            waiting,
            turnaround,
        }
    }
}

/// Per-process results of one policy run, in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsTable {
    rows: Vec<ProcessMetrics>,
}

impl MetricsTable {
    pub(crate) fn new(rows: Vec<ProcessMetrics>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ProcessMetrics] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessMetrics> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, pid: Pid) -> Option<&ProcessMetrics> {
        self.rows.iter().find(|r| r.pid == pid)
    }

    pub fn avg_waiting(&self) -> f64 {
        self.mean(|r| r.waiting)
    }

    pub fn avg_turnaround(&self) -> f64 {
        self.mean(|r| r.turnaround)
    }

    /// Latest finish tick, 0 for an empty table.
    pub fn makespan(&self) -> Ticks {
        self.rows.iter().map(|r| r.finish).max().unwrap_or(0)
    }

    fn mean(&self, field: impl Fn(&ProcessMetrics) -> Ticks) -> f64 {
        self.rows
            .iter()
            .map(|r| field(r) as f64)
            .collect::<average::Mean>()
            .estimate()
    }
}
