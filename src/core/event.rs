use std::fmt;
use std::io::Write;

use crate::core::SimError;
use crate::sim::{Pid, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// First execution slice of a process.
    Start,
    /// A later slice of an already-started process (round-robin only).
    Run,
    Finish,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Start => write!(f, "START"),
            Action::Run => write!(f, "RUN"),
            Action::Finish => write!(f, "FINISH"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub time: Ticks,
    pub pid: Pid,
    pub action: Action,
    /// Ready-queue length at the moment the event was recorded.
    pub ready_len: usize,
}

/// Append-only trace of scheduling activity.
///
/// Events are never mutated after being logged. Per-process times are
/// non-decreasing; the global order may interleave under preemptive
/// policies. The log is single-writer: callers aggregating across
/// concurrent runs must serialize `log()` externally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

pub const CSV_HEADER: &str = "time,process_id,action,ready_queue_len";

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, time: Ticks, pid: Pid, action: Action, ready_len: usize) {
        debug_assert!(
            self.events
                .iter()
                .rev()
                .find(|e| e.pid == pid)
                .is_none_or(|e| e.time <= time),
            "event log time went backwards for process {pid}"
        );
        self.events.push(Event {
            time,
            pid,
            action,
            ready_len,
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Write the full log as CSV, header included.
    pub fn write_csv<W: Write>(&self, mut sink: W) -> Result<(), SimError> {
        writeln!(sink, "{CSV_HEADER}")?;
        self.write_rows(&mut sink)
    }

    /// Write data rows only. Lets callers append several runs behind a
    /// single header.
    pub fn write_rows<W: Write>(&self, sink: &mut W) -> Result<(), SimError> {
        for e in &self.events {
            writeln!(sink, "{},{},{},{}", e.time, e.pid, e.action, e.ready_len)?;
        }
        Ok(())
    }
}
