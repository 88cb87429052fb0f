pub mod error;
pub mod event;
pub mod metrics;

pub use error::SimError;
pub use event::{Action, CSV_HEADER, Event, EventLog};
pub use metrics::{MetricsTable, ProcessMetrics};
