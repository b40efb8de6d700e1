//! Adapters for the small application ports.

mod system_clock;
mod tracing_reporter;

pub use system_clock::{FixedClock, SystemClock};
pub use tracing_reporter::TracingReporter;
