//! Clock port used to stamp loaded configurations

use chrono::{DateTime, Utc};

/// Port for getting the current time.
///
/// Tests pin the clock so repeated runs render identical timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
