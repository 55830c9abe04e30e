use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Source of "today" for the dashboard: stats, quick ranges and the initial month.
pub trait Clock: std::fmt::Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type SharedClock = Arc<dyn Clock>;

/// Wall clock in the local time zone of the process.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
