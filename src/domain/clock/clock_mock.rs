use chrono::NaiveDate;
use std::sync::{Arc, RwLock};

use crate::domain::clock::clock::Clock;

/// Clock pinned to one date. Used by tests and by `--today` on the command line.
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> FixedClock {
        FixedClock { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Clock whose date can be moved while a dashboard holds it.
#[derive(Debug, Clone)]
pub struct SharedMockClock {
    pub today: Arc<RwLock<NaiveDate>>,
}

impl SharedMockClock {
    pub fn new(today: NaiveDate) -> Self {
        SharedMockClock { today: Arc::new(RwLock::new(today)) }
    }

    pub fn set_today(&self, today: NaiveDate) {
        match self.today.write() {
            Ok(mut guard) => *guard = today,
            Err(poisoned) => *poisoned.into_inner() = today,
        }
    }
}

impl Clock for SharedMockClock {
    fn today(&self) -> NaiveDate {
        match self.today.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
