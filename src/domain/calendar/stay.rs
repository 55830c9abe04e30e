use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};

pub const CHECKOUT_BEFORE_CHECKIN: &str = "Checkout must be greater or equal checkin date";

/// Number of billable nights for a booking line.
///
/// The day difference is counted inclusively once it is positive, so a
/// same-day stay counts as 0 and 2024-01-01..2024-01-03 counts as 3.
pub fn night_count(checkin: NaiveDate, checkout: NaiveDate) -> i64 {
    let days = (checkout - checkin).num_days();
    if days > 0 { days + 1 } else { days }
}

/// An inclusive checkin..=checkout date range with `checkin <= checkout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StayRange {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

impl StayRange {
    /// Validates the dates in the order they were given.
    ///
    /// # Returns
    /// `Error::ValidationError` if `checkout` lies before `checkin`.
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> Result<Self> {
        if checkout < checkin {
            return Err(Error::ValidationError(CHECKOUT_BEFORE_CHECKIN.to_string()));
        }
        Ok(StayRange { checkin, checkout })
    }

    /// Orders two dates into a range regardless of click order.
    pub fn normalized(a: NaiveDate, b: NaiveDate) -> Self {
        StayRange { checkin: a.min(b), checkout: a.max(b) }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.checkin <= date && date <= self.checkout
    }

    pub fn intersects(&self, other: &StayRange) -> bool {
        self.checkin <= other.checkout && other.checkin <= self.checkout
    }

    pub fn night_count(&self) -> i64 {
        night_count(self.checkin, self.checkout)
    }
}
