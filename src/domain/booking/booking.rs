use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::domain::calendar::stay::StayRange;
use crate::domain::utils::id::BookingId;

/// One booking of one room as the dashboard sees it: who, and on which days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub customer_name: String,
    pub dates: BTreeSet<NaiveDate>,
}

impl Booking {
    pub fn new(id: BookingId, customer_name: impl Into<String>, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Booking { id, customer_name: customer_name.into(), dates: dates.into_iter().collect() }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// True if any booked day falls inside the inclusive range.
    pub fn has_date_in(&self, range: &StayRange) -> bool {
        self.dates.range(range.checkin..=range.checkout).next().is_some()
    }

    /// First day claimed by both bookings, if any.
    pub fn shared_date(&self, other: &Booking) -> Option<NaiveDate> {
        self.dates.intersection(&other.dates).next().copied()
    }
}

/// Lifecycle state of a booking record on the application server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingState {
    Draft,
    Reserved,
    CheckIn,
    CheckOut,
    Cancel,
    Done,
}

/// Summary returned when a single booking record is looked up by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub id: BookingId,
    pub reference: String,
    pub customer_name: String,
    pub state: BookingState,
}
