use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::booking::booking::BookingSummary;
use crate::domain::booking::room::{Room, RoomRef};
use crate::domain::calendar::date_axis::DateAxis;
use crate::domain::utils::id::BookingId;
use crate::error::Result;

/// Remote source of the dashboard data. The application server owns the records;
/// the dashboard only reads them.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Every date of the given month.
    async fn get_month_axis(&self, year: i32, month: u32) -> Result<DateAxis>;

    /// Every date from `start` to `end`, both inclusive.
    async fn get_range_axis(&self, start: NaiveDate, end: NaiveDate) -> Result<DateAxis>;

    /// All rooms with their bookings, in display order.
    async fn get_room_bookings(&self) -> Result<Vec<Room>>;

    /// `Ok(None)` if no booking with this id exists (any more).
    async fn find_booking(&self, id: BookingId) -> Result<Option<BookingSummary>>;

    /// Room records whose name is one of `names`. Unknown names are skipped.
    async fn find_rooms_by_name(&self, names: &[String]) -> Result<Vec<RoomRef>>;
}
