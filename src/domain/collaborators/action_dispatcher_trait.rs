use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::booking::room::RoomRef;
use crate::domain::utils::id::BookingId;
use crate::error::Result;

/// One prefilled room line of the booking create form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomLineEntry {
    pub room: RoomRef,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub night_count: i64,
}

/// Values handed to the create form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BookingPrefill {
    pub room_lines: Vec<RoomLineEntry>,
}

/// Opens booking records in the host application's form views.
#[async_trait]
pub trait ActionDispatcher: Send + Sync {
    async fn open_record_for_view(&self, booking_id: BookingId) -> Result<()>;

    async fn open_record_for_edit(&self, booking_id: BookingId) -> Result<()>;

    async fn open_record_create_form(&self, prefill: BookingPrefill) -> Result<()>;
}
