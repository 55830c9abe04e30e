use serde::{Deserialize, Serialize};

/// Snapshot of the hotel records the in-memory data source serves.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub rooms: Vec<RoomDto>,
    #[serde(default)]
    pub bookings: Vec<BookingRecordDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecordDto {
    pub id: i64,
    pub reference: String,
    pub customer_name: String,
    pub state: String,
    #[serde(default)]
    pub payment_state: Option<String>,
    pub lines: Vec<BookingLineDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingLineDto {
    pub room_id: i64,

    /// ISO `YYYY-MM-DD`.
    pub checkin_date: String,

    /// ISO `YYYY-MM-DD`.
    pub checkout_date: String,
}
