use chrono::NaiveDate;

use crate::domain::booking::booking::Booking;
use crate::domain::calendar::stay::StayRange;
use crate::domain::utils::id::RoomId;
use crate::error::{Error, Result};

/// A room row of the dashboard with its bookings in data-source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub bookings: Vec<Booking>,
}

/// Reference to a room record, as returned by a lookup by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct RoomRef {
    #[serde(serialize_with = "serialize_room_id")]
    pub id: RoomId,
    pub name: String,
}

fn serialize_room_id<S: serde::Serializer>(id: &RoomId, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i64(id.value())
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>, bookings: Vec<Booking>) -> Self {
        Room { id, name: name.into(), bookings }
    }

    /// First booking (in data-source order) that holds `date`.
    pub fn booking_on(&self, date: NaiveDate) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.contains(date))
    }

    pub fn is_occupied_on(&self, date: NaiveDate) -> bool {
        self.booking_on(date).is_some()
    }

    /// A room is available for a range iff none of its bookings has a day inside it.
    pub fn is_available_for(&self, range: &StayRange) -> bool {
        !self.bookings.iter().any(|b| b.has_date_in(range))
    }

    /// Checks that no two bookings of this room claim the same day.
    ///
    /// # Returns
    /// `Error::OverlappingBookings` naming the first conflicting pair.
    pub fn ensure_no_overlaps(&self) -> Result<()> {
        for (i, first) in self.bookings.iter().enumerate() {
            for second in &self.bookings[i + 1..] {
                if let Some(date) = first.shared_date(second) {
                    return Err(Error::OverlappingBookings { room: self.name.clone(), first: first.id.value(), second: second.id.value(), date });
                }
            }
        }
        Ok(())
    }
}
