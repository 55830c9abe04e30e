use chrono::{Duration, NaiveDate};
use std::ops::RangeInclusive;

use crate::domain::booking::room::Room;
use crate::domain::calendar::stay::StayRange;
use crate::error::{Error, Result};

/// Rooms within the row span that have no booked day inside `stay`.
///
/// This checks the rooms already fetched for display only; bookings made
/// elsewhere since the last fetch are not seen. Rows past the end of `rooms`
/// are ignored.
pub fn available_rooms<'a>(rooms: &'a [Room], rows: RangeInclusive<usize>, stay: &StayRange) -> Vec<&'a Room> {
    let mut eligible = Vec::new();

    for row in rows {
        let Some(room) = rooms.get(row) else {
            log::warn!("Row {} is outside the {} loaded rooms, skipping.", row, rooms.len());
            break;
        };

        if room.is_available_for(stay) {
            log::debug!("Room '{}' is available from {} to {}.", room.name, stay.checkin, stay.checkout);
            eligible.push(room);
        } else {
            log::info!("Room '{}' is not available in the selected date range.", room.name);
        }
    }

    eligible
}

/// Checks a new booking line for `room` against its existing bookings.
///
/// Bookings conflict on their booked days only, so free days between two lines
/// of the same booking stay bookable, as on the grid.
///
/// # Returns
/// - `Error::ValidationError` if checkout lies before checkin.
/// - `Error::RoomAlreadyBooked` if a booked day falls inside the stay; the next
///   available date is the first free day after the latest booked day in the stay.
pub fn check_room_line(room: &Room, checkin: NaiveDate, checkout: NaiveDate) -> Result<StayRange> {
    let stay = StayRange::new(checkin, checkout)?;

    let latest_booked_day = room.bookings.iter().filter_map(|b| b.dates.range(stay.checkin..=stay.checkout).next_back().copied()).max();

    let Some(latest_booked_day) = latest_booked_day else {
        return Ok(stay);
    };

    let mut next_available = latest_booked_day + Duration::days(1);
    while room.is_occupied_on(next_available) {
        next_available = next_available + Duration::days(1);
    }

    log::info!("Room '{}' is booked on {} within {} - {}.", room.name, latest_booked_day, stay.checkin, stay.checkout);
    Err(Error::RoomAlreadyBooked { room: room.name.clone(), next_available })
}
