use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::booking::room::Room;

/// `tracing` target for structured dashboard events (stats refreshes, dispatched actions).
pub const ANALYTICS_TARGET: &str = "dashboard_analytics";

/// Headline numbers shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OccupancyStats {
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub booked_rooms: usize,

    /// Booked rooms as a rounded percentage of all rooms, 0 without rooms.
    pub occupancy_rate: u32,
}

impl OccupancyStats {
    /// Counts rooms holding a booking on `today` as booked and the rest as available.
    pub fn compute(rooms: &[Room], today: NaiveDate) -> Self {
        let total_rooms = rooms.len();
        let booked_rooms = rooms.iter().filter(|room| room.is_occupied_on(today)).count();
        let available_rooms = total_rooms - booked_rooms;

        let occupancy_rate = if total_rooms > 0 { ((booked_rooms as f64 / total_rooms as f64) * 100.0).round() as u32 } else { 0 };

        let stats = OccupancyStats { total_rooms, available_rooms, booked_rooms, occupancy_rate };

        tracing::info!(
            target: ANALYTICS_TARGET,
            Today = %today,
            TotalRooms = stats.total_rooms,
            AvailableRooms = stats.available_rooms,
            BookedRooms = stats.booked_rooms,
            OccupancyRate = stats.occupancy_rate,
            "Occupancy stats refreshed"
        );

        stats
    }
}
