use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;

use crate::api::hotel_dto::HotelDto;
use crate::domain::booking::booking::{Booking, BookingState, BookingSummary};
use crate::domain::booking::record::BookingRecord;
use crate::domain::booking::room::{Room, RoomRef};
use crate::domain::calendar::date_axis::DateAxis;
use crate::domain::collaborators::data_source_trait::DataSource;
use crate::domain::utils::id::{BookingId, RoomId};
use crate::error::{Error, Result};
use crate::loader::parser::parse_json_file;

/// Data source serving a hotel snapshot held in memory.
///
/// Room rows come back ordered by room name and each room's bookings by customer
/// name. Only bookings in one of the occupied states appear on the grid.
#[derive(Debug, Clone)]
pub struct InMemoryHotel {
    rooms: Vec<RoomRef>,
    records: Vec<BookingRecord>,
    occupied_states: Vec<BookingState>,
}

impl InMemoryHotel {
    pub fn new(rooms: Vec<RoomRef>, records: Vec<BookingRecord>, occupied_states: Vec<BookingState>) -> Result<Self> {
        let known: HashSet<RoomId> = rooms.iter().map(|r| r.id).collect();

        if let Some((record, line)) = records.iter().flat_map(|r| r.lines.iter().map(move |l| (r, l))).find(|(_, l)| !known.contains(&l.room_id)) {
            return Err(Error::DataSourceError(format!("Booking '{}' references unknown room {}", record.reference, line.room_id)));
        }

        Ok(InMemoryHotel { rooms, records, occupied_states })
    }

    pub fn from_dto(dto: HotelDto, occupied_states: Vec<BookingState>) -> Result<Self> {
        let rooms = dto.rooms.into_iter().map(|r| RoomRef { id: RoomId::new(r.id), name: r.name }).collect();
        let records = dto.bookings.into_iter().map(BookingRecord::from_dto).collect::<Result<Vec<_>>>()?;

        Self::new(rooms, records, occupied_states)
    }

    /// Loads a hotel snapshot from a JSON file.
    pub fn load(file_path: &str, occupied_states: Vec<BookingState>) -> Result<Self> {
        let dto: HotelDto = parse_json_file(file_path)?;
        let hotel = Self::from_dto(dto, occupied_states)?;
        log::info!("Loaded {} rooms and {} booking records from '{}'.", hotel.rooms.len(), hotel.records.len(), file_path);
        Ok(hotel)
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn room_refs(&self) -> &[RoomRef] {
        &self.rooms
    }

    fn rooms_with_bookings(&self) -> Vec<Room> {
        let mut room_refs = self.rooms.clone();
        room_refs.sort_by(|a, b| a.name.cmp(&b.name));

        room_refs
            .into_iter()
            .map(|room_ref| {
                let mut bookings: Vec<Booking> = self
                    .records
                    .iter()
                    .filter(|record| self.occupied_states.contains(&record.state))
                    .filter_map(|record| {
                        let dates = record.dates_for_room(room_ref.id);
                        (!dates.is_empty()).then(|| Booking::new(record.id, record.customer_name.clone(), dates))
                    })
                    .collect();
                bookings.sort_by(|a, b| a.customer_name.cmp(&b.customer_name));

                Room::new(room_ref.id, room_ref.name, bookings)
            })
            .collect()
    }
}

#[async_trait]
impl DataSource for InMemoryHotel {
    async fn get_month_axis(&self, year: i32, month: u32) -> Result<DateAxis> {
        DateAxis::month(year, month)
    }

    async fn get_range_axis(&self, start: NaiveDate, end: NaiveDate) -> Result<DateAxis> {
        DateAxis::range(start, end)
    }

    async fn get_room_bookings(&self) -> Result<Vec<Room>> {
        Ok(self.rooms_with_bookings())
    }

    async fn find_booking(&self, id: BookingId) -> Result<Option<BookingSummary>> {
        Ok(self.records.iter().find(|record| record.id == id).map(BookingRecord::summary))
    }

    async fn find_rooms_by_name(&self, names: &[String]) -> Result<Vec<RoomRef>> {
        Ok(self.rooms.iter().filter(|room| names.contains(&room.name)).cloned().collect())
    }
}
