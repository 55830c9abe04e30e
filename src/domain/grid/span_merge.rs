use chrono::NaiveDate;

use crate::domain::booking::room::Room;
use crate::domain::calendar::date_axis::DateAxis;
use crate::domain::utils::id::BookingId;
use crate::error::Result;

/// One rendered cell of a room row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Available { date: NaiveDate },

    /// A booking span starting at `date` and covering `span` axis columns.
    Booked { date: NaiveDate, span: usize, booking_id: BookingId, customer_name: String },
}

impl Cell {
    pub fn date(&self) -> NaiveDate {
        match self {
            Cell::Available { date } | Cell::Booked { date, .. } => *date,
        }
    }

    /// Number of axis columns the cell covers.
    pub fn width(&self) -> usize {
        match self {
            Cell::Available { .. } => 1,
            Cell::Booked { span, .. } => *span,
        }
    }

    pub fn is_booked(&self) -> bool {
        matches!(self, Cell::Booked { .. })
    }
}

/// Merges a room's bookings over the axis into display cells.
///
/// The axis is scanned left to right. At an unvisited date the booking holding it
/// is extended over every following axis date it also holds and emitted as one
/// booked cell; a date without booking becomes one available cell. Booking days
/// outside the axis are ignored.
///
/// # Returns
/// `Error::OverlappingBookings` if two bookings of the room claim the same day,
/// since the span owner would then be ambiguous.
pub fn merge_spans(room: &Room, axis: &DateAxis) -> Result<Vec<Cell>> {
    if let Err(e) = room.ensure_no_overlaps() {
        tracing::warn!("Refusing to merge spans for room '{}': {}", room.name, e);
        return Err(e);
    }

    let dates = axis.dates();
    let mut cells = Vec::with_capacity(dates.len());
    let mut index = 0;

    while index < dates.len() {
        let date = dates[index];

        match room.booking_on(date) {
            Some(booking) => {
                let mut span = 1;
                while index + span < dates.len() && booking.contains(dates[index + span]) {
                    span += 1;
                }

                cells.push(Cell::Booked { date, span, booking_id: booking.id, customer_name: booking.customer_name.clone() });
                index += span;
            }
            None => {
                cells.push(Cell::Available { date });
                index += 1;
            }
        }
    }

    Ok(cells)
}

/// A room together with its merged cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub room_name: String,
    pub cells: Vec<Cell>,
}

/// The whole table: axis columns and one row per room, in room order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub axis: DateAxis,
    pub rows: Vec<GridRow>,
}

impl Grid {
    pub fn build(rooms: &[Room], axis: &DateAxis) -> Result<Self> {
        let rows = rooms
            .iter()
            .map(|room| Ok(GridRow { room_name: room.name.clone(), cells: merge_spans(room, axis)? }))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Built grid with {} rows over {} dates.", rows.len(), axis.len());

        Ok(Grid { axis: axis.clone(), rows })
    }

    /// The cell covering `date` in row `row`, if both exist.
    pub fn cell_at(&self, row: usize, date: NaiveDate) -> Option<&Cell> {
        let row = self.rows.get(row)?;
        let mut column = 0;

        for cell in &row.cells {
            let start = self.axis.get(column)?;
            let end = self.axis.get(column + cell.width() - 1)?;
            if start <= date && date <= end {
                return Some(cell);
            }
            column += cell.width();
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::booking::Booking;
    use crate::domain::utils::id::RoomId;
    use crate::error::Error;
    use tracing_test::traced_test;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january(from: u32, to: u32) -> DateAxis {
        DateAxis::range(date(2024, 1, from), date(2024, 1, to)).unwrap()
    }

    fn booking(id: i64, name: &str, days: &[u32]) -> Booking {
        Booking::new(BookingId::new(id), name, days.iter().map(|d| date(2024, 1, *d)))
    }

    #[test]
    fn empty_room_yields_one_available_cell_per_date() {
        let room = Room::new(RoomId::new(1), "101", vec![]);
        let cells = merge_spans(&room, &january(1, 5)).unwrap();

        assert_eq!(cells.len(), 5);
        assert!(cells.iter().all(|c| !c.is_booked()));
    }

    #[test]
    fn consecutive_booking_becomes_single_span() {
        let room = Room::new(RoomId::new(1), "101", vec![booking(7, "Ada", &[3, 4, 5])]);
        let cells = merge_spans(&room, &january(1, 7)).unwrap();

        assert_eq!(
            cells,
            vec![
                Cell::Available { date: date(2024, 1, 1) },
                Cell::Available { date: date(2024, 1, 2) },
                Cell::Booked { date: date(2024, 1, 3), span: 3, booking_id: BookingId::new(7), customer_name: "Ada".to_string() },
                Cell::Available { date: date(2024, 1, 6) },
                Cell::Available { date: date(2024, 1, 7) },
            ]
        );
        assert_eq!(cells.iter().map(Cell::width).sum::<usize>(), 7);
    }

    #[test]
    fn adjacent_bookings_stay_separate_cells() {
        let room = Room::new(RoomId::new(1), "101", vec![booking(1, "Ada", &[1, 2]), booking(2, "Bob", &[3, 4])]);
        let cells = merge_spans(&room, &january(1, 4)).unwrap();

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].width(), 2);
        assert_eq!(cells[1].width(), 2);
    }

    #[test]
    fn booking_clipped_by_axis_edges() {
        let room = Room::new(RoomId::new(1), "101", vec![booking(1, "Ada", &[1, 2, 3, 4, 5, 6])]);
        let cells = merge_spans(&room, &january(3, 8)).unwrap();

        assert_eq!(cells[0], Cell::Booked { date: date(2024, 1, 3), span: 4, booking_id: BookingId::new(1), customer_name: "Ada".to_string() });
        assert_eq!(cells.len(), 3);
    }

    #[test]
    fn gap_inside_booking_splits_the_span() {
        let room = Room::new(RoomId::new(1), "101", vec![booking(1, "Ada", &[1, 3])]);
        let cells = merge_spans(&room, &january(1, 3)).unwrap();

        assert_eq!(cells.len(), 3);
        assert!(cells[0].is_booked() && !cells[1].is_booked() && cells[2].is_booked());
    }

    #[test]
    #[traced_test]
    fn overlapping_bookings_are_refused() {
        let room = Room::new(RoomId::new(1), "101", vec![booking(1, "Ada", &[1, 2]), booking(2, "Bob", &[2, 3])]);
        let result = merge_spans(&room, &january(1, 3));

        assert!(matches!(result, Err(Error::OverlappingBookings { .. })));
        assert!(logs_contain("Refusing to merge spans for room '101'"));
    }

    #[test]
    fn grid_cell_lookup_resolves_spans() {
        let rooms = vec![Room::new(RoomId::new(1), "101", vec![booking(1, "Ada", &[2, 3])]), Room::new(RoomId::new(2), "102", vec![])];
        let grid = Grid::build(&rooms, &january(1, 4)).unwrap();

        assert!(grid.cell_at(0, date(2024, 1, 3)).is_some_and(Cell::is_booked));
        assert_eq!(grid.cell_at(0, date(2024, 1, 3)).map(Cell::date), Some(date(2024, 1, 2)));
        assert!(grid.cell_at(1, date(2024, 1, 3)).is_some_and(|c| !c.is_booked()));
        assert!(grid.cell_at(2, date(2024, 1, 1)).is_none());
        assert!(grid.cell_at(0, date(2024, 2, 1)).is_none());
    }
}
