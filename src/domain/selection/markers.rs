use chrono::NaiveDate;

use crate::domain::grid::span_merge::Grid;
use crate::domain::selection::selection::ResolvedRange;

/// A marked cell: grid row and date.
pub type CellPosition = (usize, NaiveDate);

/// Visual selection state the UI renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMarkers {
    pub start: Option<CellPosition>,
    pub end: Option<CellPosition>,
    pub range: Vec<CellPosition>,
}

impl SelectionMarkers {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.range.is_empty()
    }

    pub fn mark_start(&mut self, row: usize, date: NaiveDate) {
        self.start = Some((row, date));
    }

    pub fn mark_end(&mut self, row: usize, date: NaiveDate) {
        self.end = Some((row, date));
    }

    /// Marks every available axis date inside the range for each row of the span.
    pub fn mark_range(&mut self, grid: &Grid, resolved: &ResolvedRange) {
        self.range.clear();

        for row in resolved.rows.clone() {
            if row >= grid.rows.len() {
                break;
            }
            for &date in grid.axis.dates() {
                if resolved.stay.contains(date) && grid.cell_at(row, date).is_some_and(|c| !c.is_booked()) {
                    self.range.push((row, date));
                }
            }
        }
    }

    /// # Returns
    /// `true` if any marker was removed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.is_empty();
        *self = SelectionMarkers::default();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::booking::Booking;
    use crate::domain::booking::room::Room;
    use crate::domain::calendar::date_axis::DateAxis;
    use crate::domain::calendar::stay::StayRange;
    use crate::domain::utils::id::{BookingId, RoomId};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn range_marks_skip_booked_cells() {
        let rooms = vec![
            Room::new(RoomId::new(1), "101", vec![Booking::new(BookingId::new(1), "Ada", [date(3)])]),
            Room::new(RoomId::new(2), "102", vec![]),
        ];
        let grid = Grid::build(&rooms, &DateAxis::range(date(1), date(5)).unwrap()).unwrap();
        let resolved = ResolvedRange { stay: StayRange::normalized(date(2), date(4)), rows: 0..=1 };

        let mut markers = SelectionMarkers::default();
        markers.mark_range(&grid, &resolved);

        assert_eq!(markers.range, vec![(0, date(2)), (0, date(4)), (1, date(2)), (1, date(3)), (1, date(4))]);
        assert!(markers.clear());
        assert!(!markers.clear());
    }
}
