use chrono::NaiveDate;
use std::ops::RangeInclusive;

use crate::domain::calendar::stay::StayRange;
use crate::error::Result;

/// The user's in-progress two-click choice of a date range and row span.
///
/// An end is only ever recorded together with a start, inside `RangeResolving`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,

    StartPicked { date: NaiveDate, row: usize },

    /// Both clicks recorded; availability check and dispatch are running.
    RangeResolving { request: RangeRequest },
}

/// The two raw clicks in the order the user made them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRequest {
    pub start_date: NaiveDate,
    pub start_row: usize,
    pub end_date: NaiveDate,
    pub end_row: usize,
}

/// A validated request: ordered dates and ordered row span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRange {
    pub stay: StayRange,
    pub rows: RangeInclusive<usize>,
}

/// What a click on an available cell did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    RangeChosen(RangeRequest),
    Reset,
}

impl RangeRequest {
    /// Validates the raw click order, then normalizes dates and rows.
    ///
    /// A checkout (second click) before the checkin (first click) is rejected
    /// before anything is reordered.
    pub fn resolve(&self) -> Result<ResolvedRange> {
        let validated = StayRange::new(self.start_date, self.end_date)?;
        let stay = StayRange::normalized(validated.checkin, validated.checkout);
        let rows = self.start_row.min(self.end_row)..=self.start_row.max(self.end_row);

        Ok(ResolvedRange { stay, rows })
    }
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// Applies a click on an available cell.
    pub fn pick(&mut self, date: NaiveDate, row: usize) -> Transition {
        match *self {
            Selection::Empty => {
                *self = Selection::StartPicked { date, row };
                Transition::Started
            }
            Selection::StartPicked { date: start_date, row: start_row } => {
                let request = RangeRequest { start_date, start_row, end_date: date, end_row: row };
                *self = Selection::RangeResolving { request };
                Transition::RangeChosen(request)
            }
            Selection::RangeResolving { .. } => {
                self.reset();
                Transition::Reset
            }
        }
    }

    /// Returns to `Empty`.
    ///
    /// # Returns
    /// `true` if there was a selection to clear.
    pub fn reset(&mut self) -> bool {
        let changed = !self.is_empty();
        *self = Selection::Empty;
        changed
    }
}
