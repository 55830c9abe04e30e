use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::calendar::stay::StayRange;

/// Preset ranges offered next to the date-range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickRange {
    Today,
    Tomorrow,
    ThisWeek,
    Next7Days,
    Next30Days,
    ThisMonth,
    NextMonth,
}

impl QuickRange {
    pub fn label(&self) -> &'static str {
        match self {
            QuickRange::Today => "Today",
            QuickRange::Tomorrow => "Tomorrow",
            QuickRange::ThisWeek => "This Week",
            QuickRange::Next7Days => "Next 7 Days",
            QuickRange::Next30Days => "Next 30 Days",
            QuickRange::ThisMonth => "This Month",
            QuickRange::NextMonth => "Next Month",
        }
    }

    /// Resolves the preset relative to `today`. Weeks begin on `week_start`.
    pub fn resolve(&self, today: NaiveDate, week_start: Weekday) -> StayRange {
        match self {
            QuickRange::Today => StayRange::normalized(today, today),
            QuickRange::Tomorrow => {
                let tomorrow = today + Duration::days(1);
                StayRange::normalized(tomorrow, tomorrow)
            }
            QuickRange::ThisWeek => {
                let back = (7 + today.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
                let start = today - Duration::days(back as i64);
                StayRange::normalized(start, start + Duration::days(6))
            }
            QuickRange::Next7Days => StayRange::normalized(today, today + Duration::days(6)),
            QuickRange::Next30Days => StayRange::normalized(today, today + Duration::days(29)),
            QuickRange::ThisMonth => month_bounds(today.year(), today.month()),
            QuickRange::NextMonth => {
                if today.month() == 12 {
                    month_bounds(today.year() + 1, 1)
                } else {
                    month_bounds(today.year(), today.month() + 1)
                }
            }
        }
    }
}

fn month_bounds(year: i32, month: u32) -> StayRange {
    // Callers only pass months derived from a valid date.
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN);
    let next = if month == 12 { NaiveDate::from_ymd_opt(year + 1, 1, 1) } else { NaiveDate::from_ymd_opt(year, month + 1, 1) };
    let last = next.and_then(|d| d.pred_opt()).unwrap_or(first);

    StayRange::normalized(first, last)
}
