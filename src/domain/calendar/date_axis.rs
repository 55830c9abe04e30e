use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{Error, Result};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` date as exchanged with the application server.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|_| Error::InvalidDate(value.to_string()))
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parses the month picker value (`YYYY-MM`) into `(year, month)`.
pub fn parse_month_value(value: &str) -> Result<(i32, u32)> {
    let invalid = || Error::InvalidMonth(value.to_string());

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(invalid());
    }

    Ok((year, month))
}

/// The dates shown as table columns, strictly ascending and without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateAxis {
    dates: Vec<NaiveDate>,
}

impl DateAxis {
    /// Builds an axis from dates delivered by a data source.
    ///
    /// # Returns
    /// `Error::InvalidAxis` if the dates are not strictly ascending.
    pub fn new(dates: Vec<NaiveDate>) -> Result<Self> {
        if let Some(pair) = dates.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(Error::InvalidAxis(format!("{} is followed by {}", pair[0], pair[1])));
        }

        Ok(DateAxis { dates })
    }

    /// Every day of the given month.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| Error::InvalidMonth(format!("{:04}-{:02}", year, month)))?;
        let next_month = if month == 12 { NaiveDate::from_ymd_opt(year + 1, 1, 1) } else { NaiveDate::from_ymd_opt(year, month + 1, 1) };
        let last = next_month.and_then(|d| d.pred_opt()).ok_or_else(|| Error::InvalidMonth(format!("{:04}-{:02}", year, month)))?;

        Self::range(first, last)
    }

    /// Every day from `start` to `end`, both inclusive.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidAxis(format!("range end {} lies before start {}", end, start)));
        }

        let days = (end - start).num_days();
        let dates = (0..=days).map(|offset| start + Duration::days(offset)).collect();

        Ok(DateAxis { dates })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.dates.get(index).copied()
    }

    /// Column header labels: short month plus day, and the weekday (`Jan 05`, `Fri`).
    pub fn header_labels(&self) -> Vec<(String, String)> {
        self.dates.iter().map(|d| (d.format("%b %d").to_string(), d.weekday().to_string())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_axis_covers_every_day() {
        assert_eq!(DateAxis::month(2024, 2).unwrap().len(), 29);
        assert_eq!(DateAxis::month(2025, 2).unwrap().len(), 28);

        let december = DateAxis::month(2024, 12).unwrap();
        assert_eq!(december.first(), Some(date(2024, 12, 1)));
        assert_eq!(december.last(), Some(date(2024, 12, 31)));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(matches!(DateAxis::month(2024, 13), Err(Error::InvalidMonth(_))));
        assert!(matches!(DateAxis::month(2024, 0), Err(Error::InvalidMonth(_))));
    }

    #[test]
    fn range_is_inclusive_and_single_day_allowed() {
        let axis = DateAxis::range(date(2024, 1, 30), date(2024, 2, 2)).unwrap();
        assert_eq!(axis.dates(), &[date(2024, 1, 30), date(2024, 1, 31), date(2024, 2, 1), date(2024, 2, 2)]);

        assert_eq!(DateAxis::range(date(2024, 3, 3), date(2024, 3, 3)).unwrap().len(), 1);
        assert!(matches!(DateAxis::range(date(2024, 3, 3), date(2024, 3, 2)), Err(Error::InvalidAxis(_))));
    }

    #[test]
    fn unsorted_or_duplicate_dates_are_rejected() {
        assert!(DateAxis::new(vec![date(2024, 1, 2), date(2024, 1, 1)]).is_err());
        assert!(DateAxis::new(vec![date(2024, 1, 1), date(2024, 1, 1)]).is_err());
        assert!(DateAxis::new(vec![]).unwrap().is_empty());
    }

    #[test]
    fn iso_date_parsing() {
        assert_eq!(parse_iso_date(" 2024-01-03 ").unwrap(), date(2024, 1, 3));
        assert_eq!(format_iso_date(date(2024, 1, 3)), "2024-01-03");
        assert!(matches!(parse_iso_date("01/02/2024"), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn month_value_parsing() {
        assert_eq!(parse_month_value("2024-07").unwrap(), (2024, 7));
        assert!(matches!(parse_month_value(""), Err(Error::InvalidMonth(_))));
        assert!(matches!(parse_month_value("2024-13"), Err(Error::InvalidMonth(_))));
        assert!(matches!(parse_month_value("July"), Err(Error::InvalidMonth(_))));
    }

    #[test]
    fn header_labels_show_day_and_weekday() {
        let axis = DateAxis::range(date(2024, 1, 5), date(2024, 1, 5)).unwrap();
        assert_eq!(axis.header_labels(), vec![("Jan 05".to_string(), "Fri".to_string())]);
    }
}
