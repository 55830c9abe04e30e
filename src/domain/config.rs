use chrono::Weekday;

use crate::api::config_dto::DashboardConfigDto;
use crate::domain::booking::booking::BookingState;
use crate::error::{Error, Result};
use crate::loader::parser::parse_json_file;

pub const DEFAULT_TITLE: &str = "Room Booking Dashboard";
pub const DEFAULT_EDIT_CAPABILITY: &str = "hotel_reservation_dashboard.booking_edit_dashboard_access";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub title: String,

    /// Users holding this capability open existing bookings editable, everyone else read-only.
    pub edit_capability: String,

    /// First day of the week for the "this week" quick range.
    pub week_start: Weekday,

    /// Booking states that occupy a room on the grid.
    pub occupied_states: Vec<BookingState>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            title: DEFAULT_TITLE.to_string(),
            edit_capability: DEFAULT_EDIT_CAPABILITY.to_string(),
            week_start: Weekday::Sun,
            occupied_states: vec![BookingState::Reserved, BookingState::CheckIn],
        }
    }
}

impl DashboardConfig {
    pub fn from_dto(dto: DashboardConfigDto) -> Result<Self> {
        let defaults = DashboardConfig::default();

        let week_start = match dto.week_start {
            Some(day) => day.parse::<Weekday>().map_err(|_| Error::ValidationError(format!("Unknown week start day '{}'", day)))?,
            None => defaults.week_start,
        };

        let occupied_states = match dto.occupied_states {
            Some(states) => states.iter().map(|s| parse_booking_state(s)).collect::<Result<Vec<_>>>()?,
            None => defaults.occupied_states,
        };

        Ok(DashboardConfig {
            title: dto.title.unwrap_or(defaults.title),
            edit_capability: dto.edit_capability.unwrap_or(defaults.edit_capability),
            week_start,
            occupied_states,
        })
    }

    /// Loads the configuration from a JSON file.
    pub fn load(file_path: &str) -> Result<Self> {
        let dto: DashboardConfigDto = parse_json_file(file_path)?;
        let config = Self::from_dto(dto)?;
        log::info!("Loaded dashboard configuration from '{}'.", file_path);
        Ok(config)
    }
}

pub fn parse_booking_state(value: &str) -> Result<BookingState> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| Error::ValidationError(format!("Unknown booking state '{}'", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parser::parse_json_str;

    #[test]
    fn empty_document_yields_defaults() {
        let dto: DashboardConfigDto = parse_json_str("{}").unwrap();
        assert_eq!(DashboardConfig::from_dto(dto).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let dto: DashboardConfigDto =
            parse_json_str(r#"{ "title": "Front Desk", "weekStart": "monday", "occupiedStates": ["reserved", "check_in", "check_out"] }"#).unwrap();
        let config = DashboardConfig::from_dto(dto).unwrap();

        assert_eq!(config.title, "Front Desk");
        assert_eq!(config.week_start, Weekday::Mon);
        assert_eq!(config.occupied_states, vec![BookingState::Reserved, BookingState::CheckIn, BookingState::CheckOut]);
        assert_eq!(config.edit_capability, DEFAULT_EDIT_CAPABILITY);
    }

    #[test]
    fn unknown_values_are_rejected() {
        let dto = DashboardConfigDto { week_start: Some("someday".to_string()), ..Default::default() };
        assert!(matches!(DashboardConfig::from_dto(dto), Err(Error::ValidationError(_))));

        assert!(parse_booking_state("archived").is_err());
        assert_eq!(parse_booking_state("check_in").unwrap(), BookingState::CheckIn);
    }
}
