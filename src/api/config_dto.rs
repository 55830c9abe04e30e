use serde::{Deserialize, Serialize};

/// Dashboard configuration file. Every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfigDto {
    pub title: Option<String>,
    pub edit_capability: Option<String>,

    /// English weekday name or abbreviation, e.g. `"sunday"` or `"mon"`.
    pub week_start: Option<String>,

    /// Booking states counted as occupying a room, e.g. `["reserved", "check_in"]`.
    pub occupied_states: Option<Vec<String>>,
}
