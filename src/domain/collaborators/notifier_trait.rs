use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Notification { title: title.into(), message: message.into(), severity }
    }

    pub fn booking_not_found() -> Self {
        Notification::new("Error", "Booking not found!", Severity::Danger)
    }

    pub fn invalid_date_range() -> Self {
        Notification::new(
            "Invalid Date Range",
            "Checkout date must be the same as or later than the check-in date.\n\n\
             Please select the table cells correctly:\n\
             - First click: Check-in date\n\
             - Second click: Check-out date",
            Severity::Warning,
        )
    }

    pub fn room_not_found() -> Self {
        Notification::new("Room Not Found", "Room not found!", Severity::Warning)
    }
}

/// Shows notifications to the user. Showing never fails from the dashboard's view.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn show(&self, notification: Notification);
}
