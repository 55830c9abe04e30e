use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::collaborators::notifier_trait::Severity;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write CSV report: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid ISO date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Month value is invalid: '{0}'")]
    InvalidMonth(String),

    #[error("Invalid date axis: {0}")]
    InvalidAxis(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Access check for capability '{capability}' failed: {reason}")]
    AccessCheckFailure { capability: String, reason: String },

    #[error("Room '{room}' has overlapping bookings {first} and {second} on {date}")]
    OverlappingBookings { room: String, first: i64, second: i64, date: NaiveDate },

    #[error("Room '{room}' is already booked for the selected dates. The next available date is {next_available}.")]
    RoomAlreadyBooked { room: String, next_available: NaiveDate },

    #[error("Data source request failed: {0}")]
    DataSourceError(String),

    #[error("Action dispatch failed: {0}")]
    DispatchError(String),
}

impl Error {
    /// Severity used when the error is surfaced to the user through the notifier.
    pub fn severity(&self) -> Severity {
        match self {
            Error::ValidationError(_) | Error::RoomAlreadyBooked { .. } | Error::InvalidMonth(_) => Severity::Warning,
            _ => Severity::Danger,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
