pub mod availability;
pub mod booking;
pub mod calendar;
pub mod clock;
pub mod collaborators;
pub mod config;
pub mod dashboard;
pub mod grid;
pub mod report;
pub mod selection;
pub mod utils;
