pub mod booking_report;
