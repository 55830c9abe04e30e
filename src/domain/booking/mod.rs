pub mod booking;
pub mod record;
pub mod room;
