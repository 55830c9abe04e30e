pub mod date_axis;
pub mod quick_range;
pub mod stay;
