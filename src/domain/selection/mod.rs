pub mod markers;
pub mod selection;
