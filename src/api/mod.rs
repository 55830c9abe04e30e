pub mod config_dto;
pub mod hotel_dto;
