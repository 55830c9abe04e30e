pub mod console;
pub mod in_memory_hotel;
