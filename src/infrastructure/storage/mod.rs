//! Storage implementations

mod json_file;

pub use json_file::JsonFileReservationRepository;
