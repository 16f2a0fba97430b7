//! # API de Reservas Hoteleras
//!
//! REST service for managing hotel room reservations backed by a flat
//! JSON file.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, errors and repository traits
//! - **infrastructure**: External concerns (JSON file storage)
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML application configuration
//! - **shared**: Cross-cutting support (graceful shutdown)

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export storage types for easy access
pub use infrastructure::JsonFileReservationRepository;

// Re-export API router
pub use interfaces::create_api_router;
