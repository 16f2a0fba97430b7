pub mod error;
pub mod reservation;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use reservation::{
    NewReservation, Reservation, ReservationFilter, ReservationPatch, ReservationRepository,
};
