//! Reservation repository contract

use async_trait::async_trait;

use crate::domain::error::DomainResult;
use crate::domain::reservation::model::{
    NewReservation, Reservation, ReservationFilter, ReservationPatch,
};

/// Persistence operations for reservations.
///
/// Implementations own ID assignment: callers hand over field values and
/// get back the stored record with its generated ID.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a new reservation and return it with its assigned ID.
    async fn create(&self, fields: NewReservation) -> DomainResult<Reservation>;

    /// All reservations in storage order.
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Look up a reservation by ID.
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// Apply a partial update to an existing reservation.
    ///
    /// Returns the updated record, or `NotFound` if the ID is unknown.
    async fn update(&self, id: i32, patch: ReservationPatch) -> DomainResult<Reservation>;

    /// Remove a reservation. Returns `NotFound` if the ID is unknown.
    async fn delete(&self, id: i32) -> DomainResult<()>;

    /// All reservations matching a filter, in storage order.
    async fn filter_by(&self, filter: ReservationFilter) -> DomainResult<Vec<Reservation>>;
}
