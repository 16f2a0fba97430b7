//! Reservation DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::reservation::Reservation;

/// Request to create a new reservation
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    /// Hotel name
    pub hotel: String,
    /// Room category, e.g. "doble" or "suite"
    pub room_type: String,
    /// Number of guests
    pub guest_count: i32,
    /// Check-in date (`YYYY-MM-DD`)
    pub start_date: String,
    /// Check-out date (`YYYY-MM-DD`)
    pub end_date: String,
    /// Booking state, e.g. "confirmada"
    pub status: String,
}

/// Partial update for an existing reservation.
///
/// Only the provided fields change. The reservation ID is assigned at
/// creation and cannot be updated; an `id` member in the body is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReservationRequest {
    pub hotel: Option<String>,
    pub room_type: Option<String>,
    pub guest_count: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

/// Reservation details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub hotel: String,
    pub room_type: String,
    pub guest_count: i32,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            hotel: r.hotel,
            room_type: r.room_type,
            guest_count: r.guest_count,
            start_date: r.start_date,
            end_date: r.end_date,
            status: r.status,
        }
    }
}
