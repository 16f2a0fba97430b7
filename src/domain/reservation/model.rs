//! Reservation domain model

use serde::{Deserialize, Serialize};

/// A hotel room reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique reservation ID
    pub id: i32,
    /// Hotel the room belongs to
    pub hotel: String,
    /// Room category, e.g. "doble" or "suite"
    pub room_type: String,
    /// Number of guests the booking covers
    pub guest_count: i32,
    /// Check-in date (ISO 8601, `YYYY-MM-DD`)
    pub start_date: String,
    /// Check-out date (ISO 8601, `YYYY-MM-DD`)
    pub end_date: String,
    /// Booking state, e.g. "confirmada" or "cancelada"
    pub status: String,
}

/// Field values for a reservation that does not yet have an ID.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub hotel: String,
    pub room_type: String,
    pub guest_count: i32,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

/// Partial update for an existing reservation.
///
/// Absent fields keep their stored value. The ID is not part of the
/// patch: it is assigned at creation and never changes.
#[derive(Debug, Clone, Default)]
pub struct ReservationPatch {
    pub hotel: Option<String>,
    pub room_type: Option<String>,
    pub guest_count: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

impl Reservation {
    /// Create a reservation from an assigned ID and its field values.
    pub fn new(id: i32, fields: NewReservation) -> Self {
        Self {
            id,
            hotel: fields.hotel,
            room_type: fields.room_type,
            guest_count: fields.guest_count,
            start_date: fields.start_date,
            end_date: fields.end_date,
            status: fields.status,
        }
    }

    /// Apply a partial update, keeping stored values for absent fields.
    pub fn merge(&self, patch: ReservationPatch) -> Self {
        Self {
            id: self.id,
            hotel: patch.hotel.unwrap_or_else(|| self.hotel.clone()),
            room_type: patch.room_type.unwrap_or_else(|| self.room_type.clone()),
            guest_count: patch.guest_count.unwrap_or(self.guest_count),
            start_date: patch.start_date.unwrap_or_else(|| self.start_date.clone()),
            end_date: patch.end_date.unwrap_or_else(|| self.end_date.clone()),
            status: patch.status.unwrap_or_else(|| self.status.clone()),
        }
    }
}

/// Predicate for narrowing a reservation listing.
#[derive(Debug, Clone)]
pub enum ReservationFilter {
    /// Hotel name, compared case-insensitively.
    Hotel(String),
    /// Reservations fully contained in the date window (inclusive).
    DateRange { start: String, end: String },
    /// Room category, compared case-insensitively.
    RoomType(String),
    /// Booking state, compared case-insensitively.
    Status(String),
    /// Exact number of guests.
    GuestCount(i32),
}

impl ReservationFilter {
    /// Whether a reservation satisfies this predicate.
    pub fn matches(&self, reservation: &Reservation) -> bool {
        match self {
            Self::Hotel(hotel) => eq_ignore_case(&reservation.hotel, hotel),
            Self::DateRange { start, end } => {
                // ISO dates compare correctly as strings
                reservation.start_date.as_str() >= start.as_str()
                    && reservation.end_date.as_str() <= end.as_str()
            }
            Self::RoomType(room_type) => eq_ignore_case(&reservation.room_type, room_type),
            Self::Status(status) => eq_ignore_case(&reservation.status, status),
            Self::GuestCount(count) => reservation.guest_count == *count,
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

// ── Tests ──────────────────────────────────────────────────────
