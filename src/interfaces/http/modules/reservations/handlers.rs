//! Reservation HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::reservation::{NewReservation, ReservationFilter, ReservationPatch};
use crate::domain::{DomainError, ReservationRepository};
use crate::interfaces::http::common::ApiResponse;

use super::dto::*;

/// Application state for reservation handlers.
#[derive(Clone)]
pub struct ReservationAppState {
    pub repo: Arc<dyn ReservationRepository>,
}

// ── Error mapping ───────────────────────────────────────────────

fn error_response<T>(e: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    let status = match e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(e.to_string())))
}

// ── CRUD handlers ───────────────────────────────────────────────

#[utoipa::path(
    post,
    path = "/api/reservas",
    tag = "Reservas",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationDto>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<ReservationDto>>),
    (StatusCode, Json<ApiResponse<ReservationDto>>),
> {
    let fields = NewReservation {
        hotel: request.hotel,
        room_type: request.room_type,
        guest_count: request.guest_count,
        start_date: request.start_date,
        end_date: request.end_date,
        status: request.status,
    };

    let created = state.repo.create(fields).await.map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ReservationDto::from(created))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/reservas",
    tag = "Reservas",
    responses(
        (status = 200, description = "All reservations", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationAppState>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = state.repo.find_all().await.map_err(error_response)?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/reservas/{id}",
    tag = "Reservas",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let reservation = state.repo.find_by_id(id).await.map_err(error_response)?;

    let Some(r) = reservation else {
        return Err(error_response(DomainError::reservation_not_found(id)));
    };

    Ok(Json(ApiResponse::success(ReservationDto::from(r))))
}

#[utoipa::path(
    put,
    path = "/api/reservas/{id}",
    tag = "Reservas",
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservationRequest,
    responses(
        (status = 200, description = "Updated reservation", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let patch = ReservationPatch {
        hotel: request.hotel,
        room_type: request.room_type,
        guest_count: request.guest_count,
        start_date: request.start_date,
        end_date: request.end_date,
        status: request.status,
    };

    let updated = state.repo.update(id, patch).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(ReservationDto::from(updated))))
}

#[utoipa::path(
    delete,
    path = "/api/reservas/{id}",
    tag = "Reservas",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation deleted", body = ApiResponse<String>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<String>>)> {
    state.repo.delete(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        "Reserva eliminada correctamente".to_string(),
    )))
}

// ── Filter handlers ─────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/reservas/hotel/{hotel}",
    tag = "Reservas",
    params(("hotel" = String, Path, description = "Hotel name (case-insensitive)")),
    responses(
        (status = 200, description = "Matching reservations", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_by_hotel(
    State(state): State<ReservationAppState>,
    Path(hotel): Path<String>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = state
        .repo
        .filter_by(ReservationFilter::Hotel(hotel))
        .await
        .map_err(error_response)?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/reservas/fecha/{start}/{end}",
    tag = "Reservas",
    params(
        ("start" = String, Path, description = "Window opening date (YYYY-MM-DD)"),
        ("end" = String, Path, description = "Window closing date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Reservations fully inside the window", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_by_date_range(
    State(state): State<ReservationAppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = state
        .repo
        .filter_by(ReservationFilter::DateRange { start, end })
        .await
        .map_err(error_response)?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/reservas/tipo/{room_type}",
    tag = "Reservas",
    params(("room_type" = String, Path, description = "Room category (case-insensitive)")),
    responses(
        (status = 200, description = "Matching reservations", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_by_room_type(
    State(state): State<ReservationAppState>,
    Path(room_type): Path<String>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = state
        .repo
        .filter_by(ReservationFilter::RoomType(room_type))
        .await
        .map_err(error_response)?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/reservas/estado/{status}",
    tag = "Reservas",
    params(("status" = String, Path, description = "Booking state (case-insensitive)")),
    responses(
        (status = 200, description = "Matching reservations", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_by_status(
    State(state): State<ReservationAppState>,
    Path(status): Path<String>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = state
        .repo
        .filter_by(ReservationFilter::Status(status))
        .await
        .map_err(error_response)?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/reservas/huespedes/{count}",
    tag = "Reservas",
    params(("count" = i32, Path, description = "Exact number of guests")),
    responses(
        (status = 200, description = "Matching reservations", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_by_guest_count(
    State(state): State<ReservationAppState>,
    Path(count): Path<i32>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = state
        .repo
        .filter_by(ReservationFilter::GuestCount(count))
        .await
        .map_err(error_response)?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

// ── Tests ──────────────────────────────────────────────────────
