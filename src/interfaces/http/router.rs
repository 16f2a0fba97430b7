//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::ReservationRepository;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::health::handlers as health;
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::reservations::dto::{
    CreateReservationRequest, ReservationDto, UpdateReservationRequest,
};
use crate::interfaces::http::modules::reservations::handlers as reservations;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Reservas
        reservations::create_reservation,
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::update_reservation,
        reservations::delete_reservation,
        reservations::list_by_hotel,
        reservations::list_by_date_range,
        reservations::list_by_room_type,
        reservations::list_by_status,
        reservations::list_by_guest_count,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Reservas
            ReservationDto,
            CreateReservationRequest,
            UpdateReservationRequest,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Reservas", description = "Hotel reservation CRUD and filter queries"),
    ),
    info(
        title = "API de Reservas Hoteleras",
        version = "1.0.0",
        description = "Documentación de la API para la gestión de reservas en hoteles."
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(repo: Arc<dyn ReservationRepository>) -> Router {
    let reservation_state = reservations::ReservationAppState { repo: repo.clone() };

    let health_state = health::HealthState {
        repo,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Reservation routes
    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/{id}",
            get(reservations::get_reservation)
                .put(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        )
        .route("/hotel/{hotel}", get(reservations::list_by_hotel))
        .route("/fecha/{start}/{end}", get(reservations::list_by_date_range))
        .route("/tipo/{room_type}", get(reservations::list_by_room_type))
        .route("/estado/{status}", get(reservations::list_by_status))
        .route("/huespedes/{count}", get(reservations::list_by_guest_count))
        .with_state(reservation_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Reservas
        .nest("/api/reservas", reservation_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

// ── Tests ──────────────────────────────────────────────────────
