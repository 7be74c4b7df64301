use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::booking::seat_map;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/showtimes/{id}/seats", get(showtime_seats))
        .route("/showtimes/{id}/ticket-types", get(showtime_ticket_types))
        .route("/products", get(list_products))
}

// GET /api/showtimes/{id}/seats
//
// Seat-map projection with an empty selection set: selection is client
// state, the server only knows the catalog.
async fn showtime_seats(
    State(state): State<Arc<AppState>>,
    Path(showtime_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let seats = state
        .catalog
        .seats_for_showtime(&showtime_id)
        .await
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    let map = seat_map(&seats, &[]);
    Ok(Json(json!({
        "success": true,
        "seatMap": map,
        "maxSelections": state.config.booking.max_seat_selections,
    })))
}

// GET /api/showtimes/{id}/ticket-types
async fn showtime_ticket_types(
    State(state): State<Arc<AppState>>,
    Path(showtime_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    // Ticket pricing is cinema-wide, but the lookup still validates
    // the showtime the caller is booking.
    state
        .catalog
        .seats_for_showtime(&showtime_id)
        .await
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    Ok(Json(json!({
        "success": true,
        "ticketTypes": state.catalog.ticket_types().await,
    })))
}

// GET /api/products
async fn list_products(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "products": state.catalog.products().await,
    }))
}
