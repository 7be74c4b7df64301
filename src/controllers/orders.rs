use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

use crate::booking::SelectionEngine;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/orders", post(create_order))
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "showtimeId")]
    pub showtime_id: String,
    #[serde(rename = "seatIds")]
    pub seat_ids: Vec<String>,
    #[serde(default)]
    pub tickets: Vec<TicketRequest>,
    #[serde(default)]
    pub concessions: Vec<ConcessionRequest>,
}

#[derive(Debug, Deserialize)]
pub struct TicketRequest {
    #[serde(rename = "ticketTypeId")]
    pub ticket_type_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct ConcessionRequest {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub quantity: u32,
}

// POST /api/orders
//
// Replays the submitted selection through a fresh engine over the
// current catalog snapshot. Seats that cannot be selected (occupied,
// disabled, unknown, over the cap) silently fail to select, and the
// reconciliation check reports the resulting mismatch as a soft
// validation outcome, exactly like the interactive flow would.
async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let seats = state
        .catalog
        .seats_for_showtime(&req.showtime_id)
        .await
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    let mut engine = SelectionEngine::new(seats, state.catalog.ticket_types().await)
        .with_max_selections(state.config.booking.max_seat_selections);

    for seat_id in &req.seat_ids {
        engine.toggle_seat(seat_id);
    }
    for ticket in &req.tickets {
        engine.set_ticket_quantity(&ticket.ticket_type_id, ticket.quantity);
    }
    for item in &req.concessions {
        match state.catalog.product(&item.product_id).await {
            Some(product) => engine.add_concession(product, item.quantity),
            // Stale cart references degrade instead of failing.
            None => warn!("ignoring unknown product {} in order", item.product_id),
        }
    }

    let verdict = engine.validate_for_checkout();
    if !verdict.is_ok() {
        return Ok((
            StatusCode::OK,
            Json(json!({
                "success": false,
                "validation": verdict,
            })),
        ));
    }

    let totals = engine.totals();
    match state.orders.submit(engine.order_summary()).await {
        Ok(receipt) => Ok((
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "order": receipt,
                "totals": totals,
            })),
        )),
        Err(e) => {
            error!("order submission failed: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
