use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::catalog::CatalogError;
use crate::models::Showtime;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/{id}/showtimes", get(movie_showtimes))
}

#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    pub query: Option<String>,
}

// GET /api/movies?query=...
async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MoviesQuery>,
) -> impl IntoResponse {
    let term = params.query.unwrap_or_default().trim().to_lowercase();
    let movies: Vec<_> = state
        .catalog
        .movies()
        .await
        .into_iter()
        .filter(|m| term.is_empty() || m.title.to_lowercase().contains(&term))
        .collect();

    let count = movies.len();
    Json(json!({
        "success": true,
        "movies": movies,
        "count": count,
    }))
}

#[derive(Debug, Serialize)]
struct ShowtimeResponse {
    #[serde(flatten)]
    showtime: Showtime,
    /// Occupancy badge, 0..=100.
    occupancy: u32,
}

// GET /api/movies/{id}/showtimes
async fn movie_showtimes(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let showtimes = state
        .catalog
        .showtimes_for_movie(&movie_id)
        .await
        .map_err(|e| match e {
            CatalogError::MovieNotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        })?;

    let showtimes: Vec<ShowtimeResponse> = showtimes
        .into_iter()
        .map(|s| ShowtimeResponse {
            occupancy: s.occupancy_percent(),
            showtime: s,
        })
        .collect();

    Ok(Json(json!({
        "success": true,
        "showtimes": showtimes,
    })))
}
