use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::table::{build_view, Column, Row, TableQuery};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/movies", get(admin_movies))
        .route("/admin/showtimes", get(admin_showtimes))
        .route("/admin/products", get(admin_products))
}

/// Flatten serializable records into raw table rows. Records that do
/// not serialize to objects are skipped rather than failing the page.
fn to_rows<T: Serialize>(items: &[T]) -> Vec<Row> {
    items
        .iter()
        .filter_map(|item| serde_json::to_value(item).ok())
        .filter_map(|value| value.as_object().cloned())
        .collect()
}

fn clamp_page_size(mut query: TableQuery, max: usize) -> TableQuery {
    query.page_size = query.page_size.map(|ps| ps.clamp(1, max));
    query
}

fn movie_columns() -> Vec<Column> {
    vec![
        Column::sortable_field("Title", "title"),
        Column::sortable_field("Genre", "genre"),
        Column::computed("Duration", |row| {
            format!(
                "{} min",
                row.get("duration_minutes").and_then(Value::as_u64).unwrap_or(0)
            )
        }),
        Column::field("Rating", "rating"),
    ]
}

fn showtime_columns() -> Vec<Column> {
    vec![
        Column::sortable_field("Date", "date"),
        Column::field("Time", "time"),
        Column::field("Room", "room"),
        Column::sortable_field("Available", "available"),
        Column::computed("Occupancy", |row| {
            let total = row.get("total").and_then(Value::as_u64).unwrap_or(0);
            let available = row.get("available").and_then(Value::as_u64).unwrap_or(0);
            if total == 0 {
                "0%".to_string()
            } else {
                format!("{}%", total.saturating_sub(available) * 100 / total)
            }
        }),
    ]
}

fn product_columns() -> Vec<Column> {
    vec![
        Column::sortable_field("Name", "name"),
        // Price and discount are formatted, so neither sorts.
        Column::computed("Price", |row| {
            row.get("price")
                .and_then(Value::as_str)
                .unwrap_or("0")
                .to_string()
        }),
        Column::computed("Discount", |row| {
            match row.get("discount").and_then(Value::as_u64) {
                Some(d) if d > 0 => format!("{d}%"),
                _ => "-".to_string(),
            }
        }),
    ]
}

// GET /api/admin/movies
async fn admin_movies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> impl IntoResponse {
    let rows = to_rows(&state.catalog.movies().await);
    let query = clamp_page_size(query, state.config.table.max_page_size);
    let view = build_view(
        &movie_columns(),
        &rows,
        "id",
        &query,
        state.config.table.default_page_size,
    );
    Json(json!({ "success": true, "table": view }))
}

// GET /api/admin/showtimes
async fn admin_showtimes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> impl IntoResponse {
    let rows = to_rows(&state.catalog.showtimes().await);
    let query = clamp_page_size(query, state.config.table.max_page_size);
    let view = build_view(
        &showtime_columns(),
        &rows,
        "id",
        &query,
        state.config.table.default_page_size,
    );
    Json(json!({ "success": true, "table": view }))
}

// GET /api/admin/products
async fn admin_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> impl IntoResponse {
    let rows = to_rows(&state.catalog.products().await);
    let query = clamp_page_size(query, state.config.table.max_page_size);
    let view = build_view(
        &product_columns(),
        &rows,
        "id",
        &query,
        state.config.table.default_page_size,
    );
    Json(json!({ "success": true, "table": view }))
}

#[cfg(test)]
mod tests {
    use crate::test_util::{body_json, test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    async fn get_table(path: &str) -> serde_json::Value {
        let app = test_app();
        let response = app
            .oneshot(
                axum::http::Request::get(path)
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await["table"].clone()
    }

    #[tokio::test]
    async fn movie_table_searches_and_renders_computed_cells() {
        let table = get_table("/api/admin/movies?query=nieves").await;
        assert_eq!(table["totalRows"], 1);
        assert_eq!(table["cells"][0][0], "Blanca Nieves");
        assert_eq!(table["cells"][0][2], "109 min");
        assert_eq!(table["keys"][0], "blanca-nieves");
    }

    #[tokio::test]
    async fn showtime_table_paginates_and_windows() {
        // 3 movies x 3 showtimes = 9 rows.
        let table = get_table("/api/admin/showtimes?pageSize=4&page=3").await;
        assert_eq!(table["totalRows"], 9);
        assert_eq!(table["totalPages"], 3);
        assert_eq!(table["cells"].as_array().unwrap().len(), 1);
        assert_eq!(
            table["pageWindow"].as_array().unwrap(),
            &vec![serde_json::json!(1), serde_json::json!(2), serde_json::json!(3)]
        );
    }

    #[tokio::test]
    async fn product_table_sorts_by_name_descending() {
        let table = get_table("/api/admin/products?sort=name&dir=desc").await;
        let first = table["cells"][0][0].as_str().unwrap();
        let last = table["cells"][3][0].as_str().unwrap();
        assert!(first > last);
    }

    #[tokio::test]
    async fn sort_request_for_a_computed_column_is_ignored() {
        let unsorted = get_table("/api/admin/products").await;
        let sorted = get_table("/api/admin/products?sort=price&dir=desc").await;
        assert_eq!(unsorted["cells"], sorted["cells"]);
    }

    #[tokio::test]
    async fn empty_search_result_degrades_to_an_empty_table() {
        let table = get_table("/api/admin/movies?query=zzzzz").await;
        assert_eq!(table["totalRows"], 0);
        assert!(table["cells"].as_array().unwrap().is_empty());
        assert_eq!(table["headers"].as_array().unwrap().len(), 4);
    }
}
