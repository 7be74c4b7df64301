pub mod admin;
pub mod movies;
pub mod orders;
pub mod showtimes;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(movies::routes())
        .merge(showtimes::routes())
        .merge(orders::routes())
        .merge(admin::routes())
}
