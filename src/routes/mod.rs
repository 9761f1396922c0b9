use axum::{
    Router,
    routing::get,
};

use crate::state::AppState;

pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod health;
pub mod history;
pub mod pages;

// Routes without state; it is provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(health::health_check))
        .merge(auth::router())
        .merge(catalog::router())
        .merge(favorites::router())
        .merge(history::router())
        .fallback(pages::not_found)
}
