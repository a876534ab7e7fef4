//! Services module - Coordinatore per i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica risorsa.

pub mod coffee;

// Re-exports per facilitare l'import
pub use coffee::{
    delete_coffee, get_coffee_by_id, get_coffee_by_name, get_coffees, post_coffee, post_coffees,
    put_coffee,
};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
