//! Coffeehouse library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use self::core::{AppError, AppState, config};
pub use services::root;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/coffees", configure_coffee_routes())
        .with_state(state)
}

/// Configura le routes per la risorsa caffè
fn configure_coffee_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(get_coffees).post(post_coffee))
        .route("/batch", post(post_coffees))
        // name ha un prefisso dedicato: /coffees/{name} sarebbe ambiguo con /coffees/{id}
        .route("/name/{name}", get(get_coffee_by_name))
        .route(
            "/{id}",
            get(get_coffee_by_id)
                .put(put_coffee)
                .delete(delete_coffee),
        )
}
