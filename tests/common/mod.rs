use axum_test::TestServer;
use coffeehouse::core::AppState;
use coffeehouse::repositories::seed_default_coffees;
use std::sync::Arc;

/// Crea un AppState in memoria per i test
pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::in_memory())
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = coffeehouse::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Crea un TestServer in memoria già popolato con i quattro caffè di default
pub async fn create_seeded_test_server() -> TestServer {
    let state = create_test_state();
    seed_default_coffees(state.store.as_ref())
        .await
        .expect("Failed to seed test store");
    create_test_server(state)
}
