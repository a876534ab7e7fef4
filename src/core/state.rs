//! Application State - Stato globale dell'applicazione
//!
//! Contiene lo store dei caffè dietro il trait [`CoffeeStore`], così il
//! backend (memoria o SQLite) resta intercambiabile senza toccare le route.

use crate::repositories::{CoffeeStore, MemoryCoffeeStore, SqliteCoffeeStore};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Store dei caffè, backend scelto all'avvio
    pub store: Arc<dyn CoffeeStore>,
}

impl AppState {
    /// Crea un AppState con il backend in memoria (capitolo 3)
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryCoffeeStore::new()),
        }
    }

    /// Crea un AppState con il backend SQLite (capitolo 4)
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso, con migrazioni già applicate
    pub fn with_sqlite(pool: SqlitePool) -> Self {
        Self {
            store: Arc::new(SqliteCoffeeStore::new(pool)),
        }
    }
}
