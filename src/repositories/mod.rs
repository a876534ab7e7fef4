//! Repositories module - Coordinatore per i backend dello store
//!
//! Questo modulo organizza i backend in sotto-moduli separati. Entrambi
//! implementano lo stesso trait [`CoffeeStore`], quindi il contratto CRUD
//! resta identico sia in memoria che su SQLite.

pub mod memory;
pub mod sqlite;
pub mod traits;

// Re-esportazione per facilitare l'import
pub use memory::MemoryCoffeeStore;
pub use sqlite::SqliteCoffeeStore;
pub use traits::{CoffeeStore, StoreError};

use crate::dtos::CreateCoffeeDTO;
use crate::entities::{Coffee, SEED_COFFEE_NAMES};
use tracing::{debug, info};

/// Carica i quattro caffè del tutorial, equivalente del DataLoader originale.
///
/// Se lo store contiene già dei record il seed viene saltato: un riavvio
/// contro un database persistente non deve duplicare i dati.
pub async fn seed_default_coffees(
    store: &(impl CoffeeStore + ?Sized),
) -> Result<Vec<Coffee>, StoreError> {
    if !store.list_all().await?.is_empty() {
        debug!("Store already populated, skipping seed");
        return Ok(Vec::new());
    }

    let seed: Vec<CreateCoffeeDTO> = SEED_COFFEE_NAMES
        .iter()
        .map(|name| CreateCoffeeDTO::named(*name))
        .collect();

    let stored = store.create_batch(&seed).await?;
    info!("Seeded {} default coffees", stored.len());
    Ok(stored)
}
