//! Coffee entity - Entità caffè con identificatore univoco generato

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Coffee {
    /* se vogliamo rinominare campi usiamo la macro
     * #[serde(rename = "coffeeId")]
     */
    pub id: String,
    pub name: String,
}

impl Coffee {
    /// Create a coffee with a freshly generated UUIDv4 identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    /// Create a coffee with a caller-supplied identifier
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Nomi dei caffè caricati all'avvio (stesso seed del tutorial originale)
pub const SEED_COFFEE_NAMES: [&str; 4] = [
    "Cafe Cereza",
    "Cafe Ganador",
    "Cafe Lareno",
    "Cafe Tres Pontas",
];
