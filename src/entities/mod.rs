//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità (models) che rappresentano i dati gestiti
//! dallo store. Ogni entity corrisponde a una tabella nel database quando il
//! backend persistente è attivo.

pub mod coffee;

// Re-exports per facilitare l'import
pub use coffee::{Coffee, SEED_COFFEE_NAMES};
