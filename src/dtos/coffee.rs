//! Coffee DTOs - Data Transfer Objects per i caffè

use crate::entities::Coffee;
use serde::{Deserialize, Serialize};
use validator::Validate;

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CoffeeDTO {
    pub id: String,
    pub name: String,
}

impl From<Coffee> for CoffeeDTO {
    fn from(value: Coffee) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// DTO per creare (o sostituire) un caffè: l'id è opzionale,
/// se assente viene generato dallo store; se presente non può essere vuoto.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateCoffeeDTO {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

impl CreateCoffeeDTO {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}
