//! Common storage traits
//!
//! This module defines the generic interface of the coffee store,
//! implemented by both the in-memory and the SQLite backend.

use crate::dtos::CreateCoffeeDTO;
use crate::entities::Coffee;
use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by the store itself.
///
/// "Not found" is NOT an error at this layer: lookups return `Ok(None)` and
/// the HTTP layer decides the status code.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A caller-supplied id already identifies another record
    #[error("a coffee with id `{id}` already exists")]
    Conflict { id: String },

    /// A caller-supplied id is the empty string
    #[error("coffee id must not be empty")]
    EmptyId,

    /// Error bubbled up from the persistent backend
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage contract for the coffee collection.
///
/// The two backends must be interchangeable: every method has identical
/// semantics whether the records live in memory or in SQLite.
#[async_trait]
pub trait CoffeeStore: Send + Sync {
    /// Returns every record currently held, in the store's natural order
    /// (insertion order in memory, rowid order in SQLite).
    async fn list_all(&self) -> Result<Vec<Coffee>, StoreError>;

    /// Returns the record whose id matches exactly (case-sensitive),
    /// or `None` if no record matches.
    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>, StoreError>;

    /// Returns the first record whose name matches exactly, in the store's
    /// natural order, or `None` if no record matches.
    ///
    /// Names are not unique: when several records share the name, the first
    /// one in natural order wins.
    async fn find_by_name(&self, name: &str) -> Result<Option<Coffee>, StoreError>;

    /// Appends a new record to the collection.
    ///
    /// When `data` carries no id, a fresh UUIDv4 is generated. A supplied id
    /// that collides with an existing record is rejected with
    /// [`StoreError::Conflict`]; an empty supplied id is rejected with
    /// [`StoreError::EmptyId`] (every stored record has a non-empty id).
    async fn create(&self, data: &CreateCoffeeDTO) -> Result<Coffee, StoreError>;

    /// Applies [`CoffeeStore::create`] to every element, preserving input
    /// order in the returned sequence.
    ///
    /// There is no rollback: elements inserted before a conflicting one
    /// stay inserted.
    async fn create_batch(&self, data: &[CreateCoffeeDTO]) -> Result<Vec<Coffee>, StoreError>;

    /// Replace-or-create keyed on the *path* id.
    ///
    /// * If a record with `id` exists, its slot is replaced with `data` and
    ///   the stored id is forced to `id` (a diverging id inside `data` is
    ///   ignored). Returns `(record, false)`.
    /// * Otherwise delegates to [`CoffeeStore::create`]: a fresh id is
    ///   assigned when `data` carries none (the path id is NOT adopted).
    ///   Returns `(record, true)`.
    async fn upsert(
        &self,
        id: &str,
        data: &CreateCoffeeDTO,
    ) -> Result<(Coffee, bool), StoreError>;

    /// Removes the record with the given id, if any.
    ///
    /// Deleting an id with no match is a silent no-op, so the operation is
    /// idempotent.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}
