//! MemoryCoffeeStore - Backend in memoria
//!
//! La collezione è un `Vec` protetto da un `RwLock` di tokio: lock esclusivo
//! per le mutazioni (create, upsert, delete), lock condiviso per le letture.
//! L'ordine di inserimento viene preservato.

use super::traits::{CoffeeStore, StoreError};
use crate::dtos::CreateCoffeeDTO;
use crate::entities::Coffee;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryCoffeeStore {
    coffees: RwLock<Vec<Coffee>>,
}

impl MemoryCoffeeStore {
    pub fn new() -> Self {
        Self {
            coffees: RwLock::new(Vec::new()),
        }
    }

    /// Costruisce il record da inserire: id fornito dal client oppure UUIDv4
    fn build_record(data: &CreateCoffeeDTO) -> Coffee {
        match &data.id {
            Some(id) => Coffee::with_id(id.clone(), data.name.clone()),
            None => Coffee::new(data.name.clone()),
        }
    }

    // L'inserimento vero e proprio, usato da create e dal ramo "absent" di upsert.
    // Precondizione: il chiamante detiene già il write lock.
    fn insert_locked(
        coffees: &mut Vec<Coffee>,
        data: &CreateCoffeeDTO,
    ) -> Result<Coffee, StoreError> {
        let record = Self::build_record(data);
        if record.id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        if coffees.iter().any(|c| c.id == record.id) {
            return Err(StoreError::Conflict { id: record.id });
        }
        coffees.push(record.clone());
        Ok(record)
    }
}

impl Default for MemoryCoffeeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CoffeeStore for MemoryCoffeeStore {
    async fn list_all(&self) -> Result<Vec<Coffee>, StoreError> {
        Ok(self.coffees.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>, StoreError> {
        let coffees = self.coffees.read().await;
        Ok(coffees.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Coffee>, StoreError> {
        let coffees = self.coffees.read().await;
        Ok(coffees.iter().find(|c| c.name == name).cloned())
    }

    async fn create(&self, data: &CreateCoffeeDTO) -> Result<Coffee, StoreError> {
        let mut coffees = self.coffees.write().await;
        Self::insert_locked(&mut coffees, data)
    }

    async fn create_batch(&self, data: &[CreateCoffeeDTO]) -> Result<Vec<Coffee>, StoreError> {
        // Un solo write lock per l'intero batch, niente rollback sugli
        // elementi già inseriti se uno successivo va in conflitto.
        let mut coffees = self.coffees.write().await;
        let mut stored = Vec::with_capacity(data.len());
        for dto in data {
            stored.push(Self::insert_locked(&mut coffees, dto)?);
        }
        Ok(stored)
    }

    async fn upsert(
        &self,
        id: &str,
        data: &CreateCoffeeDTO,
    ) -> Result<(Coffee, bool), StoreError> {
        let mut coffees = self.coffees.write().await;
        // l'id è univoco, quindi il primo match è anche l'unico
        if let Some(slot) = coffees.iter_mut().find(|c| c.id == id) {
            // sostituzione in place: l'id memorizzato è sempre quello del path
            *slot = Coffee::with_id(id, data.name.clone());
            return Ok((slot.clone(), false));
        }
        let record = Self::insert_locked(&mut coffees, data)?;
        Ok((record, true))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut coffees = self.coffees.write().await;
        coffees.retain(|c| c.id != id);
        Ok(())
    }
}
