//! SqliteCoffeeStore - Backend persistente su SQLite
//!
//! Una sola tabella `coffees(id TEXT PRIMARY KEY, name TEXT NOT NULL)`; lo
//! schema vive in `migrations/`. Le query usano l'API runtime di sqlx (niente
//! macro compile-time: il crate deve compilare anche senza database attivo).

use super::traits::{CoffeeStore, StoreError};
use crate::dtos::CreateCoffeeDTO;
use crate::entities::Coffee;
use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SqliteCoffeeStore {
    connection_pool: SqlitePool,
}

impl SqliteCoffeeStore {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    // Inserimento condiviso tra create e il ramo "absent" di upsert.
    // L'executor può essere il pool oppure una transazione già aperta.
    async fn insert_record(
        executor: impl sqlx::SqliteExecutor<'_>,
        data: &CreateCoffeeDTO,
    ) -> Result<Coffee, StoreError> {
        let id = match &data.id {
            Some(id) if id.is_empty() => return Err(StoreError::EmptyId),
            Some(id) => id.clone(),
            None => Uuid::new_v4().to_string(),
        };

        let result = sqlx::query("INSERT INTO coffees (id, name) VALUES (?, ?)")
            .bind(&id)
            .bind(&data.name)
            .execute(executor)
            .await;

        match result {
            Ok(_) => Ok(Coffee::with_id(id, data.name.clone())),
            // violazione della PRIMARY KEY -> id già in uso
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::Conflict { id })
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl CoffeeStore for SqliteCoffeeStore {
    async fn list_all(&self) -> Result<Vec<Coffee>, StoreError> {
        // rowid riflette l'ordine di inserimento, come il Vec in memoria
        let coffees = sqlx::query_as::<_, Coffee>("SELECT id, name FROM coffees ORDER BY rowid")
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(coffees)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>, StoreError> {
        let coffee = sqlx::query_as::<_, Coffee>("SELECT id, name FROM coffees WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(coffee)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Coffee>, StoreError> {
        // nomi non univoci: vince la prima riga in ordine di rowid
        let coffee = sqlx::query_as::<_, Coffee>(
            "SELECT id, name FROM coffees WHERE name = ? ORDER BY rowid LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(coffee)
    }

    async fn create(&self, data: &CreateCoffeeDTO) -> Result<Coffee, StoreError> {
        Self::insert_record(&self.connection_pool, data).await
    }

    async fn create_batch(&self, data: &[CreateCoffeeDTO]) -> Result<Vec<Coffee>, StoreError> {
        // inserimenti indipendenti, niente transazione: gli elementi inseriti
        // prima di un conflitto restano nel database
        let mut stored = Vec::with_capacity(data.len());
        for dto in data {
            stored.push(self.create(dto).await?);
        }
        Ok(stored)
    }

    async fn upsert(
        &self,
        id: &str,
        data: &CreateCoffeeDTO,
    ) -> Result<(Coffee, bool), StoreError> {
        // find e write nella stessa transazione: un delete o un create
        // concorrente tra i due statement non può più produrre un lost
        // update riportato come sostituzione riuscita
        let mut tx = self.connection_pool.begin().await?;

        let existing = sqlx::query_as::<_, Coffee>("SELECT id, name FROM coffees WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let outcome = if existing.is_some() {
            // sostituzione: l'id memorizzato è sempre quello del path
            sqlx::query("UPDATE coffees SET name = ? WHERE id = ?")
                .bind(&data.name)
                .bind(id)
                .execute(&mut *tx)
                .await?;

            (Coffee::with_id(id, data.name.clone()), false)
        } else {
            (Self::insert_record(&mut *tx, data).await?, true)
        };

        tx.commit().await?;
        Ok(outcome)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM coffees WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
