//! Almacén en memoria
//!
//! Se usa con `STORAGE_BACKEND=memory` y en los tests. Mantiene el orden de
//! inserción y comprueba la unicidad del código bajo el mismo candado que la
//! inserción.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::EntityStore;
use crate::models::Entity;
use crate::services::code_generator::compare_codes;
use crate::utils::errors::{AppError, AppResult};

pub struct InMemoryRepository<E> {
    records: Arc<RwLock<Vec<E>>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for InMemoryRepository<E> {
    async fn find_all(&self) -> AppResult<Vec<E>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<E>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn find_by_status(&self, status: &str) -> AppResult<Vec<E>> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| r.status() == status).cloned().collect())
    }

    async fn find_last_code(&self) -> AppResult<Option<String>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .map(|r| r.code())
            .max_by(|a, b| compare_codes(a, b))
            .map(str::to_string))
    }

    async fn insert(&self, entity: &E) -> AppResult<E> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.code() == entity.code()) {
            return Err(AppError::code_conflict(E::KIND, entity.code()));
        }
        records.push(entity.clone());
        Ok(entity.clone())
    }

    async fn update(&self, entity: &E) -> AppResult<E> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == entity.id())
            .ok_or_else(|| AppError::not_found(E::KIND, entity.id()))?;
        *slot = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(AppError::not_found(E::KIND, id));
        }
        Ok(())
    }
}
