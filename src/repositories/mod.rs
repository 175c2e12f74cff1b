//! Repositorios de entidades
//!
//! `EntityStore` es el contrato del almacén de documentos: buscar todo, por
//! id, por estado, el último código, guardar y borrar. Hay una
//! implementación PostgreSQL (`PgRepository`) y una en memoria
//! (`InMemoryRepository`). Ambas rechazan códigos duplicados con
//! `AppError::CodeConflict`.

pub mod fare_repository;
pub mod memory_repository;
pub mod pg_repository;
pub mod program_repository;
pub mod route_repository;
pub mod schedule_repository;

use async_trait::async_trait;

use crate::models::Entity;
use crate::utils::errors::AppResult;

pub use memory_repository::InMemoryRepository;
pub use pg_repository::{PgRecord, PgRepository};

#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<E>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<E>>;

    /// Coincidencia exacta, sensible a mayúsculas
    async fn find_by_status(&self, status: &str) -> AppResult<Vec<E>>;

    /// Código más alto asignado hasta ahora
    async fn find_last_code(&self) -> AppResult<Option<String>>;

    /// Insertar un registro nuevo; falla con `CodeConflict` si el código ya existe
    async fn insert(&self, entity: &E) -> AppResult<E>;

    /// Reemplazar un registro existente; falla con `NotFound` si no existe
    async fn update(&self, entity: &E) -> AppResult<E>;

    async fn delete(&self, id: &str) -> AppResult<()>;
}
