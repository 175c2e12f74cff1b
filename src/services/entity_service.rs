//! Servicio genérico de entidades
//!
//! Un único servicio para programas, rutas, horarios y tarifas. Orquesta la
//! generación de código, la persistencia y los cambios de estado; lo
//! específico de cada tipo vive en su implementación de `Entity`.
//!
//! Dentro de un proceso las altas de un mismo tipo se serializan con
//! `allocation`, así cada una lee el último código ya insertado. Entre
//! procesos la unicidad la garantiza el almacén (restricción UNIQUE): la
//! alta que pierde vuelve a leer el último código y reintenta.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{Entity, EntityStatus};
use crate::repositories::EntityStore;
use crate::services::code_generator::next_code;
use crate::utils::errors::{AppError, AppResult};

/// Intentos de alta ante conflictos con otras instancias del servicio
pub const MAX_CODE_ATTEMPTS: usize = 5;

pub struct EntityService<E: Entity> {
    store: Arc<dyn EntityStore<E>>,
    /// Lectura del último código + inserción, una alta a la vez
    allocation: Arc<Mutex<()>>,
}

impl<E: Entity> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            allocation: self.allocation.clone(),
        }
    }
}

impl<E: Entity> EntityService<E> {
    pub fn new(store: Arc<dyn EntityStore<E>>) -> Self {
        Self {
            store,
            allocation: Arc::new(Mutex::new(())),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<E>> {
        self.store.find_all().await
    }

    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<E>> {
        self.store.find_by_status(status).await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<E> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(E::KIND, id))
    }

    /// Crear un registro con el siguiente código disponible
    pub async fn create(&self, request: E::Request) -> AppResult<E> {
        let _allocation = self.allocation.lock().await;

        let mut attempt = 1;
        loop {
            let last_code = self.store.find_last_code().await?;
            let code = next_code(E::CODE_PREFIX, last_code.as_deref());
            debug!("🔢 Código generado para {}: {} (intento {})", E::KIND, code, attempt);

            let entity = E::from_request(
                Uuid::new_v4().to_string(),
                code,
                Utc::now(),
                request.clone(),
            )?;

            match self.store.insert(&entity).await {
                Ok(saved) => {
                    info!("✅ {} creado con código {}", E::KIND, saved.code());
                    return Ok(saved);
                }
                Err(AppError::CodeConflict { code, .. }) if attempt < MAX_CODE_ATTEMPTS => {
                    warn!("⚠️ Código {} ya registrado, reintentando", code);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Sobrescribir todos los campos mutables de un registro existente
    pub async fn update(&self, id: &str, request: E::Request) -> AppResult<E> {
        let mut existing = self.get_by_id(id).await?;
        existing.apply_update(request)?;

        let saved = self.store.update(&existing).await?;
        info!("✏️ {} {} actualizado", E::KIND, saved.code());
        Ok(saved)
    }

    /// Borrado físico; no se revisan referencias desde otras entidades
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let existing = self.get_by_id(id).await?;
        self.store.delete(existing.id()).await?;
        info!("🗑️ {} {} eliminado", E::KIND, existing.code());
        Ok(())
    }

    pub async fn activate(&self, id: &str) -> AppResult<E> {
        self.change_status(id, EntityStatus::Active).await
    }

    pub async fn deactivate(&self, id: &str) -> AppResult<E> {
        self.change_status(id, EntityStatus::Inactive).await
    }

    async fn change_status(&self, id: &str, status: EntityStatus) -> AppResult<E> {
        let mut existing = self.get_by_id(id).await?;
        debug!("➡️ Estado actual de {} {}: {}", E::KIND, existing.code(), existing.status());

        existing.set_status(status);
        let saved = self.store.update(&existing).await?;
        info!("🔁 {} {} ahora {}", E::KIND, saved.code(), saved.status());
        Ok(saved)
    }
}
