//! Descriptor común de las entidades del servicio
//!
//! Cada tipo de entidad (programa, ruta, horario, tarifa) declara aquí su
//! prefijo de código, su nombre, cómo se construye a partir de una solicitud
//! y cómo se sobrescriben sus campos mutables. El servicio genérico
//! `EntityService` opera únicamente a través de este trait.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::models::status::EntityStatus;
use crate::utils::errors::AppResult;

pub trait Entity: Clone + Serialize + Send + Sync + Unpin + 'static {
    /// Cuerpo de creación y de actualización completa
    type Request: DeserializeOwned + Clone + Send + Sync + 'static;

    /// Nombre usado en los mensajes de error ("Route", "Fare", ...)
    const KIND: &'static str;

    /// Prefijo del código legible ("RUT", "TAR", ...)
    const CODE_PREFIX: &'static str;

    /// Construir un registro nuevo; el estado inicial lo decide cada tipo.
    fn from_request(
        id: String,
        code: String,
        created_at: DateTime<Utc>,
        request: Self::Request,
    ) -> AppResult<Self>;

    /// Sobrescribir todos los campos mutables. id, código y createdAt no cambian.
    fn apply_update(&mut self, request: Self::Request) -> AppResult<()>;

    fn id(&self) -> &str;

    fn code(&self) -> &str;

    fn status(&self) -> &str;

    fn set_status(&mut self, status: EntityStatus);
}
