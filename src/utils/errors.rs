//! Sistema de manejo de errores
//!
//! Este módulo define los errores del servicio y su conversión a la
//! respuesta HTTP con el sobre `{ success, data }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::dto::response_dto::{ApiResponse, ErrorMessage};

const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";
const INVALID_BODY_MESSAGE: &str = "Validation error";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{entity} with id {id} does not exist")]
    NotFound { entity: &'static str, id: String },

    /// El código generado ya está registrado en el almacén
    #[error("{entity} code {code} is already registered")]
    CodeConflict { entity: &'static str, code: String },

    /// Cuerpo JSON ausente, mal formado o con campos de tipo incorrecto
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Conversión de tipos fallida (ej. fecha mal formada)
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound { entity, id: id.into() }
    }

    pub fn code_conflict(entity: &'static str, code: impl Into<String>) -> Self {
        AppError::CodeConflict { entity, code: code.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::CodeConflict { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            // Los errores de conversión salen por el manejador genérico
            AppError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Construir el objeto de error que viaja en `data`
    pub fn to_error_message(&self) -> ErrorMessage {
        let status = self.status_code();
        let message = match self {
            AppError::NotFound { entity, .. } => format!("{} not found", entity),
            AppError::CodeConflict { entity, .. } => format!("{} code already exists", entity),
            AppError::InvalidBody(_) => INVALID_BODY_MESSAGE.to_string(),
            AppError::Validation(_) | AppError::Database(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };
        let details = match self {
            AppError::InvalidBody(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Database(e) => e.to_string(),
            other => other.to_string(),
        };

        ErrorMessage {
            error_code: status.as_u16(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("❌ {}", self);
        } else {
            warn!("⚠️ {}", self);
        }

        (status, Json(ApiResponse::failure(self.to_error_message()))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
