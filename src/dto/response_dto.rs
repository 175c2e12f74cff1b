use serde::{Deserialize, Serialize};

// Sobre común de todas las respuestas de la API
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl ApiResponse<ErrorMessage> {
    pub fn failure(error: ErrorMessage) -> Self {
        Self {
            success: false,
            data: error,
        }
    }
}

// Objeto de error que viaja en `data` cuando success = false
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub error_code: u16,
    pub message: String,
    pub details: String,
}
