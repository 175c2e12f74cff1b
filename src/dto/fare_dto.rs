use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Request para crear o actualizar una tarifa
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareRequest {
    pub organization_id: String,
    pub fare_name: String,
    pub fare_type: String, // DIARIA, SEMANAL, MENSUAL
    #[serde(with = "rust_decimal::serde::float")]
    pub fare_amount: Decimal,
}
