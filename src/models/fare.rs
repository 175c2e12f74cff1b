//! Modelo de Fare
//!
//! Tarifa cobrada por organización.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::fare_dto::FareRequest;
use crate::models::entity::Entity;
use crate::models::status::EntityStatus;
use crate::utils::errors::AppResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fare {
    pub id: String,
    pub organization_id: String,
    pub fare_code: String,
    pub fare_name: String,
    pub fare_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub fare_amount: Decimal,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
}

impl Entity for Fare {
    type Request = FareRequest;

    const KIND: &'static str = "Fare";
    const CODE_PREFIX: &'static str = "TAR";

    fn from_request(
        id: String,
        code: String,
        created_at: DateTime<Utc>,
        request: Self::Request,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            organization_id: request.organization_id,
            fare_code: code,
            fare_name: request.fare_name,
            fare_type: request.fare_type,
            fare_amount: request.fare_amount,
            status: EntityStatus::Active,
            created_at,
        })
    }

    fn apply_update(&mut self, request: Self::Request) -> AppResult<()> {
        self.organization_id = request.organization_id;
        self.fare_name = request.fare_name;
        self.fare_type = request.fare_type;
        self.fare_amount = request.fare_amount;
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.fare_code
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }

    fn set_status(&mut self, status: EntityStatus) {
        self.status = status;
    }
}
