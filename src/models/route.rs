//! Modelo de DistributionRoute
//!
//! Ruta de distribución: lista ordenada de zonas con su duración estimada.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::route_dto::DistributionRouteRequest;
use crate::models::entity::Entity;
use crate::models::status::EntityStatus;
use crate::utils::errors::AppResult;

/// Zona dentro de una ruta. El orden lo da `order`, no la posición en la lista,
/// y no se exige que sea único.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneOrder {
    pub zone_id: String,
    pub order: i32,
    pub estimated_duration: i32, // en horas
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRoute {
    pub id: String,
    pub organization_id: String,
    pub route_code: String,
    pub route_name: String,
    pub zones: Vec<ZoneOrder>,
    pub total_estimated_duration: i32, // en horas
    pub responsible_user_id: Option<String>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
}

impl Entity for DistributionRoute {
    type Request = DistributionRouteRequest;

    const KIND: &'static str = "Route";
    const CODE_PREFIX: &'static str = "RUT";

    fn from_request(
        id: String,
        code: String,
        created_at: DateTime<Utc>,
        request: Self::Request,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            organization_id: request.organization_id,
            route_code: code,
            route_name: request.route_name,
            zones: request.zones,
            total_estimated_duration: request.total_estimated_duration,
            responsible_user_id: request.responsible_user_id,
            status: EntityStatus::Active,
            created_at,
        })
    }

    fn apply_update(&mut self, request: Self::Request) -> AppResult<()> {
        self.organization_id = request.organization_id;
        self.route_name = request.route_name;
        self.zones = request.zones;
        self.total_estimated_duration = request.total_estimated_duration;
        self.responsible_user_id = request.responsible_user_id;
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.route_code
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }

    fn set_status(&mut self, status: EntityStatus) {
        self.status = status;
    }
}
