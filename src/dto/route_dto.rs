use serde::{Deserialize, Serialize};

use crate::models::route::ZoneOrder;

// Request para crear o actualizar una ruta de distribución
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRouteRequest {
    pub organization_id: String,
    pub route_name: String,
    #[serde(default)]
    pub zones: Vec<ZoneOrder>,
    #[serde(default)]
    pub total_estimated_duration: i32,
    pub responsible_user_id: Option<String>,
}
