use serde::{Deserialize, Serialize};

// Request para crear o actualizar un programa de distribución
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionProgramRequest {
    pub organization_id: String,
    pub schedule_id: String,
    pub route_id: String,
    pub zone_id: String,
    pub street_id: Option<String>,
    pub program_date: String, // yyyy-MM-dd
    pub planned_start_time: Option<String>,
    pub planned_end_time: Option<String>,
    pub actual_start_time: Option<String>,
    pub actual_end_time: Option<String>,
    pub status: String,
    pub responsible_user_id: Option<String>,
    pub observations: Option<String>,
}
