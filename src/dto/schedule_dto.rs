use serde::{Deserialize, Serialize};

// Request para crear o actualizar un horario de distribución
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionScheduleRequest {
    pub organization_id: String,
    pub zone_id: String,
    pub schedule_name: String,
    #[serde(default)]
    pub days_of_week: Vec<String>,
    pub start_time: String, // HH:mm
    pub end_time: String,   // HH:mm
    #[serde(default)]
    pub duration_hours: i32,
}
