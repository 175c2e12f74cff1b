//! Modelo de DistributionSchedule
//!
//! Horario de distribución de una zona. Es solo un registro de datos:
//! nada se ejecuta en función de estos horarios.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::schedule_dto::DistributionScheduleRequest;
use crate::models::entity::Entity;
use crate::models::status::EntityStatus;
use crate::utils::errors::AppResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSchedule {
    pub id: String,
    pub organization_id: String,
    pub schedule_code: String,
    pub zone_id: String,
    pub schedule_name: String,
    pub days_of_week: Vec<String>,
    pub start_time: String, // formato: "HH:mm"
    pub end_time: String,   // formato: "HH:mm"
    pub duration_hours: i32,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
}

impl Entity for DistributionSchedule {
    type Request = DistributionScheduleRequest;

    const KIND: &'static str = "Schedule";
    const CODE_PREFIX: &'static str = "HOR";

    fn from_request(
        id: String,
        code: String,
        created_at: DateTime<Utc>,
        request: Self::Request,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            organization_id: request.organization_id,
            schedule_code: code,
            zone_id: request.zone_id,
            schedule_name: request.schedule_name,
            days_of_week: request.days_of_week,
            start_time: request.start_time,
            end_time: request.end_time,
            duration_hours: request.duration_hours,
            status: EntityStatus::Active,
            created_at,
        })
    }

    fn apply_update(&mut self, request: Self::Request) -> AppResult<()> {
        self.organization_id = request.organization_id;
        self.zone_id = request.zone_id;
        self.schedule_name = request.schedule_name;
        self.days_of_week = request.days_of_week;
        self.start_time = request.start_time;
        self.end_time = request.end_time;
        self.duration_hours = request.duration_hours;
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.schedule_code
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }

    fn set_status(&mut self, status: EntityStatus) {
        self.status = status;
    }
}
