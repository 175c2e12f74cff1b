//! Modelo de DistributionProgram
//!
//! Programa de distribución para una fecha concreta. A diferencia del resto de
//! entidades, su estado es una etiqueta libre (PLANNED, IN_PROGRESS, COMPLETED,
//! CANCELLED...) que fija quien llama, sin reglas de transición.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::program_dto::DistributionProgramRequest;
use crate::models::entity::Entity;
use crate::models::status::EntityStatus;
use crate::utils::errors::{AppError, AppResult};

/// Formato fijo de `programDate`
pub const PROGRAM_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionProgram {
    pub id: String,
    pub organization_id: String,
    pub program_code: String,
    pub schedule_id: String,
    pub route_id: String,
    pub zone_id: String,
    pub street_id: Option<String>,
    pub program_date: NaiveDate,
    pub planned_start_time: Option<String>,
    pub planned_end_time: Option<String>,
    pub actual_start_time: Option<String>,
    pub actual_end_time: Option<String>,
    pub status: String,
    pub responsible_user_id: Option<String>,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Parsear la fecha del programa; un texto inválido hace fallar toda la operación.
pub fn parse_program_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, PROGRAM_DATE_FORMAT).map_err(|e| {
        AppError::Validation(format!("Text '{}' could not be parsed as a date: {}", value, e))
    })
}

impl Entity for DistributionProgram {
    type Request = DistributionProgramRequest;

    const KIND: &'static str = "Program";
    const CODE_PREFIX: &'static str = "PROG";

    fn from_request(
        id: String,
        code: String,
        created_at: DateTime<Utc>,
        request: Self::Request,
    ) -> AppResult<Self> {
        let program_date = parse_program_date(&request.program_date)?;

        Ok(Self {
            id,
            organization_id: request.organization_id,
            program_code: code,
            schedule_id: request.schedule_id,
            route_id: request.route_id,
            zone_id: request.zone_id,
            street_id: request.street_id,
            program_date,
            planned_start_time: request.planned_start_time,
            planned_end_time: request.planned_end_time,
            actual_start_time: request.actual_start_time,
            actual_end_time: request.actual_end_time,
            status: request.status,
            responsible_user_id: request.responsible_user_id,
            observations: request.observations,
            created_at,
        })
    }

    fn apply_update(&mut self, request: Self::Request) -> AppResult<()> {
        // Parsear antes de tocar nada para no dejar el registro a medias
        let program_date = parse_program_date(&request.program_date)?;

        self.organization_id = request.organization_id;
        self.schedule_id = request.schedule_id;
        self.route_id = request.route_id;
        self.zone_id = request.zone_id;
        self.street_id = request.street_id;
        self.program_date = program_date;
        self.planned_start_time = request.planned_start_time;
        self.planned_end_time = request.planned_end_time;
        self.actual_start_time = request.actual_start_time;
        self.actual_end_time = request.actual_end_time;
        self.status = request.status;
        self.responsible_user_id = request.responsible_user_id;
        self.observations = request.observations;
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.program_code
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: EntityStatus) {
        self.status = status.as_str().to_string();
    }
}
