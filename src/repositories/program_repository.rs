use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::pg_repository::{PgQueryAs, PgRecord};
use crate::models::DistributionProgram;

pub const CREATE_PROGRAMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS programs (
        id TEXT PRIMARY KEY,
        organization_id TEXT NOT NULL,
        program_code TEXT NOT NULL UNIQUE,
        schedule_id TEXT NOT NULL,
        route_id TEXT NOT NULL,
        zone_id TEXT NOT NULL,
        street_id TEXT,
        program_date DATE NOT NULL,
        planned_start_time TEXT,
        planned_end_time TEXT,
        actual_start_time TEXT,
        actual_end_time TEXT,
        status TEXT NOT NULL,
        responsible_user_id TEXT,
        observations TEXT,
        created_at TIMESTAMPTZ NOT NULL
    )
"#;

impl<'r> FromRow<'r, PgRow> for DistributionProgram {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            organization_id: row.try_get("organization_id")?,
            program_code: row.try_get("program_code")?,
            schedule_id: row.try_get("schedule_id")?,
            route_id: row.try_get("route_id")?,
            zone_id: row.try_get("zone_id")?,
            street_id: row.try_get("street_id")?,
            program_date: row.try_get("program_date")?,
            planned_start_time: row.try_get("planned_start_time")?,
            planned_end_time: row.try_get("planned_end_time")?,
            actual_start_time: row.try_get("actual_start_time")?,
            actual_end_time: row.try_get("actual_end_time")?,
            status: row.try_get("status")?,
            responsible_user_id: row.try_get("responsible_user_id")?,
            observations: row.try_get("observations")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl PgRecord for DistributionProgram {
    const TABLE: &'static str = "programs";
    const CODE_COLUMN: &'static str = "program_code";

    const INSERT_SQL: &'static str = r#"
        INSERT INTO programs (id, organization_id, program_code, schedule_id, route_id, zone_id,
                              street_id, program_date, planned_start_time, planned_end_time,
                              actual_start_time, actual_end_time, status, responsible_user_id,
                              observations, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        RETURNING *
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE programs
        SET organization_id = $2, schedule_id = $3, route_id = $4, zone_id = $5,
            street_id = $6, program_date = $7, planned_start_time = $8, planned_end_time = $9,
            actual_start_time = $10, actual_end_time = $11, status = $12,
            responsible_user_id = $13, observations = $14
        WHERE id = $1
        RETURNING *
    "#;

    fn bind_insert<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id.clone())
            .bind(self.organization_id.clone())
            .bind(self.program_code.clone())
            .bind(self.schedule_id.clone())
            .bind(self.route_id.clone())
            .bind(self.zone_id.clone())
            .bind(self.street_id.clone())
            .bind(self.program_date)
            .bind(self.planned_start_time.clone())
            .bind(self.planned_end_time.clone())
            .bind(self.actual_start_time.clone())
            .bind(self.actual_end_time.clone())
            .bind(self.status.clone())
            .bind(self.responsible_user_id.clone())
            .bind(self.observations.clone())
            .bind(self.created_at)
    }

    fn bind_update<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id.clone())
            .bind(self.organization_id.clone())
            .bind(self.schedule_id.clone())
            .bind(self.route_id.clone())
            .bind(self.zone_id.clone())
            .bind(self.street_id.clone())
            .bind(self.program_date)
            .bind(self.planned_start_time.clone())
            .bind(self.planned_end_time.clone())
            .bind(self.actual_start_time.clone())
            .bind(self.actual_end_time.clone())
            .bind(self.status.clone())
            .bind(self.responsible_user_id.clone())
            .bind(self.observations.clone())
    }
}
