use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::pg_repository::{PgQueryAs, PgRecord};
use crate::models::{DistributionSchedule, EntityStatus};

pub const CREATE_SCHEDULES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS schedules (
        id TEXT PRIMARY KEY,
        organization_id TEXT NOT NULL,
        schedule_code TEXT NOT NULL UNIQUE,
        zone_id TEXT NOT NULL,
        schedule_name TEXT NOT NULL,
        days_of_week TEXT[] NOT NULL DEFAULT '{}',
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        duration_hours INTEGER NOT NULL DEFAULT 0,
        status TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )
"#;

impl<'r> FromRow<'r, PgRow> for DistributionSchedule {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;

        Ok(Self {
            id: row.try_get("id")?,
            organization_id: row.try_get("organization_id")?,
            schedule_code: row.try_get("schedule_code")?,
            zone_id: row.try_get("zone_id")?,
            schedule_name: row.try_get("schedule_name")?,
            days_of_week: row.try_get("days_of_week")?,
            start_time: row.try_get("start_time")?,
            end_time: row.try_get("end_time")?,
            duration_hours: row.try_get("duration_hours")?,
            status: status
                .parse::<EntityStatus>()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl PgRecord for DistributionSchedule {
    const TABLE: &'static str = "schedules";
    const CODE_COLUMN: &'static str = "schedule_code";

    const INSERT_SQL: &'static str = r#"
        INSERT INTO schedules (id, organization_id, schedule_code, zone_id, schedule_name,
                               days_of_week, start_time, end_time, duration_hours, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE schedules
        SET organization_id = $2, zone_id = $3, schedule_name = $4, days_of_week = $5,
            start_time = $6, end_time = $7, duration_hours = $8, status = $9
        WHERE id = $1
        RETURNING *
    "#;

    fn bind_insert<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id.clone())
            .bind(self.organization_id.clone())
            .bind(self.schedule_code.clone())
            .bind(self.zone_id.clone())
            .bind(self.schedule_name.clone())
            .bind(self.days_of_week.clone())
            .bind(self.start_time.clone())
            .bind(self.end_time.clone())
            .bind(self.duration_hours)
            .bind(self.status.as_str())
            .bind(self.created_at)
    }

    fn bind_update<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id.clone())
            .bind(self.organization_id.clone())
            .bind(self.zone_id.clone())
            .bind(self.schedule_name.clone())
            .bind(self.days_of_week.clone())
            .bind(self.start_time.clone())
            .bind(self.end_time.clone())
            .bind(self.duration_hours)
            .bind(self.status.as_str())
    }
}
