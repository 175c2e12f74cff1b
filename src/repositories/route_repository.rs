use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{FromRow, Row};

use super::pg_repository::{PgQueryAs, PgRecord};
use crate::models::{DistributionRoute, EntityStatus, ZoneOrder};

pub const CREATE_ROUTES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS routes (
        id TEXT PRIMARY KEY,
        organization_id TEXT NOT NULL,
        route_code TEXT NOT NULL UNIQUE,
        route_name TEXT NOT NULL,
        zones JSONB NOT NULL DEFAULT '[]'::jsonb,
        total_estimated_duration INTEGER NOT NULL DEFAULT 0,
        responsible_user_id TEXT,
        status TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )
"#;

impl<'r> FromRow<'r, PgRow> for DistributionRoute {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let zones: Json<Vec<ZoneOrder>> = row.try_get("zones")?;
        let status: String = row.try_get("status")?;

        Ok(Self {
            id: row.try_get("id")?,
            organization_id: row.try_get("organization_id")?,
            route_code: row.try_get("route_code")?,
            route_name: row.try_get("route_name")?,
            zones: zones.0,
            total_estimated_duration: row.try_get("total_estimated_duration")?,
            responsible_user_id: row.try_get("responsible_user_id")?,
            status: status
                .parse::<EntityStatus>()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl PgRecord for DistributionRoute {
    const TABLE: &'static str = "routes";
    const CODE_COLUMN: &'static str = "route_code";

    const INSERT_SQL: &'static str = r#"
        INSERT INTO routes (id, organization_id, route_code, route_name, zones,
                            total_estimated_duration, responsible_user_id, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE routes
        SET organization_id = $2, route_name = $3, zones = $4,
            total_estimated_duration = $5, responsible_user_id = $6, status = $7
        WHERE id = $1
        RETURNING *
    "#;

    fn bind_insert<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id.clone())
            .bind(self.organization_id.clone())
            .bind(self.route_code.clone())
            .bind(self.route_name.clone())
            .bind(Json(self.zones.clone()))
            .bind(self.total_estimated_duration)
            .bind(self.responsible_user_id.clone())
            .bind(self.status.as_str())
            .bind(self.created_at)
    }

    fn bind_update<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id.clone())
            .bind(self.organization_id.clone())
            .bind(self.route_name.clone())
            .bind(Json(self.zones.clone()))
            .bind(self.total_estimated_duration)
            .bind(self.responsible_user_id.clone())
            .bind(self.status.as_str())
    }
}
