use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::pg_repository::{PgQueryAs, PgRecord};
use crate::models::{EntityStatus, Fare};

pub const CREATE_FARE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS fare (
        id TEXT PRIMARY KEY,
        organization_id TEXT NOT NULL,
        fare_code TEXT NOT NULL UNIQUE,
        fare_name TEXT NOT NULL,
        fare_type TEXT NOT NULL,
        fare_amount NUMERIC NOT NULL,
        status TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )
"#;

impl<'r> FromRow<'r, PgRow> for Fare {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;

        Ok(Self {
            id: row.try_get("id")?,
            organization_id: row.try_get("organization_id")?,
            fare_code: row.try_get("fare_code")?,
            fare_name: row.try_get("fare_name")?,
            fare_type: row.try_get("fare_type")?,
            fare_amount: row.try_get("fare_amount")?,
            status: status
                .parse::<EntityStatus>()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl PgRecord for Fare {
    const TABLE: &'static str = "fare";
    const CODE_COLUMN: &'static str = "fare_code";

    const INSERT_SQL: &'static str = r#"
        INSERT INTO fare (id, organization_id, fare_code, fare_name, fare_type,
                          fare_amount, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE fare
        SET organization_id = $2, fare_name = $3, fare_type = $4, fare_amount = $5, status = $6
        WHERE id = $1
        RETURNING *
    "#;

    fn bind_insert<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id.clone())
            .bind(self.organization_id.clone())
            .bind(self.fare_code.clone())
            .bind(self.fare_name.clone())
            .bind(self.fare_type.clone())
            .bind(self.fare_amount)
            .bind(self.status.as_str())
            .bind(self.created_at)
    }

    fn bind_update<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id.clone())
            .bind(self.organization_id.clone())
            .bind(self.fare_name.clone())
            .bind(self.fare_type.clone())
            .bind(self.fare_amount)
            .bind(self.status.as_str())
    }
}
