//! Repositorio PostgreSQL genérico
//!
//! Las consultas de lectura y borrado son idénticas para todas las tablas; lo
//! único específico de cada entidad (SQL de INSERT/UPDATE y el orden de los
//! binds) lo aporta `PgRecord`.

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};
use std::marker::PhantomData;
use tracing::{debug, warn};

use super::EntityStore;
use crate::models::Entity;
use crate::utils::errors::{AppError, AppResult};

/// SQLSTATE de violación de restricción UNIQUE
const UNIQUE_VIOLATION: &str = "23505";

pub type PgQueryAs<'q, E> = QueryAs<'q, Postgres, E, PgArguments>;

/// Mapeo de una entidad a su tabla
pub trait PgRecord: Entity + for<'r> FromRow<'r, PgRow> {
    const TABLE: &'static str;
    const CODE_COLUMN: &'static str;
    const INSERT_SQL: &'static str;
    /// Debe filtrar por `id = $1` y terminar en `RETURNING *`
    const UPDATE_SQL: &'static str;

    fn bind_insert<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    fn bind_update<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;
}

pub struct PgRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgRepository<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for PgRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

/// SQL para el código más alto: primero por longitud para que `RUT1000` > `RUT999`
fn last_code_sql(table: &str, code_column: &str) -> String {
    format!(
        "SELECT {col} FROM {table} ORDER BY LENGTH({col}) DESC, {col} DESC LIMIT 1",
        col = code_column,
        table = table
    )
}

#[async_trait]
impl<E: PgRecord> EntityStore<E> for PgRepository<E> {
    async fn find_all(&self) -> AppResult<Vec<E>> {
        let sql = format!("SELECT * FROM {} ORDER BY created_at ASC", E::TABLE);
        let records = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;
        debug!("📋 {} registros en {}", records.len(), E::TABLE);
        Ok(records)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", E::TABLE);
        let record = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn find_by_status(&self, status: &str) -> AppResult<Vec<E>> {
        let sql = format!(
            "SELECT * FROM {} WHERE status = $1 ORDER BY created_at ASC",
            E::TABLE
        );
        let records = sqlx::query_as::<_, E>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn find_last_code(&self) -> AppResult<Option<String>> {
        let sql = last_code_sql(E::TABLE, E::CODE_COLUMN);
        let code = sqlx::query_scalar::<_, String>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(code)
    }

    async fn insert(&self, entity: &E) -> AppResult<E> {
        entity
            .bind_insert(sqlx::query_as::<_, E>(E::INSERT_SQL))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    warn!("⚠️ Código duplicado en {}: {}", E::TABLE, entity.code());
                    AppError::code_conflict(E::KIND, entity.code())
                } else {
                    AppError::Database(e)
                }
            })
    }

    async fn update(&self, entity: &E) -> AppResult<E> {
        entity
            .bind_update(sqlx::query_as::<_, E>(E::UPDATE_SQL))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(E::KIND, entity.id()))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(E::KIND, id));
        }
        Ok(())
    }
}
