//! Conexión a PostgreSQL
//!
//! Este módulo abre el pool de conexiones y crea las tablas del servicio si
//! todavía no existen.

use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::repositories::fare_repository::CREATE_FARE_TABLE;
use crate::repositories::program_repository::CREATE_PROGRAMS_TABLE;
use crate::repositories::route_repository::CREATE_ROUTES_TABLE;
use crate::repositories::schedule_repository::CREATE_SCHEDULES_TABLE;

/// Sentencias idempotentes del esquema; cada código lleva su restricción UNIQUE
const SCHEMA: [(&str, &str); 4] = [
    ("programs", CREATE_PROGRAMS_TABLE),
    ("routes", CREATE_ROUTES_TABLE),
    ("schedules", CREATE_SCHEDULES_TABLE),
    ("fare", CREATE_FARE_TABLE),
];

#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Abrir el pool de conexiones
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🔗 Conectando a PostgreSQL: {}", mask_database_url(&config.url));
        let pool = config.create_pool().await?;
        info!("✅ PostgreSQL conectado");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Crear las tablas que falten
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        for (table, statement) in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
            info!("📦 Tabla '{}' lista", table);
        }
        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at_pos)) if at_pos > scheme_end => {
            format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
