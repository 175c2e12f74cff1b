//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación: un servicio por
//! tipo de entidad, todos sobre el mismo almacén configurado.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::models::{DistributionProgram, DistributionRoute, DistributionSchedule, Fare};
use crate::repositories::{InMemoryRepository, PgRepository};
use crate::services::EntityService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub programs: EntityService<DistributionProgram>,
    pub routes: EntityService<DistributionRoute>,
    pub schedules: EntityService<DistributionSchedule>,
    pub fares: EntityService<Fare>,
}

impl AppState {
    /// Estado respaldado por PostgreSQL
    pub fn with_postgres(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            config,
            programs: EntityService::new(Arc::new(PgRepository::<DistributionProgram>::new(pool.clone()))),
            routes: EntityService::new(Arc::new(PgRepository::<DistributionRoute>::new(pool.clone()))),
            schedules: EntityService::new(Arc::new(PgRepository::<DistributionSchedule>::new(pool.clone()))),
            fares: EntityService::new(Arc::new(PgRepository::<Fare>::new(pool))),
        }
    }

    /// Estado en memoria, sin persistencia entre reinicios
    pub fn in_memory(config: EnvironmentConfig) -> Self {
        Self {
            config,
            programs: EntityService::new(Arc::new(InMemoryRepository::<DistributionProgram>::new())),
            routes: EntityService::new(Arc::new(InMemoryRepository::<DistributionRoute>::new())),
            schedules: EntityService::new(Arc::new(InMemoryRepository::<DistributionSchedule>::new())),
            fares: EntityService::new(Arc::new(InMemoryRepository::<Fare>::new())),
        }
    }
}
