//! Modelos del sistema
//!
//! Este módulo contiene las cuatro entidades de distribución y el trait
//! `Entity` que las describe para el servicio genérico.

pub mod entity;
pub mod fare;
pub mod program;
pub mod route;
pub mod schedule;
pub mod status;

pub use entity::Entity;
pub use fare::Fare;
pub use program::DistributionProgram;
pub use route::{DistributionRoute, ZoneOrder};
pub use schedule::DistributionSchedule;
pub use status::EntityStatus;
