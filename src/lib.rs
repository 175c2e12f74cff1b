//! ms_distribution
//!
//! Microservicio CRUD de la distribución de agua: programas, rutas, horarios
//! y tarifas, con códigos legibles autogenerados y activación/desactivación.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
