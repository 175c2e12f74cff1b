//! Services module
//!
//! Este módulo contiene la lógica de negocio: la generación de códigos y el
//! servicio genérico que comparten programas, rutas, horarios y tarifas.

pub mod code_generator;
pub mod entity_service;

pub use entity_service::EntityService;
