//! Objetos de transferencia de la API
//!
//! Cuerpos de solicitud por entidad y el sobre común de respuesta.

pub mod fare_dto;
pub mod program_dto;
pub mod response_dto;
pub mod route_dto;
pub mod schedule_dto;
