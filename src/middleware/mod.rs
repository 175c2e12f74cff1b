//! Middleware del sistema
//!
//! Este módulo contiene el middleware transversal que envuelve todas las
//! peticiones.

pub mod security_headers;

pub use security_headers::security_headers_middleware;
