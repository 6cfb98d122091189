//! Services module
//!
//! Este módulo contiene la lógica que combina el cliente HTTP con la sesión
//! y las integraciones externas (proveedor de rutas).

pub mod auth_service;
pub mod routing_service;

pub use auth_service::*;
pub use routing_service::*;
