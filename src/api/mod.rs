//! Operaciones del backend SUBA
//!
//! Cada submódulo agrega métodos a `SubaClient` para un recurso del backend.

pub mod auth;
pub mod drivers;
pub mod fares;
pub mod passengers;
pub mod routes;
