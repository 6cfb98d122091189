//! Configuración del proyecto
//!
//! Este módulo contiene la selección de entorno y las URLs de los servicios
//! externos (backend SUBA y proveedor de rutas).

pub mod environment;

pub use environment::*;
