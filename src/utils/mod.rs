//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! de formularios y formato de montos y fechas.

pub mod errors;
pub mod format;
pub mod validation;

pub use errors::*;
