//! Modelos del sistema
//!
//! Este módulo contiene los modelos que reflejan los documentos del backend
//! SUBA. El panel nunca es dueño del estado: cada carga reemplaza lo local.

pub mod auth;
pub mod driver;
pub mod fare;
pub mod passenger;
pub mod route;

pub use auth::*;
pub use driver::*;
pub use fare::*;
pub use passenger::*;
pub use route::*;
