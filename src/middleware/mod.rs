//! Middleware del panel
//!
//! Este módulo contiene la guardia de autenticación de las páginas protegidas
//! y la decisión de enrutamiento basada en la cookie de sesión.

pub mod auth_guard;
pub mod request_router;

pub use auth_guard::*;
pub use request_router::*;
