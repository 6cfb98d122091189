//! Panel de administración SUBA
//!
//! Cliente tipado del backend de pasajes de bus, sesión persistente del
//! administrador, guardia de acceso y gestores de cada sección del panel
//! (conductores, pasajeros, rutas y pasaje general).

pub mod api;
pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod managers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
pub mod utils;

pub use client::SubaClient;
pub use state::AppState;
pub use utils::errors::{AdminError, AdminResult};
