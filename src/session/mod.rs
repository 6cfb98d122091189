//! Sesión del administrador
//!
//! Este módulo contiene el repositorio de sesión (token, usuario cacheado y
//! cookie) con sus implementaciones en memoria y en disco.

pub mod file_store;
pub mod memory_store;
pub mod repository;

pub use file_store::FileSessionRepository;
pub use memory_store::MemorySessionRepository;
pub use repository::*;
