//! Gestores de las vistas del panel
//!
//! Cada gestor mantiene el estado de una sección (listado, búsqueda,
//! formularios y confirmaciones) y lo sincroniza con el backend.

pub mod drivers_manager;
pub mod fare_manager;
pub mod list_state;
pub mod modal;
pub mod passengers_manager;
pub mod route_draft;
pub mod routes_manager;

pub use drivers_manager::*;
pub use fare_manager::*;
pub use list_state::*;
pub use modal::*;
pub use passengers_manager::*;
pub use route_draft::*;
pub use routes_manager::*;
