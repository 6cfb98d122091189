//! Controladores de la línea de comandos
//!
//! Cada controlador traduce un subcomando en operaciones de su gestor y
//! presenta el resultado en la terminal.

pub mod auth_controller;
pub mod drivers_controller;
pub mod fare_controller;
pub mod passengers_controller;
pub mod prompt;
pub mod routes_controller;

pub use auth_controller::{require_admin, AuthController};
pub use drivers_controller::{DriverArgs, DriversController};
pub use fare_controller::FareController;
pub use passengers_controller::PassengersController;
pub use routes_controller::RoutesController;
