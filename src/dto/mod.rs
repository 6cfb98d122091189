pub mod auth_dto;
pub mod driver_dto;
pub mod envelope;
pub mod fare_dto;
pub mod route_dto;
pub mod routing_dto;

pub use auth_dto::*;
pub use driver_dto::*;
pub use envelope::*;
pub use fare_dto::*;
pub use route_dto::*;
