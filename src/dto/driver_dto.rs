use serde::Serialize;
use validator::Validate;

use crate::models::driver::{Driver, DriverStatus};
use crate::utils::validation::validate_not_blank;

// Request para crear un conductor
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverPayload {
    #[validate(custom = "validate_not_blank")]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(custom = "validate_not_blank")]
    pub password: String,

    #[validate(custom = "validate_not_blank")]
    pub license_number: String,

    #[validate(custom = "validate_not_blank")]
    pub phone: String,

    pub status: DriverStatus,
}

impl Default for CreateDriverPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            license_number: String::new(),
            phone: String::new(),
            status: DriverStatus::Active,
        }
    }
}

impl CreateDriverPayload {
    /// Formulario de edición: copia del conductor, sin contraseña
    pub fn from_driver(driver: &Driver) -> Self {
        Self {
            name: driver.name.clone(),
            email: driver.email.clone(),
            password: String::new(),
            license_number: driver.license_number.clone(),
            phone: driver.phone.clone(),
            status: driver.status,
        }
    }

    /// Payload de actualización: nunca incluye la contraseña
    pub fn to_update(&self) -> UpdateDriverPayload {
        UpdateDriverPayload {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            license_number: Some(self.license_number.clone()),
            phone: Some(self.phone.clone()),
            status: Some(self.status),
        }
    }
}

// Request para actualizar un conductor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_not_blank")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_not_blank")]
    pub license_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_not_blank")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DriverStatus>,
}

impl UpdateDriverPayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.license_number.is_none()
            && self.phone.is_none()
            && self.status.is_none()
    }
}
