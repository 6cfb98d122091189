//! Modelo de Driver
//!
//! Conductor de bus tal como lo devuelve el backend SUBA. El estado es una
//! enumeración cerrada de dos valores; se aceptan los nombres en español de
//! revisiones anteriores del backend.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado del conductor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    #[default]
    #[serde(alias = "Activo", alias = "active")]
    Active,
    #[serde(alias = "Inactivo", alias = "inactive")]
    Inactive,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Active => "Active",
            DriverStatus::Inactive => "Inactive",
        }
    }

    /// Etiqueta en español para la interfaz
    pub fn label(&self) -> &'static str {
        match self {
            DriverStatus::Active => "Activo",
            DriverStatus::Inactive => "Inactivo",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" | "activo" => Some(DriverStatus::Active),
            "inactive" | "inactivo" => Some(DriverStatus::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_driver_role() -> String {
    "driver".to_string()
}

/// Driver principal - mapea exactamente al documento del backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub license_number: String,
    pub phone: String,
    #[serde(default)]
    pub status: DriverStatus,
    #[serde(default = "default_driver_role")]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Driver {
    pub fn is_active(&self) -> bool {
        self.status == DriverStatus::Active
    }
}
