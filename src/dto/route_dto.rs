use rust_decimal::Decimal;
use serde::Serialize;
use validator::Validate;

use crate::models::route::GeoPoint;
use crate::utils::validation::validate_not_blank;

// Request para crear una ruta
//
// Geometría, distancia y duración solo viajan cuando el panel ya las calculó
// con el proveedor de rutas; si no, el backend las calcula al guardar.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoutePayload {
    #[validate(custom = "validate_not_blank")]
    pub name: String,

    pub start_point: GeoPoint,
    pub end_point: GeoPoint,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare: Option<Decimal>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedules: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

// Request para actualizar una ruta
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoutePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_not_blank")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Vec<String>>,
}

impl UpdateRoutePayload {
    pub fn activation(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Default::default()
        }
    }
}
