//! Modelo de Route
//!
//! Ruta con nombre entre dos coordenadas. La geometría es una estructura
//! GeoJSON opaca que el panel solo transporta y dibuja.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Centro del mapa: Ciudad Guayana (Puerto Ordaz)
pub const MAP_CENTER: GeoPoint = GeoPoint {
    lat: 8.2976,
    lng: -62.7415,
};

pub const MAP_DEFAULT_ZOOM: u8 = 13;

/// Punto geográfico
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// "Lat: 8.29760, Lng: -62.74150"
    pub fn display(&self) -> String {
        format!("Lat: {:.5}, Lng: {:.5}", self.lat, self.lng)
    }
}

fn default_true() -> bool {
    true
}

/// Route principal - mapea exactamente al documento del backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub start_point: GeoPoint,
    pub end_point: GeoPoint,
    /// Distancia en kilómetros
    #[serde(default)]
    pub distance: f64,
    /// Duración estimada en minutos
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub geometry: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<Decimal>,
    #[serde(default)]
    pub schedules: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Route {
    pub fn formatted_distance(&self) -> String {
        format!("{:.2} km", self.distance)
    }

    pub fn formatted_duration(&self) -> String {
        format!("{} min", self.duration.round() as i64)
    }
}

/// Convertir coordenadas GeoJSON `[lng, lat]` a pares `(lat, lng)` para dibujar
pub fn polyline_from_geometry(geometry: &serde_json::Value) -> Vec<(f64, f64)> {
    geometry
        .get("coordinates")
        .and_then(|c| c.as_array())
        .map(|coords| {
            coords
                .iter()
                .filter_map(|pair| {
                    let pair = pair.as_array()?;
                    let lng = pair.first()?.as_f64()?;
                    let lat = pair.get(1)?.as_f64()?;
                    Some((lat, lng))
                })
                .collect()
        })
        .unwrap_or_default()
}
