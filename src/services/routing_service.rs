//! Servicio de cálculo de rutas
//!
//! Este módulo maneja la comunicación con el proveedor de rutas (API
//! compatible con OSRM): geometría, distancia y duración entre dos puntos.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::dto::routing_dto::OsrmRouteResponse;
use crate::models::route::GeoPoint;
use crate::utils::errors::{AdminError, AdminResult};

/// Resultado del cálculo de una ruta
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePreview {
    pub geometry: serde_json::Value,
    pub distance_km: f64,
    pub duration_min: f64,
}

impl RoutePreview {
    pub fn formatted_distance(&self) -> String {
        format!("{:.2} km", self.distance_km)
    }

    pub fn formatted_duration(&self) -> String {
        format!("{} min", self.duration_min.round() as i64)
    }
}

/// Proveedor externo de rutas
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    async fn calculate(&self, start: GeoPoint, end: GeoPoint) -> AdminResult<RoutePreview>;
}

/// Proveedor OSRM (`/route/v1/driving`)
pub struct OsrmRoutingService {
    base_url: String,
    client: Client,
}

impl OsrmRoutingService {
    pub fn new(base_url: impl Into<String>) -> AdminResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("suba-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// URL de la consulta; OSRM espera `lng,lat`
    pub fn route_url(&self, start: GeoPoint, end: GeoPoint) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url, start.lng, start.lat, end.lng, end.lat
        )
    }
}

#[async_trait]
impl RoutingProvider for OsrmRoutingService {
    async fn calculate(&self, start: GeoPoint, end: GeoPoint) -> AdminResult<RoutePreview> {
        let url = self.route_url(start, end);
        info!("🗺️ Calculando ruta {} → {}", start.display(), end.display());
        debug!("🌐 Consultando {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AdminError::Routing(format!(
                "Error al calcular la ruta (HTTP {})",
                status.as_u16()
            )));
        }

        let body: OsrmRouteResponse = response.json().await?;
        let route = body.routes.into_iter().next().ok_or_else(|| {
            AdminError::Routing(
                body.message
                    .or(body.code)
                    .map(|m| format!("No se encontró una ruta: {}", m))
                    .unwrap_or_else(|| "No se encontró una ruta entre los puntos".to_string()),
            )
        })?;

        let preview = RoutePreview {
            geometry: route.geometry,
            distance_km: route.distance / 1000.0,
            duration_min: route.duration / 60.0,
        };

        info!(
            "✅ Ruta calculada: {} / {}",
            preview.formatted_distance(),
            preview.formatted_duration()
        );
        Ok(preview)
    }
}
