use serde::Deserialize;

// Respuesta del servicio de rutas compatible con OSRM
#[derive(Debug, Deserialize)]
pub struct OsrmRouteResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    pub geometry: serde_json::Value,
    /// Metros
    pub distance: f64,
    /// Segundos
    pub duration: f64,
}
