//! Borrador de ruta dibujada sobre el mapa
//!
//! El primer clic fija el origen, el segundo el destino. Con los dos puntos
//! marcados, los clics siguientes no tienen efecto hasta reiniciar.

use tracing::debug;

use crate::dto::route_dto::CreateRoutePayload;
use crate::models::route::{polyline_from_geometry, GeoPoint};
use crate::services::routing_service::RoutePreview;
use crate::utils::errors::{validation_error, AdminResult};
use crate::utils::validation::parse_amount;

pub const INCOMPLETE_DRAFT_MESSAGE: &str = "Complete el nombre de la ruta y los puntos";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DraftState {
    #[default]
    Empty,
    StartOnly {
        start: GeoPoint,
    },
    Complete {
        start: GeoPoint,
        end: GeoPoint,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    Started(GeoPoint),
    Completed(GeoPoint),
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteDraft {
    state: DraftState,
    pub name: String,
    pub fare_input: String,
    pub schedules: Vec<String>,
    preview: Option<RoutePreview>,
}

impl RouteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn start(&self) -> Option<GeoPoint> {
        match self.state {
            DraftState::Empty => None,
            DraftState::StartOnly { start } | DraftState::Complete { start, .. } => Some(start),
        }
    }

    pub fn end(&self) -> Option<GeoPoint> {
        match self.state {
            DraftState::Complete { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, DraftState::Complete { .. })
    }

    /// Registrar un clic en el mapa
    pub fn click(&mut self, point: GeoPoint) -> ClickOutcome {
        match self.state {
            DraftState::Empty => {
                self.state = DraftState::StartOnly { start: point };
                debug!("📍 Origen marcado en {}", point.display());
                ClickOutcome::Started(point)
            }
            DraftState::StartOnly { start } => {
                self.state = DraftState::Complete { start, end: point };
                debug!("🏁 Destino marcado en {}", point.display());
                ClickOutcome::Completed(point)
            }
            DraftState::Complete { .. } => ClickOutcome::Ignored,
        }
    }

    pub fn preview(&self) -> Option<&RoutePreview> {
        self.preview.as_ref()
    }

    pub fn set_preview(&mut self, preview: RoutePreview) {
        self.preview = Some(preview);
    }

    /// Volver al estado inicial
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Línea a dibujar: pares (lat, lng) de la geometría calculada
    pub fn polyline(&self) -> Vec<(f64, f64)> {
        self.preview
            .as_ref()
            .map(|preview| polyline_from_geometry(&preview.geometry))
            .unwrap_or_default()
    }

    /// Construir el payload de creación, validando sin tocar la red
    pub fn to_payload(&self) -> AdminResult<CreateRoutePayload> {
        let (start, end) = match self.state {
            DraftState::Complete { start, end } => (start, end),
            _ => return Err(validation_error(INCOMPLETE_DRAFT_MESSAGE)),
        };
        let name = self.name.trim();
        if name.is_empty() {
            return Err(validation_error(INCOMPLETE_DRAFT_MESSAGE));
        }

        let fare = if self.fare_input.trim().is_empty() {
            None
        } else {
            match parse_amount(&self.fare_input) {
                Some(amount) if !amount.is_sign_negative() => Some(amount),
                _ => return Err(validation_error("La tarifa debe ser un número mayor o igual a 0")),
            }
        };

        let schedules = self
            .schedules
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let (geometry, distance, duration) = match &self.preview {
            Some(preview) => (
                Some(preview.geometry.clone()),
                Some(preview.distance_km),
                Some(preview.duration_min),
            ),
            None => (None, None, None),
        };

        Ok(CreateRoutePayload {
            name: name.to_string(),
            start_point: start,
            end_point: end,
            fare,
            schedules,
            geometry,
            distance,
            duration,
        })
    }
}
