//! Sobres JSON del backend SUBA
//!
//! El backend no es uniforme: unas rutas devuelven `{ "data": ... }`, otras
//! el documento directamente, y pasajeros viene en `{ "passengers": [...] }`.

use serde::Deserialize;

/// `{ "data": T }` o `T` directamente
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

/// Listado de pasajeros
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PassengersEnvelope<T> {
    Named { passengers: Vec<T> },
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> PassengersEnvelope<T> {
    pub fn into_inner(self) -> Vec<T> {
        match self {
            PassengersEnvelope::Named { passengers } => passengers,
            PassengersEnvelope::Wrapped { data } => data,
            PassengersEnvelope::Bare(values) => values,
        }
    }
}

/// Cuerpo de error del backend
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Mensaje del backend: `error`, luego `message`
    pub fn message(self) -> Option<String> {
        self.error
            .filter(|m| !m.trim().is_empty())
            .or(self.message.filter(|m| !m.trim().is_empty()))
    }
}

/// Respuesta de las eliminaciones
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
