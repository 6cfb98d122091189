//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del panel de administración.
//! Se distinguen tres familias: errores de validación (antes de cualquier
//! llamada de red), errores del backend (status no exitoso) y errores de
//! transporte (se propagan tal cual).

use thiserror::Error;

/// Errores principales del panel
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid form: {0}")]
    InvalidForm(#[from] validator::ValidationErrors),

    #[error("Backend error {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("No active session")]
    NoSession,

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Routing provider error: {0}")]
    Routing(String),
}

impl AdminError {
    /// Texto que se muestra al usuario en el banner o notificación
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Validation(msg) => msg.clone(),
            AdminError::InvalidForm(errors) => {
                let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
                fields.sort_unstable();
                format!("Campos inválidos o incompletos: {}", fields.join(", "))
            }
            AdminError::Backend { message, .. } => message.clone(),
            AdminError::Network(e) => format!("Error de red: {}", e),
            AdminError::Decode(_) => "Respuesta inválida del servidor".to_string(),
            AdminError::AccessDenied(msg) => msg.clone(),
            AdminError::NoSession => "No hay sesión activa".to_string(),
            AdminError::Storage(msg) => msg.clone(),
            AdminError::Io(e) => format!("Error de almacenamiento: {}", e),
            AdminError::Config(msg) => msg.clone(),
            AdminError::Routing(msg) => msg.clone(),
        }
    }

    /// Indica si el error se detectó antes de tocar la red
    pub fn is_validation(&self) -> bool {
        matches!(self, AdminError::Validation(_) | AdminError::InvalidForm(_))
    }

    /// Status HTTP del backend, si lo hay
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::Backend { status, .. } => Some(*status),
            AdminError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AdminResult<T> = Result<T, AdminError>;

/// Función helper para crear errores de validación
pub fn validation_error(message: &str) -> AdminError {
    AdminError::Validation(message.to_string())
}

/// Función helper para crear errores del backend
pub fn backend_error(status: u16, message: &str) -> AdminError {
    AdminError::Backend {
        status,
        message: message.to_string(),
    }
}

/// Función helper para errores de almacenamiento de sesión
pub fn storage_error(message: &str) -> AdminError {
    AdminError::Storage(message.to_string())
}
