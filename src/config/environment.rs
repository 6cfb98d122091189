//! Configuración de variables de entorno
//!
//! Este módulo maneja la selección de entorno (local u hospedado) y las URLs
//! del backend SUBA y del proveedor de rutas.

use std::env;
use std::path::PathBuf;

use crate::utils::errors::{AdminError, AdminResult};

pub const LOCAL_API_URL: &str = "http://localhost:3500";
pub const HOSTED_API_URL: &str = "https://subapp-api.onrender.com";
pub const DEFAULT_ROUTING_URL: &str = "https://router.project-osrm.org";
pub const DEFAULT_SESSION_DIR: &str = ".suba-session";

/// Entorno de ejecución
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Entorno implícito según el modo de compilación
    pub fn from_build_mode() -> Self {
        if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn parse(value: &str) -> AdminResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(AdminError::Config(format!(
                "SUBA_ENV inválido: '{}' (use development o production)",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Dónde se calculan distancia, duración y geometría de una ruta nueva
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationMode {
    /// El panel consulta al proveedor de rutas al marcar el punto final
    Client,
    /// El backend calcula la ruta al guardarla
    Backend,
}

impl CalculationMode {
    pub fn parse(value: &str) -> AdminResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "client" => Ok(CalculationMode::Client),
            "backend" => Ok(CalculationMode::Backend),
            other => Err(AdminError::Config(format!(
                "SUBA_ROUTE_CALCULATION inválido: '{}' (use client o backend)",
                other
            ))),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: Environment,
    pub api_base_url: String,
    pub routing_base_url: String,
    pub calculation_mode: CalculationMode,
    pub session_dir: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::for_environment(Environment::from_build_mode())
    }
}

impl EnvironmentConfig {
    /// Configuración por defecto para un entorno dado
    pub fn for_environment(environment: Environment) -> Self {
        let api_base_url = match environment {
            Environment::Development => LOCAL_API_URL,
            Environment::Production => HOSTED_API_URL,
        };

        Self {
            environment,
            api_base_url: api_base_url.to_string(),
            routing_base_url: DEFAULT_ROUTING_URL.to_string(),
            calculation_mode: CalculationMode::Backend,
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
        }
    }

    /// Leer la configuración desde variables de entorno
    pub fn from_env() -> AdminResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env`, pero con una fuente de variables inyectable
    pub fn from_lookup<F>(lookup: F) -> AdminResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("SUBA_ENV") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::from_build_mode(),
        };

        let mut config = Self::for_environment(environment);

        if let Some(url) = lookup("SUBA_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_base_url = normalize_base_url(&url)?;
        }
        if let Some(url) = lookup("SUBA_ROUTING_URL").filter(|v| !v.trim().is_empty()) {
            config.routing_base_url = normalize_base_url(&url)?;
        }
        if let Some(mode) = lookup("SUBA_ROUTE_CALCULATION") {
            config.calculation_mode = CalculationMode::parse(&mode)?;
        }
        if let Some(dir) = lookup("SUBA_SESSION_DIR").filter(|v| !v.trim().is_empty()) {
            config.session_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Insignia de entorno, solo visible en desarrollo
    pub fn environment_badge(&self) -> Option<String> {
        if self.api_base_url.contains("localhost") || self.is_development() {
            Some(format!("DEV MODE → {}", self.api_base_url))
        } else {
            None
        }
    }
}

fn normalize_base_url(url: &str) -> AdminResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AdminError::Config(format!(
            "URL inválida: '{}' (debe comenzar con http:// o https://)",
            url
        )));
    }
    Ok(trimmed.to_string())
}
