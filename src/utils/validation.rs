//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validar entradas de formulario
//! antes de enviarlas al backend, y para convertir texto a tipos del dominio.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::route::GeoPoint;
use crate::utils::errors::{validation_error, AdminResult};

lazy_static! {
    static ref COORDINATE_RE: Regex =
        Regex::new(r"^\s*(-?\d{1,3}(?:\.\d+)?)\s*,\s*(-?\d{1,3}(?:\.\d+)?)\s*$").unwrap();
}

/// Validar que un string no esté vacío (ignorando espacios)
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Validar que un monto sea estrictamente positivo
pub fn validate_positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut error = ValidationError::new("positive");
        error.add_param("actual".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Convertir "lat,lng" en un punto geográfico
pub fn parse_point(value: &str) -> AdminResult<GeoPoint> {
    let captures = COORDINATE_RE
        .captures(value)
        .ok_or_else(|| validation_error("Coordenada inválida, use el formato lat,lng"))?;

    let lat: f64 = captures[1]
        .parse()
        .map_err(|_| validation_error("Latitud inválida"))?;
    let lng: f64 = captures[2]
        .parse()
        .map_err(|_| validation_error("Longitud inválida"))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(validation_error("La latitud debe estar entre -90 y 90"));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(validation_error("La longitud debe estar entre -180 y 180"));
    }

    Ok(GeoPoint { lat, lng })
}

/// Mayor monto que acepta un input numérico
pub const MAX_AMOUNT: i64 = 1_000_000_000;

/// Convertir texto de un input numérico en monto
///
/// Devuelve `None` cuando el texto está vacío, no es un número o su valor
/// absoluto supera `MAX_AMOUNT`.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .filter(|amount| amount.abs() <= Decimal::from(MAX_AMOUNT))
}
