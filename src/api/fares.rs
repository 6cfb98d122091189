//! API de tarifas

use reqwest::Method;
use rust_decimal::Decimal;
use validator::Validate;

use crate::client::SubaClient;
use crate::dto::fare_dto::{CreateFarePayload, UpdateFarePayload};
use crate::models::fare::BusFare;
use crate::utils::errors::AdminResult;

impl SubaClient {
    /// Obtener todas las tarifas
    pub async fn get_fares(&self) -> AdminResult<Vec<BusFare>> {
        self.get_data("/api/busfares", "Error al obtener el pasaje").await
    }

    /// Tarifa general: la primera registrada en el sistema
    pub async fn get_general_fare(&self) -> AdminResult<Option<BusFare>> {
        Ok(self.get_fares().await?.into_iter().next())
    }

    /// Crear la tarifa general inicial
    pub async fn create_general_fare(&self, fare: Decimal) -> AdminResult<BusFare> {
        let payload = CreateFarePayload::general(fare);
        payload.validate()?;
        self.send_json(Method::POST, "/api/busfares", &payload, "Error al crear el pasaje")
            .await
    }

    /// Actualizar la tarifa general
    pub async fn update_general_fare(&self, id: &str, fare: Decimal) -> AdminResult<BusFare> {
        let payload = UpdateFarePayload { fare };
        payload.validate()?;
        self.send_json(
            Method::PUT,
            &format!("/api/busfares/{}", id),
            &payload,
            "Error al actualizar el pasaje",
        )
        .await
    }
}
