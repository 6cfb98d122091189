//! API de conductores

use reqwest::Method;
use validator::Validate;

use crate::client::SubaClient;
use crate::dto::driver_dto::{CreateDriverPayload, UpdateDriverPayload};
use crate::dto::envelope::DeleteResponse;
use crate::models::driver::Driver;
use crate::utils::errors::{validation_error, AdminResult};

impl SubaClient {
    /// Obtener todos los conductores
    pub async fn get_drivers(&self) -> AdminResult<Vec<Driver>> {
        self.get_data("/api/drivers", "Error al obtener conductores").await
    }

    /// Obtener solo los conductores activos
    pub async fn get_active_drivers(&self) -> AdminResult<Vec<Driver>> {
        self.get_data("/api/drivers/active", "Error al obtener conductores activos")
            .await
    }

    /// Obtener un conductor por ID
    pub async fn get_driver(&self, id: &str) -> AdminResult<Driver> {
        self.get_data(&format!("/api/drivers/{}", id), "Error al obtener conductor")
            .await
    }

    /// Crear un nuevo conductor
    pub async fn create_driver(&self, payload: &CreateDriverPayload) -> AdminResult<Driver> {
        payload.validate()?;
        self.send_json(Method::POST, "/api/drivers", payload, "Error al crear conductor")
            .await
    }

    /// Actualizar un conductor existente
    pub async fn update_driver(&self, id: &str, payload: &UpdateDriverPayload) -> AdminResult<Driver> {
        payload.validate()?;
        if payload.is_empty() {
            return Err(validation_error("No hay cambios para guardar"));
        }
        self.send_json(
            Method::PUT,
            &format!("/api/drivers/{}", id),
            payload,
            "Error al actualizar conductor",
        )
        .await
    }

    /// Eliminar un conductor
    pub async fn delete_driver(&self, id: &str) -> AdminResult<DeleteResponse> {
        self.send_delete(&format!("/api/drivers/{}", id), "Error al eliminar conductor")
            .await
    }

    /// DELETE cuya respuesta puede venir vacía
    pub(crate) async fn send_delete(&self, path: &str, fallback: &str) -> AdminResult<DeleteResponse> {
        let builder = self.request(Method::DELETE, path).await?;
        let response = self.send(builder, fallback).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(DeleteResponse {
                success: true,
                message: None,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
