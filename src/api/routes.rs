//! API de rutas

use reqwest::Method;
use validator::Validate;

use crate::client::SubaClient;
use crate::dto::envelope::DeleteResponse;
use crate::dto::route_dto::{CreateRoutePayload, UpdateRoutePayload};
use crate::models::route::Route;
use crate::utils::errors::AdminResult;

impl SubaClient {
    /// Obtener todas las rutas
    pub async fn get_routes(&self) -> AdminResult<Vec<Route>> {
        self.get_data("/api/routes", "Error al obtener rutas").await
    }

    /// Crear una nueva ruta
    pub async fn create_route(&self, payload: &CreateRoutePayload) -> AdminResult<Route> {
        payload.validate()?;
        self.send_json(Method::POST, "/api/routes", payload, "Error al crear ruta")
            .await
    }

    /// Actualizar una ruta existente
    pub async fn update_route(&self, id: &str, payload: &UpdateRoutePayload) -> AdminResult<Route> {
        payload.validate()?;
        self.send_json(
            Method::PATCH,
            &format!("/api/routes/{}", id),
            payload,
            "Error al actualizar ruta",
        )
        .await
    }

    /// Desactivar una ruta (borrado lógico)
    pub async fn deactivate_route(&self, id: &str) -> AdminResult<Route> {
        self.send_empty(
            Method::DELETE,
            &format!("/api/routes/{}", id),
            "Error al desactivar ruta",
        )
        .await
    }

    /// Eliminar una ruta permanentemente
    pub async fn delete_route(&self, id: &str) -> AdminResult<DeleteResponse> {
        self.send_delete(
            &format!("/api/routes/{}/permanent", id),
            "Error al eliminar ruta",
        )
        .await
    }
}
