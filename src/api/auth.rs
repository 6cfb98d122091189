//! API de autenticación del administrador

use reqwest::Method;
use tracing::{info, warn};
use validator::Validate;

use crate::client::SubaClient;
use crate::dto::auth_dto::LoginRequest;
use crate::dto::envelope::Envelope;
use crate::models::auth::{LoginResponse, LogoutResponse};
use crate::utils::errors::{AdminError, AdminResult};

pub const ACCESS_DENIED_MESSAGE: &str = "Acceso denegado: Solo administradores pueden acceder";

impl SubaClient {
    /// Login del administrador
    ///
    /// Falla si el usuario devuelto no tiene rol `admin`, aunque el backend
    /// haya respondido con éxito.
    pub async fn login(&self, email: &str, password: &str) -> AdminResult<LoginResponse> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let builder = self
            .anonymous_request(Method::POST, "/api/admin/login")
            .json(&request);
        let response = self.send(builder, "Error en el inicio de sesión").await?;
        let login: LoginResponse = Self::decode::<Envelope<LoginResponse>>(response)
            .await?
            .into_inner();

        if !login.user.is_admin() {
            warn!("🚫 Login rechazado: {} tiene rol '{}'", login.user.email, login.user.role);
            return Err(AdminError::AccessDenied(ACCESS_DENIED_MESSAGE.to_string()));
        }

        info!("🔐 Login exitoso para {}", login.user.email);
        Ok(login)
    }

    /// Logout en el backend (no toca la sesión local)
    pub async fn logout(&self) -> AdminResult<LogoutResponse> {
        if self.session().token().await?.is_none() {
            return Err(AdminError::NoSession);
        }

        let builder = self.request(Method::POST, "/api/admin/logout").await?;
        let response = self.send(builder, "Error al cerrar sesión").await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(LogoutResponse {
                success: true,
                message: String::new(),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
