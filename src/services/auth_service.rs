//! Servicio de autenticación
//!
//! Orquesta el login (backend + persistencia de token, usuario y cookie) y el
//! logout (backend + limpieza local, que ocurre aunque el backend falle).

use tracing::{info, warn};

use crate::client::SubaClient;
use crate::models::auth::{AdminUser, LogoutResponse};
use crate::session::SessionContext;
use crate::utils::errors::AdminResult;

/// Servicio de autenticación
#[derive(Clone)]
pub struct AuthService {
    client: SubaClient,
    session: SessionContext,
}

impl AuthService {
    pub fn new(client: SubaClient, session: SessionContext) -> Self {
        Self { client, session }
    }

    /// Autenticar y guardar la sesión
    pub async fn login(&self, email: &str, password: &str) -> AdminResult<AdminUser> {
        let response = self.client.login(email, password).await?;
        self.session.store_login(&response.token, &response.user).await?;
        Ok(response.user)
    }

    /// Cerrar sesión
    ///
    /// Token local y cookie se eliminan siempre; el error del backend (si lo
    /// hubo) se devuelve después de limpiar.
    pub async fn logout(&self) -> AdminResult<LogoutResponse> {
        let remote = self.client.logout().await;
        let cleared = self.session.clear().await;

        match remote {
            Ok(response) => {
                cleared?;
                info!("👋 Sesión cerrada");
                Ok(response)
            }
            Err(e) => {
                warn!("⚠️ Logout en el backend falló, sesión local limpiada igualmente: {}", e);
                Err(e)
            }
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}
