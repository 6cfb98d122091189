//! Comandos de sesión: login, logout y estado

use colored::*;
use tracing::debug;

use crate::controllers::prompt::{self, secret_or_prompt, value_or_prompt};
use crate::middleware::auth_guard::{GuardDecision, DASHBOARD_PATH};
use crate::models::auth::AdminUser;
use crate::state::{AppState, PageAccess};
use crate::utils::errors::{AdminError, AdminResult};
use crate::utils::format::format_currency;

/// Verificar que hay una sesión de administrador antes de un comando protegido
pub async fn require_admin(state: &AppState) -> AdminResult<AdminUser> {
    match state.open_page(DASHBOARD_PATH).await? {
        PageAccess::Render(GuardDecision::Allow(user)) => Ok(user),
        PageAccess::Render(_) | PageAccess::Redirect(_) => Err(AdminError::NoSession),
    }
}

pub struct AuthController {
    state: AppState,
}

impl AuthController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn print_badge(&self) {
        if let Some(badge) = self.state.config.environment_badge() {
            println!("{}", badge.black().on_yellow());
        }
    }

    pub async fn login(&self, email: Option<String>, password: Option<String>) -> AdminResult<AdminUser> {
        self.print_badge();
        prompt::title("🔐 Panel SUBA - Iniciar sesión");

        let email = value_or_prompt(email, "Email")?;
        let password = secret_or_prompt(password, "Contraseña")?;

        let user = self.state.auth.login(&email, &password).await?;
        prompt::success(&format!("Bienvenido, {}", user.display_name()));
        Ok(user)
    }

    pub async fn logout(&self) -> AdminResult<()> {
        match self.state.auth.logout().await {
            Ok(response) => {
                let message = if response.message.is_empty() {
                    "Sesión cerrada"
                } else {
                    response.message.as_str()
                };
                prompt::success(message);
                Ok(())
            }
            Err(AdminError::NoSession) => {
                prompt::notice("No había una sesión activa");
                Ok(())
            }
            Err(e) => {
                prompt::notice("La sesión local se cerró, pero el servidor respondió con error");
                Err(e)
            }
        }
    }

    /// Estado de la sesión y resumen del panel
    pub async fn status(&self) -> AdminResult<()> {
        self.print_badge();
        prompt::title("📋 Panel SUBA");
        println!("Backend: {}", self.state.client.base_url());

        let user = match self.state.open_page(DASHBOARD_PATH).await? {
            PageAccess::Render(GuardDecision::Allow(user)) => user,
            _ => {
                prompt::notice("Sin sesión de administrador. Use `suba-admin login`.");
                return Ok(());
            }
        };
        println!("Usuario: {} <{}>", user.display_name(), user.email);

        let client = &self.state.client;
        let (drivers, passengers, routes, fare) = futures::join!(
            client.get_drivers(),
            client.get_passengers(),
            client.get_routes(),
            client.get_general_fare(),
        );

        println!();
        match drivers {
            Ok(list) => {
                let active = list.iter().filter(|d| d.is_active()).count();
                println!("🚌 Conductores: {} ({} activos)", list.len(), active);
            }
            Err(e) => prompt::failure(&e),
        }
        match passengers {
            Ok(list) => println!("👥 Pasajeros: {}", list.len()),
            Err(e) => prompt::failure(&e),
        }
        match routes {
            Ok(list) => {
                let active = list.iter().filter(|r| r.is_active).count();
                println!("🗺️ Rutas: {} ({} activas)", list.len(), active);
            }
            Err(e) => prompt::failure(&e),
        }
        match fare {
            Ok(Some(fare)) => println!("💰 Pasaje: {}", format_currency(fare.fare)),
            Ok(None) => println!("💰 Pasaje: sin configurar"),
            Err(e) => prompt::failure(&e),
        }
        debug!("📋 Resumen del panel generado");
        Ok(())
    }
}
