//! Guardia de autenticación de las páginas protegidas
//!
//! En cada carga de página se leen el token y el usuario cacheado. Solo un
//! usuario con rol `admin` pasa; cualquier otra cosa limpia las credenciales
//! y redirige al login. Es una comodidad del cliente: la autorización real la
//! hace el backend en cada llamada.

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, error, warn};

use crate::models::auth::AdminUser;
use crate::session::{CachedUser, SessionContext, StorageEvent};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Resultado de la verificación
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Se puede renderizar la página
    Allow(AdminUser),
    /// Navegar a otra ruta
    Redirect(String),
    /// Sin sesión, en una página que no la exige
    Anonymous,
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow(_))
    }

    pub fn user(&self) -> Option<&AdminUser> {
        match self {
            GuardDecision::Allow(user) => Some(user),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct AuthGuard {
    session: SessionContext,
    require_auth: bool,
}

impl AuthGuard {
    /// Guardia para páginas protegidas
    pub fn new(session: SessionContext) -> Self {
        Self {
            session,
            require_auth: true,
        }
    }

    /// Guardia que informa el estado pero no redirige
    pub fn optional(session: SessionContext) -> Self {
        Self {
            session,
            require_auth: false,
        }
    }

    fn deny(&self) -> GuardDecision {
        if self.require_auth {
            GuardDecision::Redirect(LOGIN_PATH.to_string())
        } else {
            GuardDecision::Anonymous
        }
    }

    async fn clear_credentials(&self) {
        if let Err(e) = self.session.clear().await {
            error!("❌ No se pudieron limpiar las credenciales: {}", e);
        }
    }

    /// Verificar la sesión actual
    pub async fn check(&self) -> GuardDecision {
        let token = match self.session.token().await {
            Ok(token) => token,
            Err(e) => {
                error!("❌ Error al verificar autenticación: {}", e);
                return self.deny();
            }
        };
        let cached = match self.session.cached_user().await {
            Ok(cached) => cached,
            Err(e) => {
                error!("❌ Error al verificar autenticación: {}", e);
                return self.deny();
            }
        };

        match (token, cached) {
            (Some(_), CachedUser::Valid(user)) if user.is_admin() => {
                debug!("✅ Sesión de administrador válida para {}", user.email);
                GuardDecision::Allow(user)
            }
            (Some(_), CachedUser::Valid(user)) => {
                warn!("🚫 Usuario {} no es admin, redirigiendo...", user.email);
                self.clear_credentials().await;
                self.deny()
            }
            (Some(_), CachedUser::Unreadable) => {
                warn!("🚫 Usuario cacheado ilegible, redirigiendo...");
                self.clear_credentials().await;
                self.deny()
            }
            _ => self.deny(),
        }
    }

    /// Verificación de la página de login: con token, ir al dashboard
    pub async fn login_page_check(&self) -> GuardDecision {
        match self.session.token().await {
            Ok(Some(_)) => GuardDecision::Redirect(DASHBOARD_PATH.to_string()),
            Ok(None) => GuardDecision::Anonymous,
            Err(e) => {
                error!("❌ Error al leer el token: {}", e);
                GuardDecision::Anonymous
            }
        }
    }

    /// Escuchar cambios del almacenamiento (logout en otra pestaña)
    ///
    /// Solo recibe cambios hechos en este proceso sobre el mismo repositorio.
    pub fn watch(&self) -> GuardWatcher {
        GuardWatcher {
            guard: self.clone(),
            events: self.session.subscribe(),
        }
    }
}

/// Re-ejecuta la verificación cuando cambian `token` o `user`
pub struct GuardWatcher {
    guard: AuthGuard,
    events: broadcast::Receiver<StorageEvent>,
}

impl GuardWatcher {
    /// Esperar el próximo cambio relevante y devolver la nueva decisión
    ///
    /// Devuelve `None` cuando el repositorio de sesión ya no existe.
    pub async fn next_decision(&mut self) -> Option<GuardDecision> {
        loop {
            match self.events.recv().await {
                Ok(event) if event.affects_auth() => return Some(self.guard.check().await),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    debug!("⏭️ {} eventos de sesión perdidos, re-verificando", skipped);
                    return Some(self.guard.check().await);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
