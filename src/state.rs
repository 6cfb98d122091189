//! Estado compartido de la aplicación
//!
//! Este módulo arma las dependencias del panel (sesión, cliente del backend,
//! servicio de autenticación, guardia y proveedor de rutas) a partir de la
//! configuración, y expone la apertura de páginas protegidas.

use std::sync::Arc;

use tracing::{debug, info};

use crate::client::SubaClient;
use crate::config::environment::{CalculationMode, EnvironmentConfig};
use crate::managers::{DriversManager, FareManager, PassengersManager, RoutesManager};
use crate::middleware::auth_guard::{AuthGuard, GuardDecision, LOGIN_PATH};
use crate::middleware::request_router::{is_protected, route_request, RouteAction};
use crate::services::auth_service::AuthService;
use crate::services::routing_service::{OsrmRoutingService, RoutingProvider};
use crate::session::{FileSessionRepository, SessionContext, SessionRepository};
use crate::utils::errors::AdminResult;

/// Resultado de abrir una página del panel
#[derive(Debug, Clone, PartialEq)]
pub enum PageAccess {
    Render(GuardDecision),
    Redirect(String),
}

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub session: SessionContext,
    pub client: SubaClient,
    pub auth: AuthService,
    pub guard: AuthGuard,
    pub routing: Option<Arc<dyn RoutingProvider>>,
}

impl AppState {
    /// Estado con la sesión persistida en `config.session_dir`
    pub fn from_config(config: EnvironmentConfig) -> AdminResult<Self> {
        let repository = Arc::new(FileSessionRepository::new(&config.session_dir));
        Self::with_repository(config, repository)
    }

    pub fn with_repository(
        config: EnvironmentConfig,
        repository: Arc<dyn SessionRepository>,
    ) -> AdminResult<Self> {
        let session = SessionContext::new(repository);
        let client = SubaClient::new(&config, session.clone())?;
        let auth = AuthService::new(client.clone(), session.clone());
        let guard = AuthGuard::new(session.clone());

        let routing: Option<Arc<dyn RoutingProvider>> = match config.calculation_mode {
            CalculationMode::Client => {
                Some(Arc::new(OsrmRoutingService::new(config.routing_base_url.clone())?))
            }
            CalculationMode::Backend => None,
        };

        info!("🔧 Backend SUBA: {}", client.base_url());
        debug!("🔧 Cálculo de rutas: {:?}", config.calculation_mode);

        Ok(Self {
            config,
            session,
            client,
            auth,
            guard,
            routing,
        })
    }

    /// Abrir una página: primero la cookie, luego la guardia
    pub async fn open_page(&self, path: &str) -> AdminResult<PageAccess> {
        let cookie = self.session.cookie_token().await?;
        let decision = route_request(path, cookie.as_deref());
        if let RouteAction::Redirect(location) = decision.action {
            return Ok(PageAccess::Redirect(location));
        }

        let guard = if is_protected(path) {
            self.guard.check().await
        } else if path == LOGIN_PATH {
            self.guard.login_page_check().await
        } else {
            GuardDecision::Anonymous
        };

        Ok(match guard {
            GuardDecision::Redirect(location) => PageAccess::Redirect(location),
            other => PageAccess::Render(other),
        })
    }

    pub fn drivers(&self) -> DriversManager {
        DriversManager::new(self.client.clone())
    }

    pub fn passengers(&self) -> PassengersManager {
        PassengersManager::new(self.client.clone())
    }

    pub fn routes(&self) -> RoutesManager {
        match &self.routing {
            Some(provider) => RoutesManager::with_provider(self.client.clone(), provider.clone()),
            None => RoutesManager::new(self.client.clone()),
        }
    }

    pub fn fare(&self) -> FareManager {
        FareManager::new(self.client.clone())
    }
}
