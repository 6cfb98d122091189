//! Repositorio de sesión
//!
//! Único punto de lectura y escritura del token, del usuario cacheado y de la
//! cookie de sesión. Reemplaza el almacenamiento global del navegador
//! (localStorage + document.cookie) por un objeto explícito e inyectable.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::models::auth::AdminUser;
use crate::utils::errors::AdminResult;

/// Vida de la cookie de sesión (7 días)
pub const COOKIE_MAX_AGE_SECONDS: i64 = 60 * 60 * 24 * 7;

/// Claves del almacenamiento local
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Token,
    User,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Token => "token",
            StorageKey::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "token" => Some(StorageKey::Token),
            "user" => Some(StorageKey::User),
            _ => None,
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qué cambió en el almacenamiento
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageEvent {
    Item(StorageKey),
    Cookie,
}

impl StorageEvent {
    /// Cambios que obligan a revisar la autenticación
    pub fn affects_auth(&self) -> bool {
        matches!(
            self,
            StorageEvent::Item(StorageKey::Token) | StorageEvent::Item(StorageKey::User)
        )
    }
}

/// Cookie `token` usada por la capa de enrutamiento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCookie {
    pub value: String,
    pub path: String,
    pub same_site: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionCookie {
    pub fn new(token: &str) -> Self {
        Self::issued_at(token, Utc::now())
    }

    pub fn issued_at(token: &str, now: DateTime<Utc>) -> Self {
        Self {
            value: token.to_string(),
            path: "/".to_string(),
            same_site: "Strict".to_string(),
            expires_at: now + Duration::seconds(COOKIE_MAX_AGE_SECONDS),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Almacenamiento de sesión (equivalente a localStorage + cookies)
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get_item(&self, key: StorageKey) -> AdminResult<Option<String>>;

    async fn set_item(&self, key: StorageKey, value: &str) -> AdminResult<()>;

    async fn remove_item(&self, key: StorageKey) -> AdminResult<()>;

    async fn get_cookie(&self) -> AdminResult<Option<SessionCookie>>;

    async fn set_cookie(&self, cookie: SessionCookie) -> AdminResult<()>;

    async fn remove_cookie(&self) -> AdminResult<()>;

    /// Suscribirse a los cambios (equivalente al evento `storage`)
    fn subscribe(&self) -> broadcast::Receiver<StorageEvent>;
}

/// Usuario cacheado tal como se leyó del almacenamiento
#[derive(Debug, Clone, PartialEq)]
pub enum CachedUser {
    Missing,
    Valid(AdminUser),
    Unreadable,
}

/// Contexto de sesión que se pasa a los componentes
///
/// Todas las lecturas y escrituras de credenciales pasan por aquí.
#[derive(Clone)]
pub struct SessionContext {
    repository: Arc<dyn SessionRepository>,
}

impl SessionContext {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn SessionRepository> {
        &self.repository
    }

    pub async fn token(&self) -> AdminResult<Option<String>> {
        Ok(self
            .repository
            .get_item(StorageKey::Token)
            .await?
            .filter(|t| !t.is_empty()))
    }

    pub async fn cached_user(&self) -> AdminResult<CachedUser> {
        match self.repository.get_item(StorageKey::User).await? {
            None => Ok(CachedUser::Missing),
            Some(raw) => match serde_json::from_str::<AdminUser>(&raw) {
                Ok(user) => Ok(CachedUser::Valid(user)),
                Err(e) => {
                    warn!("⚠️ Usuario cacheado ilegible: {}", e);
                    Ok(CachedUser::Unreadable)
                }
            },
        }
    }

    /// Token de la cookie, si existe y no expiró
    pub async fn cookie_token(&self) -> AdminResult<Option<String>> {
        Ok(self
            .repository
            .get_cookie()
            .await?
            .filter(|c| !c.is_expired())
            .map(|c| c.value))
    }

    /// Guardar token + usuario en el almacenamiento local y el token en la cookie
    pub async fn store_login(&self, token: &str, user: &AdminUser) -> AdminResult<()> {
        let user_json = serde_json::to_string(user)?;
        self.repository.set_item(StorageKey::Token, token).await?;
        self.repository.set_item(StorageKey::User, &user_json).await?;
        self.repository.set_cookie(SessionCookie::new(token)).await?;
        debug!("💾 Sesión guardada para {}", user.email);
        Ok(())
    }

    /// Borrar token, usuario y cookie
    ///
    /// Intenta los tres borrados aunque alguno falle y devuelve el primer error.
    pub async fn clear(&self) -> AdminResult<()> {
        let results = [
            self.repository.remove_item(StorageKey::Token).await,
            self.repository.remove_item(StorageKey::User).await,
            self.repository.remove_cookie().await,
        ];

        let mut first_error = None;
        for result in results {
            if let Err(e) = result {
                warn!("⚠️ Error limpiando la sesión: {}", e);
                first_error.get_or_insert(e);
            }
        }

        debug!("🗑️ Credenciales eliminadas");
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.repository.subscribe()
    }
}
