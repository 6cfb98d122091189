//! Cliente HTTP para el backend SUBA
//!
//! Cada operación del dominio emite exactamente una petición HTTP contra la
//! URL base configurada, adjunta el token Bearer de la sesión si existe y
//! desenvuelve el sobre JSON de la respuesta. Sin reintentos ni timeouts: un
//! fallo de red llega tal cual a quien llama.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EnvironmentConfig;
use crate::dto::envelope::{Envelope, ErrorBody};
use crate::session::SessionContext;
use crate::utils::errors::{AdminError, AdminResult};

/// Cliente HTTP del panel de administración
#[derive(Clone)]
pub struct SubaClient {
    client: Client,
    base_url: String,
    session: SessionContext,
}

impl SubaClient {
    /// Crear nuevo cliente con la URL base del entorno
    pub fn new(config: &EnvironmentConfig, session: SessionContext) -> AdminResult<Self> {
        Self::with_base_url(config.api_base_url.clone(), session)
    }

    pub fn with_base_url(base_url: impl Into<String>, session: SessionContext) -> AdminResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("suba-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Construir la petición con el token de la sesión, si hay uno
    pub(crate) async fn request(&self, method: Method, path: &str) -> AdminResult<RequestBuilder> {
        debug!("📤 {} {}", method, path);
        let mut builder = self
            .client
            .request(method, self.url(path))
            .header("Accept", "application/json");

        if let Some(token) = self.session.token().await? {
            builder = builder.bearer_auth(token);
        }

        Ok(builder)
    }

    /// Petición sin credenciales (login)
    pub(crate) fn anonymous_request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("📤 {} {}", method, path);
        self.client
            .request(method, self.url(path))
            .header("Accept", "application/json")
    }

    /// Enviar y devolver la respuesta exitosa, o el error del backend
    pub(crate) async fn send(&self, builder: RequestBuilder, fallback: &str) -> AdminResult<Response> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::message)
            .unwrap_or_else(|| fallback.to_string());

        warn!("❌ Backend respondió {}: {}", status, message);
        Err(AdminError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    /// Decodificar el cuerpo completo
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> AdminResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET que devuelve `data` (o el cuerpo directo)
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> AdminResult<T> {
        let builder = self.request(Method::GET, path).await?;
        let response = self.send(builder, fallback).await?;
        Ok(Self::decode::<Envelope<T>>(response).await?.into_inner())
    }

    /// Petición con cuerpo JSON que devuelve `data` (o el cuerpo directo)
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> AdminResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path).await?.json(body);
        let response = self.send(builder, fallback).await?;
        Ok(Self::decode::<Envelope<T>>(response).await?.into_inner())
    }

    /// Petición sin cuerpo que devuelve `data` (o el cuerpo directo)
    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        fallback: &str,
    ) -> AdminResult<T> {
        let builder = self.request(method, path).await?;
        let response = self.send(builder, fallback).await?;
        Ok(Self::decode::<Envelope<T>>(response).await?.into_inner())
    }
}
