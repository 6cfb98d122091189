//! Enrutamiento previo al render
//!
//! Decide, solo con la cookie `token`, si una navegación a una ruta protegida
//! sigue adelante o se redirige al login, y agrega cabeceras anti-caché.

use super::auth_guard::{DASHBOARD_PATH, LOGIN_PATH};

const PROTECTED_PATHS: [&str; 1] = [DASHBOARD_PATH];

const NO_STORE_HEADERS: [(&str, &str); 3] = [
    ("Cache-Control", "no-store, no-cache, must-revalidate, proxy-revalidate"),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    Next,
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    pub action: RouteAction,
    pub headers: Vec<(&'static str, &'static str)>,
}

impl RoutingDecision {
    fn next(no_store: bool) -> Self {
        Self {
            action: RouteAction::Next,
            headers: if no_store { NO_STORE_HEADERS.to_vec() } else { Vec::new() },
        }
    }

    fn redirect(location: String, no_store: bool) -> Self {
        Self {
            action: RouteAction::Redirect(location),
            headers: if no_store { NO_STORE_HEADERS.to_vec() } else { Vec::new() },
        }
    }

    pub fn redirect_location(&self) -> Option<&str> {
        match &self.action {
            RouteAction::Redirect(location) => Some(location),
            RouteAction::Next => None,
        }
    }
}

pub fn is_protected(path: &str) -> bool {
    PROTECTED_PATHS.iter().any(|prefix| path.starts_with(prefix))
}

/// Decidir qué hacer con una navegación a `path`
pub fn route_request(path: &str, cookie_token: Option<&str>) -> RoutingDecision {
    let has_token = cookie_token.map(|t| !t.is_empty()).unwrap_or(false);
    let protected = is_protected(path);

    if protected && !has_token {
        let location = format!("{}?redirect={}", LOGIN_PATH, urlencoding::encode(path));
        return RoutingDecision::redirect(location, true);
    }

    if path == LOGIN_PATH && has_token {
        return RoutingDecision::redirect(DASHBOARD_PATH.to_string(), false);
    }

    RoutingDecision::next(protected)
}
