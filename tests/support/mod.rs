//! Backend SUBA falso para los tests de integración
//!
//! Servidor axum en un puerto efímero con datos en memoria. Cuenta las
//! peticiones recibidas para poder verificar que una validación no tocó la red.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use suba_admin::client::SubaClient;
use suba_admin::models::route::GeoPoint;
use suba_admin::services::auth_service::AuthService;
use suba_admin::services::routing_service::{RoutePreview, RoutingProvider};
use suba_admin::session::{MemorySessionRepository, SessionContext};
use suba_admin::utils::errors::{AdminError, AdminResult};

pub const ADMIN_EMAIL: &str = "admin@suba.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const DRIVER_EMAIL: &str = "chofer@suba.com";
pub const DRIVER_PASSWORD: &str = "chofer123";
pub const DRIVER_TOKEN: &str = "driver-token";

const NOW: &str = "2026-10-19T12:00:00Z";

#[derive(Debug, Default)]
pub struct FakeData {
    pub drivers: Vec<Value>,
    pub passengers: Vec<Value>,
    pub routes: Vec<Value>,
    pub fares: Vec<Value>,
    pub next_id: u32,
    pub fail_logout: bool,
    pub password_sent_on_update: bool,
}

impl FakeData {
    fn seeded() -> Self {
        Self {
            drivers: vec![
                // Documento con el virtual `id` de Mongoose
                json!({
                    "_id": "d1",
                    "id": "d1",
                    "name": "Carlos Rivas",
                    "email": "carlos@suba.com",
                    "licenseNumber": "LIC-001",
                    "phone": "0414-1111111",
                    "status": "Active",
                    "role": "driver",
                    "createdAt": NOW
                }),
                json!({
                    "_id": "d2",
                    "name": "María Pérez",
                    "email": "maria@suba.com",
                    "licenseNumber": "LIC-002",
                    "phone": "0424-2222222",
                    "status": "Inactivo",
                    "role": "driver",
                    "createdAt": NOW
                }),
            ],
            passengers: vec![
                json!({
                    "_id": "p1",
                    "fullName": "Ana Gómez",
                    "email": "ana@correo.com",
                    "credit": 10.5,
                    "role": "passenger",
                    "createdAt": NOW
                }),
                json!({
                    "_id": "p2",
                    "fullName": "Luis Torres",
                    "email": "luis@correo.com",
                    "credit": 20,
                    "role": "passenger"
                }),
            ],
            routes: vec![
                json!({
                    "_id": "r1",
                    "name": "Centro - Unare",
                    "startPoint": {"lat": 8.2976, "lng": -62.7415},
                    "endPoint": {"lat": 8.3101, "lng": -62.7002},
                    "distance": 5.2,
                    "duration": 12.0,
                    "geometry": {"type": "LineString", "coordinates": [[-62.7415, 8.2976], [-62.7002, 8.3101]]},
                    "fare": 2.5,
                    "schedules": ["06:00", "18:00"],
                    "isActive": true,
                    "createdAt": NOW
                }),
                json!({
                    "_id": "r2",
                    "name": "Alta Vista - San Félix",
                    "startPoint": {"lat": 8.2890, "lng": -62.7480},
                    "endPoint": {"lat": 8.3560, "lng": -62.6420},
                    "distance": 14.8,
                    "duration": 31.0,
                    "geometry": {"type": "LineString", "coordinates": [[-62.748, 8.289], [-62.642, 8.356]]},
                    "isActive": true
                }),
            ],
            fares: vec![json!({
                "_id": "f1",
                "routeId": "general",
                "fare": 100,
                "createdAt": NOW,
                "updatedAt": NOW
            })],
            next_id: 100,
            fail_logout: false,
            password_sent_on_update: false,
        }
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}{}", prefix, self.next_id)
    }
}

#[derive(Clone)]
pub struct FakeBackend {
    pub data: Arc<Mutex<FakeData>>,
    requests: Arc<AtomicUsize>,
    pub base_url: String,
}

impl FakeBackend {
    /// Levantar el backend con datos de ejemplo
    pub async fn start() -> Self {
        Self::start_with(FakeData::seeded()).await
    }

    /// Levantar el backend sin ninguna tarifa registrada
    pub async fn start_without_fares() -> Self {
        let mut data = FakeData::seeded();
        data.fares.clear();
        Self::start_with(data).await
    }

    async fn start_with(data: FakeData) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let backend = Self {
            data: Arc::new(Mutex::new(data)),
            requests: Arc::new(AtomicUsize::new(0)),
            base_url: format!("http://{}", addr),
        };

        let app = router(backend.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        backend
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn set_fail_logout(&self, fail: bool) {
        self.data.lock().unwrap().fail_logout = fail;
    }

    pub fn route(&self, id: &str) -> Option<Value> {
        self.data
            .lock()
            .unwrap()
            .routes
            .iter()
            .find(|r| r["_id"] == id)
            .cloned()
    }

    pub fn driver_count(&self) -> usize {
        self.data.lock().unwrap().drivers.len()
    }

    pub fn password_sent_on_update(&self) -> bool {
        self.data.lock().unwrap().password_sent_on_update
    }
}

/// Sesión en memoria y cliente apuntando al backend falso
pub fn anonymous_client(backend: &FakeBackend) -> (Arc<MemorySessionRepository>, SessionContext, SubaClient) {
    let repository = Arc::new(MemorySessionRepository::new());
    let session = SessionContext::new(repository.clone());
    let client = SubaClient::with_base_url(backend.base_url.clone(), session.clone()).unwrap();
    (repository, session, client)
}

/// Cliente con sesión de administrador iniciada
pub async fn admin_client(backend: &FakeBackend) -> SubaClient {
    let (_, session, client) = anonymous_client(backend);
    AuthService::new(client.clone(), session)
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();
    client
}

/// Proveedor de rutas con respuesta fija
pub struct ScriptedRouting {
    fail: bool,
    calls: AtomicUsize,
}

impl ScriptedRouting {
    pub fn ok() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoutingProvider for ScriptedRouting {
    async fn calculate(&self, start: GeoPoint, end: GeoPoint) -> AdminResult<RoutePreview> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AdminError::Routing("Proveedor de rutas no disponible".to_string()));
        }
        Ok(RoutePreview {
            geometry: json!({
                "type": "LineString",
                "coordinates": [[start.lng, start.lat], [end.lng, end.lat]]
            }),
            distance_km: 7.5,
            duration_min: 15.0,
        })
    }
}

fn router(backend: FakeBackend) -> Router {
    Router::new()
        .route("/api/admin/login", post(login))
        .route("/api/admin/logout", post(logout))
        .route("/api/drivers", get(list_drivers).post(create_driver))
        .route("/api/drivers/active", get(active_drivers))
        .route(
            "/api/drivers/:id",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
        .route("/api/passengers", get(list_passengers))
        .route("/api/routes", get(list_routes).post(create_route))
        .route("/api/routes/:id", patch(update_route).delete(deactivate_route))
        .route("/api/routes/:id/permanent", delete(delete_route))
        .route("/api/busfares", get(list_fares).post(create_fare))
        .route("/api/busfares/:id", axum::routing::put(update_fare))
        .route("/route/v1/driving/:coordinates", get(osrm_route))
        .layer(middleware::from_fn_with_state(backend.clone(), count_requests))
        .with_state(backend)
}

async fn count_requests(State(backend): State<FakeBackend>, request: Request, next: Next) -> Response {
    backend.requests.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", ADMIN_TOKEN))
        .unwrap_or(false)
}

fn merge(target: &mut Value, body: &Value, fields: &[&str]) {
    for field in fields {
        if let Some(value) = body.get(*field) {
            target[*field] = value.clone();
        }
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match (email, password) {
        (ADMIN_EMAIL, ADMIN_PASSWORD) => Json(json!({
            "success": true,
            "token": ADMIN_TOKEN,
            "user": {"id": "u1", "email": ADMIN_EMAIL, "role": "admin", "name": "Admin SUBA"}
        }))
        .into_response(),
        (DRIVER_EMAIL, DRIVER_PASSWORD) => Json(json!({
            "success": true,
            "token": DRIVER_TOKEN,
            "user": {"_id": "u2", "email": DRIVER_EMAIL, "role": "driver"}
        }))
        .into_response(),
        _ => error(StatusCode::UNAUTHORIZED, "Credenciales inválidas"),
    }
}

async fn logout(State(backend): State<FakeBackend>, headers: HeaderMap) -> Response {
    if backend.data.lock().unwrap().fail_logout {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Error interno del servidor" })),
        )
            .into_response();
    }
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    Json(json!({ "success": true, "message": "Sesión cerrada exitosamente" })).into_response()
}

async fn list_drivers(State(backend): State<FakeBackend>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let data = backend.data.lock().unwrap();
    Json(json!({ "data": data.drivers })).into_response()
}

async fn active_drivers(State(backend): State<FakeBackend>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let data = backend.data.lock().unwrap();
    let active: Vec<Value> = data
        .drivers
        .iter()
        .filter(|d| d["status"] == "Active" || d["status"] == "Activo")
        .cloned()
        .collect();
    Json(Value::Array(active)).into_response()
}

async fn get_driver(State(backend): State<FakeBackend>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let data = backend.data.lock().unwrap();
    match data.drivers.iter().find(|d| d["_id"] == id.as_str()) {
        Some(driver) => Json(driver.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Conductor no encontrado"),
    }
}

async fn create_driver(State(backend): State<FakeBackend>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    if body["password"].as_str().unwrap_or_default().is_empty() {
        return error(StatusCode::BAD_REQUEST, "Todos los campos son requeridos");
    }

    let mut data = backend.data.lock().unwrap();
    if data.drivers.iter().any(|d| d["email"] == body["email"]) {
        return error(StatusCode::BAD_REQUEST, "El email ya está registrado");
    }

    let id = data.next_id("d");
    let driver = json!({
        "_id": id,
        "name": body["name"],
        "email": body["email"],
        "licenseNumber": body["licenseNumber"],
        "phone": body["phone"],
        "status": body.get("status").cloned().unwrap_or(json!("Active")),
        "role": "driver",
        "createdAt": NOW,
        "updatedAt": NOW
    });
    data.drivers.push(driver.clone());
    (StatusCode::CREATED, Json(json!({ "success": true, "data": driver }))).into_response()
}

async fn update_driver(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let mut data = backend.data.lock().unwrap();
    if body.get("password").is_some() {
        data.password_sent_on_update = true;
    }
    match data.drivers.iter_mut().find(|d| d["_id"] == id.as_str()) {
        Some(driver) => {
            merge(driver, &body, &["name", "email", "licenseNumber", "phone", "status"]);
            driver["updatedAt"] = json!(NOW);
            Json(driver.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Conductor no encontrado"),
    }
}

async fn delete_driver(State(backend): State<FakeBackend>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let mut data = backend.data.lock().unwrap();
    let before = data.drivers.len();
    data.drivers.retain(|d| d["_id"] != id.as_str());
    if data.drivers.len() == before {
        return error(StatusCode::NOT_FOUND, "Conductor no encontrado");
    }
    Json(json!({ "success": true, "message": "Conductor eliminado" })).into_response()
}

async fn list_passengers(State(backend): State<FakeBackend>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let data = backend.data.lock().unwrap();
    Json(json!({ "passengers": data.passengers })).into_response()
}

async fn list_routes(State(backend): State<FakeBackend>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let data = backend.data.lock().unwrap();
    Json(Value::Array(data.routes.clone())).into_response()
}

async fn create_route(State(backend): State<FakeBackend>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let start = body["startPoint"].clone();
    let end = body["endPoint"].clone();

    // Sin geometría del cliente, el backend calcula una línea recta
    let geometry = body.get("geometry").cloned().unwrap_or_else(|| {
        json!({
            "type": "LineString",
            "coordinates": [[start["lng"], start["lat"]], [end["lng"], end["lat"]]]
        })
    });

    let mut data = backend.data.lock().unwrap();
    let id = data.next_id("r");
    let route = json!({
        "_id": id,
        "name": body["name"],
        "startPoint": start,
        "endPoint": end,
        "distance": body.get("distance").cloned().unwrap_or(json!(5.0)),
        "duration": body.get("duration").cloned().unwrap_or(json!(10.0)),
        "geometry": geometry,
        "fare": body.get("fare").cloned().unwrap_or(Value::Null),
        "schedules": body.get("schedules").cloned().unwrap_or(json!([])),
        "isActive": true,
        "createdAt": NOW
    });
    data.routes.push(route.clone());
    (StatusCode::CREATED, Json(json!({ "data": route }))).into_response()
}

async fn update_route(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let mut data = backend.data.lock().unwrap();
    match data.routes.iter_mut().find(|r| r["_id"] == id.as_str()) {
        Some(route) => {
            merge(route, &body, &["name", "fare", "isActive", "schedules"]);
            Json(route.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Ruta no encontrada"),
    }
}

async fn deactivate_route(State(backend): State<FakeBackend>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let mut data = backend.data.lock().unwrap();
    match data.routes.iter_mut().find(|r| r["_id"] == id.as_str()) {
        Some(route) => {
            route["isActive"] = json!(false);
            Json(json!({ "message": "Ruta desactivada", "data": route.clone() })).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Ruta no encontrada"),
    }
}

async fn delete_route(State(backend): State<FakeBackend>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let mut data = backend.data.lock().unwrap();
    let before = data.routes.len();
    data.routes.retain(|r| r["_id"] != id.as_str());
    if data.routes.len() == before {
        return error(StatusCode::NOT_FOUND, "Ruta no encontrada");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_fares(State(backend): State<FakeBackend>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let data = backend.data.lock().unwrap();
    Json(json!({ "data": data.fares })).into_response()
}

fn positive_fare(body: &Value) -> Option<f64> {
    body["fare"].as_f64().filter(|fare| *fare > 0.0)
}

async fn create_fare(State(backend): State<FakeBackend>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let Some(fare) = positive_fare(&body) else {
        return error(StatusCode::BAD_REQUEST, "Monto inválido");
    };
    let mut data = backend.data.lock().unwrap();
    let id = data.next_id("f");
    let record = json!({
        "_id": id,
        "routeId": body["routeId"],
        "fare": fare,
        "createdAt": NOW,
        "updatedAt": NOW
    });
    data.fares.push(record.clone());
    (StatusCode::CREATED, Json(json!({ "data": record }))).into_response()
}

async fn update_fare(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "No autorizado");
    }
    let Some(fare) = positive_fare(&body) else {
        return error(StatusCode::BAD_REQUEST, "Monto inválido");
    };
    let mut data = backend.data.lock().unwrap();
    match data.fares.iter_mut().find(|f| f["_id"] == id.as_str()) {
        Some(record) => {
            record["fare"] = json!(fare);
            record["updatedAt"] = json!(NOW);
            Json(record.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Pasaje no encontrado"),
    }
}

/// Respuesta estilo OSRM: 5.2 km, 12 minutos
async fn osrm_route(Path(coordinates): Path<String>) -> Response {
    let points: Vec<Vec<f64>> = coordinates
        .split(';')
        .map(|pair| pair.split(',').filter_map(|n| n.parse().ok()).collect())
        .collect();
    if points.len() != 2 || points.iter().any(|p| p.len() != 2) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "code": "InvalidQuery", "message": "Coordenadas inválidas" })))
            .into_response();
    }
    if points[0] == points[1] {
        return Json(json!({ "code": "NoRoute", "routes": [] })).into_response();
    }
    Json(json!({
        "code": "Ok",
        "routes": [{
            "geometry": {"type": "LineString", "coordinates": points},
            "distance": 5200.0,
            "duration": 720.0
        }]
    }))
    .into_response()
}
