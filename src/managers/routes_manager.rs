//! Gestión de rutas
//!
//! Listado, borrador dibujado sobre el mapa y acciones de activación,
//! desactivación (borrado lógico) y borrado permanente.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::client::SubaClient;
use crate::config::environment::CalculationMode;
use crate::dto::route_dto::UpdateRoutePayload;
use crate::managers::list_state::{ListState, ManagedEntity};
use crate::managers::modal::DeleteConfirmation;
use crate::managers::route_draft::{ClickOutcome, DraftState, RouteDraft};
use crate::models::route::{GeoPoint, Route};
use crate::services::routing_service::RoutingProvider;
use crate::utils::errors::{validation_error, AdminResult};

impl ManagedEntity for Route {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteStats {
    pub total: usize,
    pub active: usize,
}

pub struct RoutesManager {
    client: SubaClient,
    provider: Option<Arc<dyn RoutingProvider>>,
    mode: CalculationMode,
    list: ListState<Route>,
    draft: RouteDraft,
    deletion: DeleteConfirmation<Route>,
}

impl RoutesManager {
    /// Gestor que deja el cálculo de la geometría al backend
    pub fn new(client: SubaClient) -> Self {
        Self {
            client,
            provider: None,
            mode: CalculationMode::Backend,
            list: ListState::new(),
            draft: RouteDraft::new(),
            deletion: DeleteConfirmation::Idle,
        }
    }

    /// Gestor que calcula la geometría con un proveedor externo
    pub fn with_provider(client: SubaClient, provider: Arc<dyn RoutingProvider>) -> Self {
        Self {
            provider: Some(provider),
            mode: CalculationMode::Client,
            ..Self::new(client)
        }
    }

    pub fn mode(&self) -> CalculationMode {
        self.mode
    }

    pub fn list(&self) -> &ListState<Route> {
        &self.list
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.list.set_search(text);
    }

    pub fn filtered(&self) -> Vec<&Route> {
        self.list.filtered()
    }

    pub fn stats(&self) -> RouteStats {
        RouteStats {
            total: self.list.len(),
            active: self.list.items().iter().filter(|r| r.is_active).count(),
        }
    }

    pub async fn load(&mut self) -> AdminResult<()> {
        let ticket = self.list.begin_load();
        let result = self.client.get_routes().await;
        if let Err(e) = &result {
            error!("❌ Error cargando rutas: {}", e);
        }
        if self.list.finish_load(ticket, result)? {
            info!("🗺️ {} rutas cargadas", self.list.len());
        }
        Ok(())
    }

    pub fn draft(&self) -> &RouteDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut RouteDraft {
        &mut self.draft
    }

    pub fn reset_draft(&mut self) {
        self.draft.reset();
    }

    /// Clic en el mapa
    ///
    /// En modo cliente el destino solo se acepta si el proveedor calcula la
    /// ruta; si falla, el borrador sigue con el origen solamente.
    pub async fn click(&mut self, point: GeoPoint) -> AdminResult<ClickOutcome> {
        let provider = match (self.mode, &self.provider) {
            (CalculationMode::Client, Some(provider)) => provider.clone(),
            _ => return Ok(self.draft.click(point)),
        };

        let start = match self.draft.state() {
            DraftState::StartOnly { start } => start,
            _ => return Ok(self.draft.click(point)),
        };

        let preview = provider.calculate(start, point).await.map_err(|e| {
            warn!("⚠️ No se pudo calcular la ruta: {}", e);
            e
        })?;

        let outcome = self.draft.click(point);
        info!(
            "🧭 Ruta calculada: {} / {}",
            preview.formatted_distance(),
            preview.formatted_duration()
        );
        self.draft.set_preview(preview);
        Ok(outcome)
    }

    /// Crear la ruta del borrador y reiniciarlo
    pub async fn save_draft(&mut self) -> AdminResult<Route> {
        let payload = self.draft.to_payload()?;
        let route = self.client.create_route(&payload).await?;

        info!("✅ Ruta creada: {} ({})", route.name, route.id);
        self.list.upsert(route.clone());
        self.draft.reset();
        Ok(route)
    }

    fn find(&self, id: &str) -> AdminResult<&Route> {
        self.list
            .get(id)
            .ok_or_else(|| validation_error("Ruta no encontrada"))
    }

    /// Cambiar `isActive` al valor opuesto
    pub async fn toggle_active(&mut self, id: &str) -> AdminResult<Route> {
        let next = !self.find(id)?.is_active;
        let route = self
            .client
            .update_route(id, &UpdateRoutePayload::activation(next))
            .await?;

        info!(
            "🔁 Ruta {} {}",
            route.name,
            if route.is_active { "activada" } else { "desactivada" }
        );
        self.list.upsert(route.clone());
        Ok(route)
    }

    /// Borrado lógico: la ruta sigue en el listado, inactiva
    pub async fn deactivate(&mut self, id: &str) -> AdminResult<Route> {
        self.find(id)?;
        let route = self.client.deactivate_route(id).await?;

        info!("⏸️ Ruta desactivada: {}", route.name);
        self.list.upsert(route.clone());
        Ok(route)
    }

    pub fn pending_delete(&self) -> Option<&Route> {
        self.deletion.pending()
    }

    pub fn request_delete(&mut self, id: &str) -> AdminResult<()> {
        let route = self.find(id)?.clone();
        self.deletion.request(route);
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
    }

    /// Borrado permanente confirmado
    pub async fn confirm_delete(&mut self) -> AdminResult<Route> {
        let route = self
            .deletion
            .pending()
            .cloned()
            .ok_or_else(|| validation_error("No hay borrado pendiente"))?;

        self.client.delete_route(&route.id).await?;
        self.list.remove(&route.id);
        self.deletion.cancel();
        info!("🗑️ Ruta eliminada permanentemente: {}", route.name);
        Ok(route)
    }
}
