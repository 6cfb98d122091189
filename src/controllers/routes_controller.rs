//! Comandos de rutas

use colored::*;

use crate::controllers::prompt::{self, cell};
use crate::managers::{ClickOutcome, RoutesManager};
use crate::models::route::Route;
use crate::services::routing_service::RoutingProvider;
use crate::utils::errors::{validation_error, AdminResult};
use crate::utils::format::format_currency;
use crate::utils::validation::parse_point;

pub struct RoutesController {
    manager: RoutesManager,
}

impl RoutesController {
    pub fn new(manager: RoutesManager) -> Self {
        Self { manager }
    }

    fn print_route(route: &Route) {
        let status = if route.is_active {
            "Activa".green()
        } else {
            "Inactiva".red()
        };
        let fare = route
            .fare
            .map(format_currency)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} {} {} {} {} {}",
            cell(&route.id, 24).dimmed(),
            cell(&route.name, 26),
            cell(&route.formatted_distance(), 10),
            cell(&route.formatted_duration(), 8),
            cell(&fare, 12),
            status
        );
    }

    pub async fn list(&mut self, search: Option<String>) -> AdminResult<()> {
        self.manager.load().await?;
        if let Some(term) = search {
            self.manager.set_search(term);
        }

        let stats = self.manager.stats();
        prompt::title("🗺️ Rutas");
        println!("Total: {}  Activas: {}", stats.total, stats.active.to_string().green());

        let routes = self.manager.filtered();
        if routes.is_empty() {
            prompt::notice("No se encontraron rutas");
            return Ok(());
        }
        println!();
        println!(
            "{}",
            format!(
                "{} {} {} {} {} {}",
                cell("ID", 24),
                cell("Nombre", 26),
                cell("Distancia", 10),
                cell("Tiempo", 8),
                cell("Tarifa", 12),
                "Estado"
            )
            .bold()
        );
        for route in routes {
            Self::print_route(route);
        }
        Ok(())
    }

    /// Calcular una ruta sin guardarla
    pub async fn preview(&self, provider: &dyn RoutingProvider, start: &str, end: &str) -> AdminResult<()> {
        let start = parse_point(start)?;
        let end = parse_point(end)?;
        let preview = provider.calculate(start, end).await?;

        prompt::title("🧭 Vista previa de ruta");
        println!("Origen:    {}", start.display());
        println!("Destino:   {}", end.display());
        println!("Distancia: {}", preview.formatted_distance());
        println!("Tiempo:    {}", preview.formatted_duration());
        println!(
            "Puntos:    {}",
            crate::models::route::polyline_from_geometry(&preview.geometry).len()
        );
        Ok(())
    }

    pub async fn create(
        &mut self,
        name: String,
        start: &str,
        end: &str,
        fare: Option<String>,
        schedules: Vec<String>,
    ) -> AdminResult<()> {
        let start = parse_point(start)?;
        let end = parse_point(end)?;

        self.manager.reset_draft();
        self.manager.click(start).await?;
        if self.manager.click(end).await? == ClickOutcome::Ignored {
            return Err(validation_error("No se pudo marcar el destino"));
        }

        {
            let draft = self.manager.draft_mut();
            draft.name = name;
            draft.fare_input = fare.unwrap_or_default();
            draft.schedules = schedules;
        }
        if let Some(preview) = self.manager.draft().preview() {
            println!(
                "🧭 {} / {}",
                preview.formatted_distance(),
                preview.formatted_duration()
            );
        }

        let route = self.manager.save_draft().await?;
        prompt::success(&format!("Ruta creada: {} ({})", route.name, route.id));
        Ok(())
    }

    pub async fn toggle(&mut self, id: &str) -> AdminResult<()> {
        self.manager.load().await?;
        let route = self.manager.toggle_active(id).await?;
        let state = if route.is_active { "activada" } else { "desactivada" };
        prompt::success(&format!("Ruta {} {}", route.name, state));
        Ok(())
    }

    pub async fn deactivate(&mut self, id: &str, yes: bool) -> AdminResult<()> {
        self.manager.load().await?;
        let name = self
            .manager
            .list()
            .get(id)
            .map(|r| r.name.clone())
            .ok_or_else(|| validation_error("Ruta no encontrada"))?;

        if !prompt::confirm(&format!("¿Desactivar la ruta {}?", name), yes)? {
            prompt::cancelled();
            return Ok(());
        }
        let route = self.manager.deactivate(id).await?;
        prompt::success(&format!("Ruta desactivada: {}", route.name));
        Ok(())
    }

    pub async fn delete(&mut self, id: &str, yes: bool) -> AdminResult<()> {
        self.manager.load().await?;
        self.manager.request_delete(id)?;

        let name = self
            .manager
            .pending_delete()
            .map(|r| r.name.clone())
            .unwrap_or_default();
        let question = format!(
            "¿Eliminar PERMANENTEMENTE la ruta {}? Esta acción no se puede deshacer",
            name
        );
        if !prompt::confirm(&question, yes)? {
            self.manager.cancel_delete();
            prompt::cancelled();
            return Ok(());
        }

        let route = self.manager.confirm_delete().await?;
        prompt::success(&format!("Ruta eliminada: {}", route.name));
        Ok(())
    }
}
