//! Comandos de pasajeros

use colored::*;

use crate::controllers::prompt::{self, cell};
use crate::managers::PassengersManager;
use crate::utils::errors::AdminResult;
use crate::utils::format::{format_currency, format_optional_date};

pub struct PassengersController {
    manager: PassengersManager,
}

impl PassengersController {
    pub fn new(manager: PassengersManager) -> Self {
        Self { manager }
    }

    pub async fn list(&mut self, search: Option<String>) -> AdminResult<()> {
        self.manager.load().await?;
        if let Some(term) = search {
            self.manager.set_search(term);
        }

        let stats = self.manager.stats();
        prompt::title("👥 Pasajeros");
        println!(
            "Total: {}  Crédito acumulado: {}",
            stats.total,
            format_currency(stats.total_credit).green()
        );

        let passengers = self.manager.filtered();
        if passengers.is_empty() {
            prompt::notice("No se encontraron pasajeros");
            return Ok(());
        }
        println!();
        println!(
            "{}",
            format!(
                "{} {} {} {}",
                cell("Nombre", 28),
                cell("Email", 30),
                cell("Crédito", 16),
                "Registro"
            )
            .bold()
        );
        for passenger in passengers {
            println!(
                "{} {} {} {}",
                cell(&passenger.full_name, 28),
                cell(&passenger.email, 30),
                cell(&format_currency(passenger.credit), 16),
                format_optional_date(passenger.created_at.as_ref()).dimmed()
            );
        }
        Ok(())
    }
}
