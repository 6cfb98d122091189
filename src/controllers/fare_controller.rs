//! Comandos del pasaje general

use colored::*;
use rust_decimal::Decimal;

use crate::controllers::prompt;
use crate::managers::{FareManager, INVALID_FARE_MESSAGE};
use crate::utils::errors::{validation_error, AdminResult};
use crate::utils::validation::parse_amount;
use crate::utils::format::{format_currency, format_optional_date};

pub struct FareController {
    manager: FareManager,
}

impl FareController {
    pub fn new(manager: FareManager) -> Self {
        Self { manager }
    }

    pub async fn show(&mut self) -> AdminResult<()> {
        prompt::title("💰 Pasaje general");
        match self.manager.load().await? {
            Some(fare) => {
                println!("Tarifa vigente: {}", format_currency(fare.fare).green().bold());
                println!("Actualizada:    {}", format_optional_date(fare.updated_at.as_ref()));
            }
            None => prompt::notice("No hay tarifa configurada"),
        }
        Ok(())
    }

    pub async fn set(&mut self, amount: &str, yes: bool) -> AdminResult<()> {
        if !parse_amount(amount).is_some_and(|a| a > Decimal::ZERO) {
            return Err(validation_error(INVALID_FARE_MESSAGE));
        }

        self.manager.load().await?;
        self.manager.set_input(amount);

        match self.manager.change_preview() {
            Some(change) => {
                let percentage = if change.new > change.old {
                    change.display().green()
                } else {
                    change.display().red()
                };
                println!("Cambio: {} ({})", change.summary(), percentage);
            }
            None if self.manager.current().is_some() => {
                prompt::notice("El monto es igual a la tarifa vigente");
            }
            None => {}
        }

        if !prompt::confirm("¿Guardar el nuevo pasaje?", yes)? {
            prompt::cancelled();
            return Ok(());
        }

        let fare = self.manager.save().await?;
        prompt::success(&format!("Pasaje actualizado a {}", format_currency(fare.fare)));
        Ok(())
    }
}
