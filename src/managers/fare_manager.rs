//! Gestión de la tarifa general del pasaje
//!
//! Muestra la tarifa vigente, una vista previa del cambio (anterior, nueva y
//! porcentaje) y guarda actualizando o creando el registro general.

use rust_decimal::Decimal;
use tracing::{error, info};

use crate::client::SubaClient;
use crate::models::fare::BusFare;
use crate::utils::errors::{validation_error, AdminResult};
use crate::utils::format::format_currency;
use crate::utils::validation::parse_amount;

pub const INVALID_FARE_MESSAGE: &str = "Por favor ingresa un monto válido mayor a 0";

/// Vista previa de un cambio de tarifa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareChange {
    pub old: Decimal,
    pub new: Decimal,
    pub percentage: Decimal,
}

impl FareChange {
    /// `None` cuando el porcentaje no cabe en un `Decimal`
    pub fn new(old: Decimal, new: Decimal) -> Option<Self> {
        let percentage = if old.is_zero() {
            Decimal::ZERO
        } else {
            new.checked_sub(old)?
                .checked_div(old)?
                .checked_mul(Decimal::ONE_HUNDRED)?
                .round_dp(2)
        };
        Some(Self {
            old,
            new,
            percentage,
        })
    }

    /// "+50.50%", "-20.00%" o "0.00%"
    pub fn display(&self) -> String {
        let sign = if self.percentage > Decimal::ZERO { "+" } else { "" };
        format!("{}{:.2}%", sign, self.percentage)
    }

    /// "Bs. 100,00 → Bs. 150,50"
    pub fn summary(&self) -> String {
        format!("{} → {}", format_currency(self.old), format_currency(self.new))
    }
}

pub struct FareManager {
    client: SubaClient,
    current: Option<BusFare>,
    input: String,
    loading: bool,
    error: Option<String>,
}

impl FareManager {
    pub fn new(client: SubaClient) -> Self {
        Self {
            client,
            current: None,
            input: String::new(),
            loading: false,
            error: None,
        }
    }

    pub fn current(&self) -> Option<&BusFare> {
        self.current.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Cargar la tarifa general y precargar el input con su monto
    pub async fn load(&mut self) -> AdminResult<Option<BusFare>> {
        self.loading = true;
        let result = self.client.get_general_fare().await;
        self.loading = false;

        match result {
            Ok(fare) => {
                self.input = fare.as_ref().map(|f| f.fare.to_string()).unwrap_or_default();
                if let Some(f) = &fare {
                    info!("💰 Tarifa general vigente: {}", format_currency(f.fare));
                }
                self.current = fare.clone();
                self.error = None;
                Ok(fare)
            }
            Err(e) => {
                error!("❌ Error cargando la tarifa: {}", e);
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Vista previa cuando hay tarifa vigente y el monto ingresado es distinto
    pub fn change_preview(&self) -> Option<FareChange> {
        let current = self.current.as_ref()?;
        let new = parse_amount(&self.input)?;
        if new == current.fare {
            return None;
        }
        FareChange::new(current.fare, new)
    }

    /// Guardar el monto ingresado
    pub async fn save(&mut self) -> AdminResult<BusFare> {
        let amount = match parse_amount(&self.input) {
            Some(amount) if amount > Decimal::ZERO => amount,
            _ => return Err(validation_error(INVALID_FARE_MESSAGE)),
        };

        let result = match &self.current {
            Some(current) => self.client.update_general_fare(&current.id, amount).await,
            None => self.client.create_general_fare(amount).await,
        };

        match result {
            Ok(fare) => {
                info!("✅ Pasaje actualizado a {}", format_currency(fare.fare));
                self.input = fare.fare.to_string();
                self.current = Some(fare.clone());
                self.error = None;
                Ok(fare)
            }
            Err(e) => {
                error!("❌ Error guardando el pasaje: {}", e);
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}
