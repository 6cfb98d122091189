//! Listado de pasajeros (solo lectura)

use rust_decimal::Decimal;
use tracing::{error, info};

use crate::client::SubaClient;
use crate::managers::list_state::{ListState, ManagedEntity};
use crate::models::passenger::Passenger;
use crate::utils::errors::AdminResult;

impl ManagedEntity for Passenger {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.email.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassengerStats {
    pub total: usize,
    pub total_credit: Decimal,
}

pub struct PassengersManager {
    client: SubaClient,
    list: ListState<Passenger>,
}

impl PassengersManager {
    pub fn new(client: SubaClient) -> Self {
        Self {
            client,
            list: ListState::new(),
        }
    }

    pub fn list(&self) -> &ListState<Passenger> {
        &self.list
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.list.set_search(text);
    }

    pub fn filtered(&self) -> Vec<&Passenger> {
        self.list.filtered()
    }

    pub fn stats(&self) -> PassengerStats {
        PassengerStats {
            total: self.list.len(),
            total_credit: self.list.items().iter().map(|p| p.credit).sum(),
        }
    }

    pub async fn load(&mut self) -> AdminResult<()> {
        let ticket = self.list.begin_load();
        let result = self.client.get_passengers().await;
        if let Err(e) = &result {
            error!("❌ Error cargando pasajeros: {}", e);
        }
        if self.list.finish_load(ticket, result)? {
            info!("👥 {} pasajeros cargados", self.list.len());
        }
        Ok(())
    }
}
