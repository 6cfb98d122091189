//! API de pasajeros (solo lectura)

use reqwest::Method;

use crate::client::SubaClient;
use crate::dto::envelope::PassengersEnvelope;
use crate::models::passenger::Passenger;
use crate::utils::errors::AdminResult;

impl SubaClient {
    /// Obtener todos los pasajeros
    pub async fn get_passengers(&self) -> AdminResult<Vec<Passenger>> {
        let builder = self.request(Method::GET, "/api/passengers").await?;
        let response = self.send(builder, "Error al obtener pasajeros").await?;
        Ok(Self::decode::<PassengersEnvelope<Passenger>>(response)
            .await?
            .into_inner())
    }
}
