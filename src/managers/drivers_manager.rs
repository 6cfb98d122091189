//! Gestión de conductores
//!
//! Listado con búsqueda, formulario de alta/edición y borrado con
//! confirmación. Tras cada mutación el listado se reconcilia con la entidad
//! que devolvió el backend, sin recargar.

use tracing::{error, info};
use validator::Validate;

use crate::client::SubaClient;
use crate::dto::driver_dto::CreateDriverPayload;
use crate::managers::list_state::{ListState, ManagedEntity};
use crate::managers::modal::{DeleteConfirmation, FormModal};
use crate::models::driver::{Driver, DriverStatus};
use crate::utils::errors::{validation_error, AdminResult};

impl ManagedEntity for Driver {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.license_number.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

pub struct DriversManager {
    client: SubaClient,
    list: ListState<Driver>,
    form: FormModal<CreateDriverPayload>,
    deletion: DeleteConfirmation<Driver>,
}

impl DriversManager {
    pub fn new(client: SubaClient) -> Self {
        Self {
            client,
            list: ListState::new(),
            form: FormModal::Closed,
            deletion: DeleteConfirmation::Idle,
        }
    }

    pub fn list(&self) -> &ListState<Driver> {
        &self.list
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.list.set_search(text);
    }

    pub fn filtered(&self) -> Vec<&Driver> {
        self.list.filtered()
    }

    pub fn stats(&self) -> DriverStats {
        let total = self.list.len();
        let active = self
            .list
            .items()
            .iter()
            .filter(|d| d.status == DriverStatus::Active)
            .count();
        DriverStats {
            total,
            active,
            inactive: total - active,
        }
    }

    /// Recargar el listado completo
    pub async fn load(&mut self) -> AdminResult<()> {
        let ticket = self.list.begin_load();
        let result = self.client.get_drivers().await;
        if let Err(e) = &result {
            error!("❌ Error cargando conductores: {}", e);
        }
        if self.list.finish_load(ticket, result)? {
            info!("🚌 {} conductores cargados", self.list.len());
        }
        Ok(())
    }

    /// Detalle de un conductor directamente del backend
    pub async fn fetch(&self, id: &str) -> AdminResult<Driver> {
        self.client.get_driver(id).await
    }

    pub fn form(&self) -> &FormModal<CreateDriverPayload> {
        &self.form
    }

    pub fn form_mut(&mut self) -> Option<&mut CreateDriverPayload> {
        self.form.form_mut()
    }

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Abrir la edición con una copia del conductor (sin contraseña)
    pub fn open_edit(&mut self, id: &str) -> AdminResult<()> {
        let driver = self
            .list
            .get(id)
            .ok_or_else(|| validation_error("Conductor no encontrado"))?;
        let form = CreateDriverPayload::from_driver(driver);
        self.form.open_edit(id, form);
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    /// Enviar el formulario abierto
    ///
    /// Si falla, el modal queda abierto con lo que escribió el usuario.
    pub async fn submit(&mut self) -> AdminResult<Driver> {
        let driver = match &self.form {
            FormModal::Closed => return Err(validation_error("No hay formulario abierto")),
            FormModal::Create(form) => {
                form.validate()?;
                self.client.create_driver(form).await?
            }
            FormModal::Edit { id, form } => {
                let update = form.to_update();
                update.validate()?;
                self.client.update_driver(id, &update).await?
            }
        };

        info!("✅ Conductor guardado: {} ({})", driver.name, driver.id);
        self.list.upsert(driver.clone());
        self.form.close();
        Ok(driver)
    }

    pub fn pending_delete(&self) -> Option<&Driver> {
        self.deletion.pending()
    }

    pub fn request_delete(&mut self, id: &str) -> AdminResult<()> {
        let driver = self
            .list
            .get(id)
            .cloned()
            .ok_or_else(|| validation_error("Conductor no encontrado"))?;
        self.deletion.request(driver);
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
    }

    /// Ejecutar el borrado confirmado
    pub async fn confirm_delete(&mut self) -> AdminResult<Driver> {
        let driver = self
            .deletion
            .pending()
            .cloned()
            .ok_or_else(|| validation_error("No hay borrado pendiente"))?;

        self.client.delete_driver(&driver.id).await?;
        self.list.remove(&driver.id);
        self.deletion.cancel();
        info!("🗑️ Conductor eliminado: {}", driver.name);
        Ok(driver)
    }
}
