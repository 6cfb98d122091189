//! Comandos de conductores

use clap::Args;
use colored::*;

use crate::controllers::prompt::{self, cell, secret_or_prompt, value_or_prompt};
use crate::managers::DriversManager;
use crate::models::driver::{Driver, DriverStatus};
use crate::utils::errors::{validation_error, AdminResult};
use crate::utils::format::format_optional_date;

/// Campos del formulario de conductor
#[derive(Debug, Clone, Default, Args)]
pub struct DriverArgs {
    /// Nombre completo
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Solo al crear
    #[arg(long)]
    pub password: Option<String>,

    /// Número de licencia
    #[arg(long)]
    pub license: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Active | Inactive
    #[arg(long)]
    pub status: Option<String>,
}

fn parse_status(value: &str) -> AdminResult<DriverStatus> {
    DriverStatus::from_str(value).ok_or_else(|| validation_error("Estado inválido, use Active o Inactive"))
}

pub struct DriversController {
    manager: DriversManager,
}

impl DriversController {
    pub fn new(manager: DriversManager) -> Self {
        Self { manager }
    }

    fn print_driver_row(driver: &Driver) {
        let status = match driver.status {
            DriverStatus::Active => driver.status.label().green(),
            DriverStatus::Inactive => driver.status.label().red(),
        };
        println!(
            "{} {} {} {} {} {}",
            cell(&driver.id, 24).dimmed(),
            cell(&driver.name, 24),
            cell(&driver.email, 28),
            cell(&driver.license_number, 14),
            cell(&driver.phone, 14),
            status
        );
    }

    pub async fn list(&mut self, search: Option<String>) -> AdminResult<()> {
        self.manager.load().await?;
        if let Some(term) = search {
            self.manager.set_search(term);
        }

        let stats = self.manager.stats();
        prompt::title("🚌 Conductores");
        println!(
            "Total: {}  Activos: {}  Inactivos: {}",
            stats.total,
            stats.active.to_string().green(),
            stats.inactive.to_string().red()
        );

        let drivers = self.manager.filtered();
        if drivers.is_empty() {
            prompt::notice("No se encontraron conductores");
            return Ok(());
        }
        println!();
        println!(
            "{}",
            format!(
                "{} {} {} {} {} {}",
                cell("ID", 24),
                cell("Nombre", 24),
                cell("Email", 28),
                cell("Licencia", 14),
                cell("Teléfono", 14),
                "Estado"
            )
            .bold()
        );
        for driver in drivers {
            Self::print_driver_row(driver);
        }
        Ok(())
    }

    pub async fn show(&self, id: &str) -> AdminResult<()> {
        let driver = self.manager.fetch(id).await?;
        prompt::title(&format!("🚌 {}", driver.name));
        println!("ID:        {}", driver.id);
        println!("Email:     {}", driver.email);
        println!("Licencia:  {}", driver.license_number);
        println!("Teléfono:  {}", driver.phone);
        println!("Estado:    {}", driver.status.label());
        println!("Registro:  {}", format_optional_date(driver.created_at.as_ref()));
        Ok(())
    }

    pub async fn create(&mut self, args: DriverArgs) -> AdminResult<()> {
        self.manager.open_create();
        let status = args.status.as_deref().map(parse_status).transpose()?;

        if let Some(form) = self.manager.form_mut() {
            form.name = value_or_prompt(args.name, "Nombre")?;
            form.email = value_or_prompt(args.email, "Email")?;
            form.password = secret_or_prompt(args.password, "Contraseña")?;
            form.license_number = value_or_prompt(args.license, "Licencia")?;
            form.phone = value_or_prompt(args.phone, "Teléfono")?;
            if let Some(status) = status {
                form.status = status;
            }
        }

        let driver = self.manager.submit().await?;
        prompt::success(&format!("Conductor creado: {} ({})", driver.name, driver.id));
        Ok(())
    }

    pub async fn update(&mut self, id: &str, args: DriverArgs) -> AdminResult<()> {
        if args.password.is_some() {
            return Err(validation_error("La contraseña no se modifica desde la edición"));
        }
        let status = args.status.as_deref().map(parse_status).transpose()?;

        self.manager.load().await?;
        self.manager.open_edit(id)?;
        if let Some(form) = self.manager.form_mut() {
            if let Some(name) = args.name {
                form.name = name;
            }
            if let Some(email) = args.email {
                form.email = email;
            }
            if let Some(license) = args.license {
                form.license_number = license;
            }
            if let Some(phone) = args.phone {
                form.phone = phone;
            }
            if let Some(status) = status {
                form.status = status;
            }
        }

        let driver = self.manager.submit().await?;
        prompt::success(&format!("Conductor actualizado: {}", driver.name));
        Ok(())
    }

    pub async fn delete(&mut self, id: &str, yes: bool) -> AdminResult<()> {
        self.manager.load().await?;
        self.manager.request_delete(id)?;

        let name = self
            .manager
            .pending_delete()
            .map(|d| d.name.clone())
            .unwrap_or_default();
        if !prompt::confirm(&format!("¿Eliminar al conductor {}?", name), yes)? {
            self.manager.cancel_delete();
            prompt::cancelled();
            return Ok(());
        }

        let driver = self.manager.confirm_delete().await?;
        prompt::success(&format!("Conductor eliminado: {}", driver.name));
        Ok(())
    }
}
