use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use suba_admin::config::environment::EnvironmentConfig;
use suba_admin::controllers::{
    prompt, require_admin, AuthController, DriverArgs, DriversController, FareController,
    PassengersController, RoutesController,
};
use suba_admin::services::routing_service::{OsrmRoutingService, RoutingProvider};
use suba_admin::state::AppState;
use suba_admin::utils::errors::AdminResult;

#[derive(Parser, Debug)]
#[command(
    name = "suba-admin",
    author,
    version,
    about = "Panel de administración del sistema de pasajes SUBA",
    long_about = "Gestiona conductores, pasajeros, rutas y el pasaje general del \
                  sistema de buses SUBA contra su backend HTTP.\n\n\
                  La sesión se guarda en SUBA_SESSION_DIR (por defecto .suba-session)."
)]
struct Cli {
    /// Mostrar mensajes de depuración
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Iniciar sesión como administrador
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long, env = "SUBA_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Cerrar la sesión
    Logout,
    /// Estado de la sesión y resumen del panel
    Status,
    /// Gestión de conductores
    #[command(subcommand)]
    Drivers(DriversCommand),
    /// Listado de pasajeros
    #[command(subcommand)]
    Passengers(PassengersCommand),
    /// Gestión de rutas
    #[command(subcommand)]
    Routes(RoutesCommand),
    /// Pasaje general
    #[command(subcommand)]
    Fare(FareCommand),
}

#[derive(Subcommand, Debug)]
enum DriversCommand {
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Create(DriverArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: DriverArgs,
    },
    Delete {
        id: String,
        /// No pedir confirmación
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum PassengersCommand {
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum RoutesCommand {
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Calcular distancia y tiempo entre dos puntos "lat,lng"
    Preview {
        #[arg(long, allow_hyphen_values = true)]
        start: String,
        #[arg(long, allow_hyphen_values = true)]
        end: String,
    },
    Create {
        #[arg(long)]
        name: String,
        /// Origen "lat,lng"
        #[arg(long, allow_hyphen_values = true)]
        start: String,
        /// Destino "lat,lng"
        #[arg(long, allow_hyphen_values = true)]
        end: String,
        #[arg(long)]
        fare: Option<String>,
        /// Horario, repetible
        #[arg(long = "schedule")]
        schedules: Vec<String>,
    },
    /// Activar o desactivar
    Toggle {
        id: String,
    },
    /// Desactivar (la ruta se conserva)
    Deactivate {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
    /// Eliminar permanentemente
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum FareCommand {
    Show,
    Set {
        amount: String,
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("suba_admin=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(state: AppState, command: Command) -> AdminResult<()> {
    match command {
        Command::Login { email, password } => {
            AuthController::new(state).login(email, password).await?;
        }
        Command::Logout => AuthController::new(state).logout().await?,
        Command::Status => AuthController::new(state).status().await?,
        Command::Drivers(command) => {
            require_admin(&state).await?;
            let mut controller = DriversController::new(state.drivers());
            match command {
                DriversCommand::List { search } => controller.list(search).await?,
                DriversCommand::Show { id } => controller.show(&id).await?,
                DriversCommand::Create(fields) => controller.create(fields).await?,
                DriversCommand::Update { id, fields } => controller.update(&id, fields).await?,
                DriversCommand::Delete { id, yes } => controller.delete(&id, yes).await?,
            }
        }
        Command::Passengers(PassengersCommand::List { search }) => {
            require_admin(&state).await?;
            PassengersController::new(state.passengers()).list(search).await?;
        }
        Command::Routes(command) => {
            require_admin(&state).await?;
            let mut controller = RoutesController::new(state.routes());
            match command {
                RoutesCommand::List { search } => controller.list(search).await?,
                RoutesCommand::Preview { start, end } => {
                    let provider: Arc<dyn RoutingProvider> = match &state.routing {
                        Some(provider) => provider.clone(),
                        None => Arc::new(OsrmRoutingService::new(state.config.routing_base_url.clone())?),
                    };
                    controller.preview(provider.as_ref(), &start, &end).await?
                }
                RoutesCommand::Create {
                    name,
                    start,
                    end,
                    fare,
                    schedules,
                } => controller.create(name, &start, &end, fare, schedules).await?,
                RoutesCommand::Toggle { id } => controller.toggle(&id).await?,
                RoutesCommand::Deactivate { id, yes } => controller.deactivate(&id, yes).await?,
                RoutesCommand::Delete { id, yes } => controller.delete(&id, yes).await?,
            }
        }
        Command::Fare(command) => {
            require_admin(&state).await?;
            let mut controller = FareController::new(state.fare());
            match command {
                FareCommand::Show => controller.show().await?,
                FareCommand::Set { amount, yes } => controller.set(&amount, yes).await?,
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Cargar variables de entorno
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = EnvironmentConfig::from_env().context("configuración inválida")?;
    debug!("🔧 Entorno: {}", config.environment.as_str());

    let state = AppState::from_config(config).context("no se pudo inicializar el panel")?;

    match run(state, cli.command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            debug!("❌ Comando fallido: {:?}", e);
            prompt::failure(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}
