use anyhow::Result;
use clap::{Parser, Subcommand};
use rasoi_core::{ApiGateway, SessionStore};
use rasoi_infrastructure::{ConfigService, FileSessionStore};
use rasoi_interaction::HttpApiGateway;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rasoi")]
#[command(about = "Rasoi CLI - plan your weekly menu", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account on the menu service
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and persist the session
    Login {
        username: String,
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Walk through preference selection
    Preferences {
        /// Start from the preferences already stored on the service
        #[arg(long)]
        update: bool,
    },
    /// Show the dashboard overview
    Dashboard,
    /// Generate a fresh weekly menu
    Generate,
    /// Replace one meal of the current menu
    RegenerateMeal {
        /// Day of the week, e.g. Monday
        day: String,
        /// Meal slot, e.g. lunch
        meal: String,
        /// Menu to modify; defaults to the active one
        #[arg(long)]
        menu_id: Option<i64>,
    },
    /// List previously generated menus
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Interactive session that walks the app's screens
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ConfigService::new().get_config();
    let gateway: Arc<dyn ApiGateway> = Arc::new(HttpApiGateway::from_config(&config));
    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::at_default_location()?);

    match cli.command {
        Commands::Register {
            username,
            email,
            password,
        } => commands::auth::register(gateway, username, email, password).await?,
        Commands::Login { username, password } => {
            commands::auth::login(gateway, store, username, password).await?
        }
        Commands::Logout => commands::auth::logout(store)?,
        Commands::Whoami => commands::auth::whoami(store)?,
        Commands::Preferences { update } => {
            commands::preferences::run(gateway, store, update).await?
        }
        Commands::Dashboard => commands::dashboard::show(gateway, store, &config).await?,
        Commands::Generate => commands::dashboard::generate(gateway, store, &config).await?,
        Commands::RegenerateMeal { day, meal, menu_id } => {
            commands::dashboard::regenerate_meal(gateway, store, &config, menu_id, day, meal)
                .await?
        }
        Commands::History { limit } => {
            let limit = limit.unwrap_or(config.history_limit);
            commands::dashboard::history(gateway, store, limit).await?
        }
        Commands::Shell => commands::shell::run(gateway, store, &config).await?,
    }

    Ok(())
}
