//! # Corkboard Server
//!
//! Accounts, sessions, and per-user card themes over HTTP.
//!
//! ## Usage
//!
//! ```text
//! corkboard-server [--host HOST] [--port PORT] [--config PATH]
//! corkboard-server db migrate
//! corkboard-server db rollback
//! ```

use anyhow::{Context, anyhow};
use clap::{Args as ClapArgs, Parser, Subcommand};
use corkboard_core::{
    application::AppUnitOfWork,
    database::{InMemoryDatabase, PostgresDatabase},
};
use corkboard_server::{
    AppState, create_app,
    infra::config::{Config, ConfigLoad, ConfigLoader},
};
use std::{path::PathBuf, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "corkboard-server")]
#[command(about = "Corkboard account and card theme server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Path to corkboard.toml
    #[arg(long, env = "CORKBOARD_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply database migrations and exit
    Migrate,
    /// Revert the most recently applied migration and exit
    Rollback,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_runtime_config(&cli.serve)?;

    match cli.command {
        Some(Command::Db(DbCommand::Migrate)) => run_db_migrate(&config).await,
        Some(Command::Db(DbCommand::Rollback)) => {
            run_db_rollback(&config).await
        }
        None => run_server(config).await,
    }
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = args.config.clone() {
        loader = loader.with_config_path(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "loaded configuration file");
    }

    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    Ok(config)
}

async fn connect_postgres(config: &Config) -> anyhow::Result<PostgresDatabase> {
    let url = config
        .database
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("DATABASE_URL is required for this command"))?;
    PostgresDatabase::new(url)
        .await
        .context("failed to connect to PostgreSQL")
}

async fn run_db_migrate(config: &Config) -> anyhow::Result<()> {
    let pg = connect_postgres(config).await?;
    pg.initialize_schema()
        .await
        .context("database migration failed")?;
    info!("Database migrations applied successfully");
    Ok(())
}

async fn run_db_rollback(config: &Config) -> anyhow::Result<()> {
    let pg = connect_postgres(config).await?;
    match pg
        .rollback_latest()
        .await
        .context("database rollback failed")?
    {
        Some(version) => info!(version, "Reverted migration"),
        None => info!("No applied migrations to revert"),
    }
    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let (unit_of_work, postgres) = match config.database.url.as_deref() {
        Some(_) => {
            let pg = Arc::new(connect_postgres(&config).await?);
            pg.initialize_schema()
                .await
                .context("database migration failed")?;
            (AppUnitOfWork::from_postgres(&pg), Some(pg))
        }
        None if config.dev_mode => {
            warn!("DEV_MODE without DATABASE_URL: using the in-memory store");
            (AppUnitOfWork::in_memory(InMemoryDatabase::new()), None)
        }
        None => {
            return Err(anyhow!(
                "DATABASE_URL must be set unless DEV_MODE is enabled"
            ));
        }
    };

    let bind_address = config.server.bind_address();
    let state = AppState::new(Arc::new(config), Arc::new(unit_of_work), postgres)
        .context("failed to initialise authentication")?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(address = %bind_address, "Corkboard server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
