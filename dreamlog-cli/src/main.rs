//! dreamlog CLI - A small self-hosted dream journal
//!
//! Entry point for the `dreamlog` command:
//! - `serve` runs the HTTP server (public journal + admin panel)
//! - `init` writes a starter config to edit before first serve

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dreamlog_core::AppConfig;
use dreamlog_server::run_server;

#[derive(Parser, Debug)]
#[command(
    name = "dreamlog",
    author,
    version,
    about = "Publish a dream journal over HTTP",
    long_about = "Publish a dream journal over HTTP: a public paginated listing plus a \
                  password-protected admin area for recording, modifying, and removing dreams."
)]
struct Cli {
    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.dreamlog/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the journal server
    Serve(ServeArgs),
    /// Write a starter config file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Bind address, overriding the config (e.g. 0.0.0.0:8080)
    #[arg(long, value_name = "ADDR")]
    bind: Option<SocketAddr>,

    /// Database file, overriding the config
    #[arg(long, value_name = "PATH")]
    database: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let fallback = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug).ok();

    match cli.command {
        Commands::Serve(args) => run_serve(cli.config, args).await?,
        Commands::Init(args) => run_init(cli.config, args)?,
    }
    Ok(())
}

async fn run_serve(config_path: Option<PathBuf>, args: ServeArgs) -> Result<()> {
    let mut config = match config_path {
        Some(path) => AppConfig::load_from(&path)?,
        None => AppConfig::load()?,
    };

    // Flags beat the file
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(database) = args.database {
        config.database = database;
    }

    run_server(config).await?;
    Ok(())
}

fn run_init(config_path: Option<PathBuf>, args: InitArgs) -> Result<()> {
    let path = config_path.unwrap_or_else(AppConfig::config_path);

    if path.exists() && !args.force {
        bail!(
            "Config already exists at {}\n\nPass --force to overwrite it",
            path.display()
        );
    }

    AppConfig::starter().save_to(&path)?;

    println!("Wrote starter config to {}", path.display());
    println!("Edit the login and password, then run: dreamlog serve");
    Ok(())
}
