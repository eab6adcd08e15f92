//! Ledger service CLI server
//!
//! ```sh
//! # Run with default config (~/.config/ledger-service/config.toml)
//! ledger-service
//!
//! # Custom config path
//! ledger-service --config /etc/ledger-service/config.toml
//!
//! # Override the port
//! ledger-service --port 3000
//!
//! # Validate config without starting
//! ledger-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use ledger::config::AppConfig;
use ledger::server::{init_tracing, ServerHandle, ServerOptions};

/// Ledger service: CRUD API over types, categories and transactions.
#[derive(Parser, Debug)]
#[command(
    name = "ledger-service",
    version,
    about = "CRUD HTTP API over types, categories and transactions",
    long_about = "REST API server for a small ledger of types, categories and transactions, \
                  backed by SQLite through SeaORM.\n\n\
                  Default config: ~/.config/ledger-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "LEDGER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(ledger::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if cli.check => {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            return Err(e.into());
        }
    };
    cli.apply_overrides(&mut config);

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Listen      : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!(
            "   Pool        : {}..{} connections",
            config.database.pool.min_connections, config.database.pool.max_connections
        );
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["ledger-service", "--port", "3000", "-l", "debug"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "debug");
        assert!(!cli.check);
    }

    #[test]
    fn check_and_no_migrate_flags() {
        let cli = Cli::parse_from(["ledger-service", "--check", "--no-migrate"]);
        assert!(cli.check);
        assert!(cli.no_migrate);
        assert!(cli.port.is_none());
    }
}
