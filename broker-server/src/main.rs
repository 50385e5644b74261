//! Service broker server
//!
//! Serves the Open Service Broker catalog built from service class and
//! service plan configs.
//!
//! Usage:
//!   broker-server --port 9091 --config-dir ./configs

use anyhow::{Context, Result};
use broker_catalog::ListErrorPolicy;
use broker_server::{bootstrap, build_router, ServerConfig};
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "broker-server")]
#[command(about = "Service broker serving the OSB catalog")]
struct Args {
    /// Address to bind the HTTP API on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(short, long, default_value = "9091")]
    port: u16,

    /// Directory of YAML/JSON config files to load at startup
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Fail catalog requests when the store cannot list configs
    #[arg(long)]
    propagate_list_errors: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            config_dir: args.config_dir,
            list_errors: if args.propagate_list_errors {
                ListErrorPolicy::Propagate
            } else {
                ListErrorPolicy::Suppress
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = ServerConfig::from(args);
    info!("Service broker starting...");
    let (store, controller) = bootstrap(&config)?;
    info!("Config store ready with {} objects", store.len());

    let app = build_router(Arc::new(controller));
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Broker API listening on {}", addr);
    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
