//! mergelabd - deliberately vulnerable profile service
//!
//! A small HTTP daemon built to demonstrate shared-default pollution
//! through recursive merging:
//! - unguarded deployments redirect structural update keys into a
//!   process-wide default store
//! - guarded deployments sanitize the same traffic and confine it
//!
//! Run it only on loopback, and only to study the failure mode.

use clap::Parser;
use mergelab_engine::MergePolicy;
use mergelab_http::{config::ServerConfig, error::ServerError, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Mergelab daemon CLI
#[derive(Parser)]
#[command(name = "mergelabd")]
#[command(about = "Deliberately vulnerable deep-merge profile service", long_about = None)]
#[command(version)]
struct Cli {
    /// Listen address
    #[arg(
        short,
        long,
        env = "MERGELAB_LISTEN_ADDR",
        default_value = "127.0.0.1:3000"
    )]
    listen: String,

    /// Merge policy: unguarded (the lab default) or guarded
    #[arg(short, long, env = "MERGELAB_POLICY", default_value = "unguarded")]
    policy: String,

    /// Directory uploads are written to
    #[arg(long, env = "MERGELAB_UPLOADS_DIR", default_value = "uploads")]
    uploads_dir: String,

    /// Log level
    #[arg(long, env = "MERGELAB_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "MERGELAB_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let listen_addr = cli
        .listen
        .parse()
        .map_err(|e| ServerError::Config(format!("invalid listen address: {e}")))?;
    let policy: MergePolicy = cli
        .policy
        .parse()
        .map_err(ServerError::Config)?;

    let config = ServerConfig {
        listen_addr,
        policy,
        uploads_dir: cli.uploads_dir.into(),
    };

    Server::new(config).run().await?;
    Ok(())
}
