//! Folio relay daemon entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use folio_core::{init_tracing, ResendMailer};
use foliod::config::Config;
use foliod::routes::router;
use foliod::state::AppState;

#[derive(Parser)]
#[command(name = "foliod")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Folio contact relay daemon", long_about = None)]
struct Args {
    /// Port to listen on (overrides FOLIO_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    init_tracing(args.json, level);

    // Misconfiguration is a startup failure, not a per-request one.
    let config = Config::from_env().context("relay configuration")?;
    let port = args.port.unwrap_or(config.port);

    let mailer = Arc::new(ResendMailer::new(config.resend_api_key.clone()));
    let state = AppState::new(mailer, &config.contact_from, &config.contact_to);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "foliod listening");
    axum::serve(listener, router(state))
        .await
        .context("server error")?;

    Ok(())
}
