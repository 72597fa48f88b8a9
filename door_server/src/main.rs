//! # Door Calculator HTTP Service
//!
//! Thin hosting layer around `door_core`: binds a socket, registers the
//! calculation route plus liveness/health probes, and maps calculation
//! errors onto HTTP response classes. Swapping the transport means
//! replacing this binary; the calculator itself stays untouched.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;

#[derive(Parser, Debug)]
#[command(name = "door_server", about = "HTTP front-end for the door dimension calculator")]
struct Args {
    /// Socket address to listen on
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: std::net::SocketAddr,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("door_server=debug,door_core=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("Door Calculator API listening on {}", args.bind);

    axum::serve(listener, api::create_router()).await?;
    Ok(())
}
