//! HTTP server for the Leave Accrual Engine.

use clap::Parser;
use tracing::info;

use leave_accrual::api::{create_router, AppState};
use leave_accrual::config::ConfigLoader;

/// Leave Accrual Server - computes leave entitlements and balances over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding policy.yaml and branches.yaml
    #[arg(short, long, default_value = "./config/default")]
    config: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Leave Accrual Server");

    let config = ConfigLoader::load(&args.config)?;
    let app = create_router(AppState::new(config));

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
