//! Lucy widget API entry point.
//!
//! Binary name: `lucyd`
//!
//! Parses CLI arguments, initializes the database and conversation
//! service, then starts the REST API server.

mod http;
mod state;

use clap::{ArgAction, Parser};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use state::AppState;

/// Lucy widget API server.
// No Debug derive: the struct holds the Gemini API key in plain text
// until it is wrapped in a SecretString below.
#[derive(Parser)]
#[command(name = "lucyd", version, about = "REST API server for the Lucy support widget")]
struct Cli {
    /// Host to bind the server on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: String,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,lucy_core=debug,lucy_infra=debug,lucy_api=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let api_key = SecretString::from(cli.gemini_api_key);

    // Initialize application state (DB, services)
    let state = AppState::init(&cli.database_url, api_key).await?;

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} Lucy API listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
