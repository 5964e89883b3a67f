use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use clap::{Parser, Subcommand};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use contacts::domain::service::ContactService;
use contacts::infra::seed::seed_contacts;
use contacts::infra::storage::InMemoryContactsRepository;
use runtime::{ApiConfig, AppConfig, CliArgs};

mod web;

/// CRM server - contact directory with search, sorting and pagination
#[derive(Parser)]
#[command(name = "crm-server")]
#[command(about = "CRM server - contact directory API")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging(&logging_config);
    tracing::info!("CRM server starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    let repo = Arc::new(InMemoryContactsRepository::new());

    if config.seed.enabled {
        let inserted = seed_contacts(repo.as_ref(), config.seed.contacts)
            .await
            .context("Failed to seed demo contacts")?;
        if inserted > 0 {
            tracing::info!("Seeded {} demo contacts", inserted);
        }
    }

    let service = Arc::new(ContactService::new(repo));
    let router = build_router(&config, service);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = wait_for_shutdown().await {
                tracing::error!("Shutdown signal listener failed: {e}");
            }
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}

fn build_router(config: &AppConfig, service: Arc<ContactService>) -> Router {
    let mut router = contacts::api::rest::routes::router(service)
        .route("/health", get(web::health_check));

    if config.api.enable_docs {
        router = router
            .route("/openapi.json", get(web::openapi_json))
            .route("/docs", get(web::serve_docs));
    }

    // Middleware, outermost to innermost: trace -> timeout -> CORS -> body limit
    router = router.layer(TraceLayer::new_for_http());
    router = router.layer(TimeoutLayer::new(Duration::from_secs(30)));
    if config.api.cors_enabled {
        router = router.layer(cors_layer(&config.api));
    }
    router.layer(RequestBodyLimitLayer::new(16 * 1024 * 1024))
}

fn cors_layer(api: &ApiConfig) -> CorsLayer {
    if api.cors_allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = api
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration check passed");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv() => {},
            _ = tokio::signal::ctrl_c() => {}, // fallback
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok(())
    }
}
