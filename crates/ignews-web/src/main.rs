//! ig.news server binary.

use anyhow::Result;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use ignews_web::config::Config;
use ignews_web::routes;
use ignews_web::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "ignews-web", about = "ig.news publication site")]
struct Args {
    /// Path to a .env file loaded before reading configuration.
    #[arg(long)]
    dotenv: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.dotenv {
        dotenvy::from_path(path)?;
    } else {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config);

    let app = routes::router(state).layer(
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }),
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "ignews listening");
    axum::serve(listener, app).await?;
    Ok(())
}
