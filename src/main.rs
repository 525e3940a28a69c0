use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xgodo_proxy::api::build_app;
use xgodo_proxy::config::XgodoConfig;
use xgodo_proxy::state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 8080, env = "PORT")]
    port: u16,

    /// Directory containing the static UI files
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = XgodoConfig::from_env().expect("Failed to load config");
    if !config.has_token() {
        tracing::warn!(
            "XGODO_TOKEN is not set; forwarding endpoints will be refused until it is configured"
        );
    }
    tracing::info!(
        "Forwarding to upstream {} (timeout: {}s)",
        config.base_url,
        config.timeout_secs
    );

    let app_state = Arc::new(AppState::new(config).expect("Failed to init state"));

    let app = build_app(app_state, &args.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
