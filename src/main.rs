//! cvmatch HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use cvmatch::config::{Config, EncoderMode};
use cvmatch::document::PdfExtractor;
use cvmatch::embedding::{MiniLmConfig, MiniLmEncoder, TextEncoder, download_model};
use cvmatch::gateway::{HandlerState, create_router_with_state};
use cvmatch::pipeline::ResumeMatcher;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        encoder = ?config.encoder,
        max_upload_bytes = config.max_upload_bytes,
        "cvmatch starting"
    );

    let encoder_config = match config.encoder {
        EncoderMode::Stub => {
            tracing::warn!("CVMATCH_ENCODER=stub: scores are keyword overlap, not semantic");
            MiniLmConfig::stub()
        }
        EncoderMode::MiniLm => {
            let model_dir = match &config.model_path {
                Some(path) => path.clone(),
                None => download_model(&config.model_id).await?,
            };
            MiniLmConfig::new(model_dir).with_max_seq_len(config.max_seq_len)
        }
    };

    let encoder = tokio::task::spawn_blocking(move || MiniLmEncoder::load(encoder_config)).await??;
    tracing::info!(
        embedding_dim = encoder.embedding_dim(),
        has_model = encoder.has_model(),
        "Encoder loaded"
    );

    let matcher = Arc::new(ResumeMatcher::new(PdfExtractor::new(), encoder));
    let state = HandlerState::new(matcher).with_max_upload_bytes(config.max_upload_bytes);

    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("cvmatch shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var(Config::ENV_PORT)
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
