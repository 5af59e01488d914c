use crate::{
    collector::RuleReservesCollector,
    metrics::Registry,
    router::create_router,
};
use epgstation_exporter_config::Config;
use eyre::{
    Context as _,
    Result,
};
use std::{
    net::SocketAddr,
    sync::Arc,
};
use tokio::net::TcpListener;

pub struct App {
    listen_address: SocketAddr,
    registry: Arc<Registry>,
}

impl App {
    /// Build the collector and register it. The collector logs through the
    /// dispatcher that is current when the app is created.
    pub fn new(config: Config) -> Result<Self> {
        let logger = tracing::dispatcher::get_default(|dispatch| dispatch.clone());
        let collector = RuleReservesCollector::new(&config.exporter, logger)?;

        let mut registry = Registry::new();
        registry.register(collector)?;

        info!(
            base_url = %config.exporter.base_url,
            max_retry = config.exporter.max_retry,
            timeout = ?config.exporter.timeout,
            "Exporter configured"
        );

        Ok(Self {
            listen_address: config.listen_address,
            registry: Arc::new(registry),
        })
    }

    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.listen_address)
            .await
            .wrap_err_with(|| format!("Failed to bind {}", self.listen_address))?;

        info!("listening on {}", self.listen_address);

        axum::serve(listener, create_router(self.registry).into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Metrics server failed")
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!(%error, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                error!(%error, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down");
}
