include!("../../lib.rs");
use crate::catalog::controller::build_router;
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);

    let catalog = create_catalog_service(&config);
    let addr = config.listen_addr()?;
    let app = build_router(AppState::new(catalog));

    tracing::info!(%addr, branch = %config.branch_id, "catalog service listening");
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("catalog service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
