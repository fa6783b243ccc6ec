use anyhow::Context;
use clap::Parser;
use peliculas_api::core::ConfigProvider;
use peliculas_api::utils::{logger, validation::Validate};
use peliculas_api::{server, AppState, CliConfig, Dataset, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting peliculas-api");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.data_dir());
    let dataset = match Dataset::load(&storage, &config).await {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("❌ Failed to load datasets: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ Error al cargar los archivos: {}", e);
            std::process::exit(1);
        }
    };

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let state = AppState::new(dataset, config.public_url());
    server::serve(listener, state, server::shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
