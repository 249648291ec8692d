use anyhow::Context;
use portfolio_data::{
    clock::{Clock, FixedClock},
    repositories::catalog::Catalog,
    settings::{AppConfig, LogFormat},
    use_cases::overview::SiteOverview,
    AppState,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // stdout carries the export, logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format() {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn export<C: Clock>(state: &AppState<'_, C>, pretty: bool) -> anyhow::Result<String> {
    SiteOverview::build(state)
        .to_json(pretty)
        .context("Failed to serialize site overview")
}

fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let catalog = Catalog::builtin();
    if let Err(e) = catalog.validate() {
        tracing::error!("Built-in catalog is invalid: {}", e);
        std::process::exit(1);
    }

    let json = match config.reference_date {
        Some(date) => {
            tracing::info!("Using fixed reference date {}", date);
            export(&AppState::new(catalog, FixedClock(date)), config.pretty_output)?
        }
        None => export(&AppState::builtin(), config.pretty_output)?,
    };

    tracing::info!(
        "{} v{} exported {} projects",
        config.name,
        env!("CARGO_PKG_VERSION"),
        catalog.projects.len()
    );

    println!("{}", json);
    Ok(())
}
