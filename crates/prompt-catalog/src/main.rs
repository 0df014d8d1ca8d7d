mod catalog;
mod categories;
mod config;
mod error;
mod model;
mod parser;
mod scanner;

use tracing::info;
use tracing_subscriber::EnvFilter;

use categories::CategoryTable;
use config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting prompt catalog generation");

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;
    info!(
        app_dir = %config.app_dir.display(),
        prompts_root = %config.prompts_root.display(),
        output = %config.output_path.display(),
        "configuration loaded"
    );

    let table = CategoryTable::fixed();
    let generated = catalog::generate(&config, &table).inspect_err(|e| {
        tracing::error!(error = %e, "failed to generate prompt catalog");
    })?;
    info!(
        total_prompts = generated.catalog.metadata.total_prompts,
        categories = generated.categories_scanned,
        output = %config.output_path.display(),
        "generated prompt catalog"
    );

    Ok(())
}
