//! Multipane Shop - Main Entry Point
//!
//! Master-detail product browser that switches between a split pane and
//! stack navigation with the window's orientation.

use multipane_shop::app::application::run_app;
use multipane_shop::domain::catalog::Catalog;
use multipane_shop::domain::config::AppConfig;
use multipane_shop::utils::config_store::{load_catalog, load_config};
use multipane_shop::utils::logging::init_tracing;

fn main() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Keep the file writer alive for the whole run
    let _log_guard = init_tracing(&config.log);

    if let Some(e) = config_error {
        tracing::error!("Failed to load config, using defaults: {e:#}");
    }

    let catalog = load_catalog(&config).unwrap_or_else(|e| {
        tracing::error!("Failed to load catalog, using builtin products: {e:#}");
        Catalog::builtin()
    });

    tracing::info!("Starting Multipane Shop...");

    // Run the GPUI application
    run_app(config, catalog);
}
