//! Members Admin - Main Entry Point
//!
//! Desktop admin console for a member directory.

use members_admin::app::application::run_app;
use members_admin::helpers::is_development;

fn main() {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    tracing::info!("Starting Members Admin...");

    // Run the GPUI application
    run_app();
}
