//! Gallery GUI - Main Entry Point
//!
//! Native component gallery and interaction harness built on GPUI.

use gallery_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Gallery GUI...");

    // Run the GPUI application
    run_app();
}
