mod app_state;
mod cli;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("gyre=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "gyre=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Gyre v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config_override = args.config.as_ref().map(PathBuf::from);
    let config = match config_override {
        Some(ref path) => {
            tracing::info!("Using config override: {}", path.display());
            gyre_config::load_config_from(path)
        }
        None => gyre_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        gyre_config::schema::GyreConfig::default()
    });

    if args.dump_config {
        println!("{}", gyre_config::config_to_json(&config));
        return;
    }

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::GyreApp::new(config, config_override);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
