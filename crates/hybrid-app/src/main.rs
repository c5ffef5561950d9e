mod app_state;
mod cli;

use hybrid_common::ConfigError;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_DIRECTIVE: &str = "hybrid=info";

/// Turn a bare level (`debug`) into a directive for the shell's crates.
fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("hybrid={level}")
    }
}

fn main() {
    let args = cli::parse();

    // Config first so its log level can seed the filter; errors are reported
    // once logging is up.
    let loaded = hybrid_config::load_config(args.config.as_deref());

    let level = match (&args.log_level, &loaded) {
        (Some(level), _) => log_directive(level),
        (None, Ok(config)) => log_directive(config.logging.level.as_str()),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_string(),
    };
    let directive: Result<Directive, _> = level.parse().or_else(|_| DEFAULT_DIRECTIVE.parse());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        run = %hybrid_common::new_correlation_id(),
        "Hybrid Shell v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = match loaded {
        Ok(config) => config,
        Err(e @ ConfigError::ValidationError(_)) => {
            tracing::error!("Refusing to start with an invalid config: {e}");
            std::process::exit(2);
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            hybrid_config::ShellConfig::default()
        }
    };

    let entry_url = args
        .url
        .clone()
        .unwrap_or_else(|| config.app.entry_url.clone());
    tracing::info!(entry_url = %entry_url, "Config loaded");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::HybridApp::new(config, entry_url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
