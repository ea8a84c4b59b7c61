//! ClipRelay CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clip_relay::cli::{
    app::{load_merged_config, run_oneshot, EXIT_USAGE_ERROR},
    args::{resolve_mode, Cli, Mode},
    daemon_app::run_daemon,
    presenter::Presenter,
};
use clip_relay::domain::config::AppConfig;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    let mode = match resolve_mode(cli.target.as_deref()) {
        Ok(mode) => mode,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        port: match mode {
            Mode::Daemon { port } => port,
            Mode::OneShot(_) => None,
        },
        poll_interval_ms: cli.poll_interval,
        image_tool: cli.image_tool.clone(),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Route to appropriate handler
    match mode {
        Mode::OneShot(command) => run_oneshot(command, &config).await,
        Mode::Daemon { .. } => {
            init_tracing();
            run_daemon(config.port_or_default(), &config).await
        }
    }
}

/// Daemon logs go to stderr; stdout stays clean for the controller.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
