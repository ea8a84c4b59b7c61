//! Daemon app runner
//!
//! Wires the adapters together and runs the fixed task set: two clipboard
//! watch loops, two relay loops, and the control-channel receiver. All
//! tasks observe one cancellation token; the first fatal error cancels it
//! and the process exits non-zero.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::application::ports::Clipboard;
use crate::application::{relay_events, spawn_watcher};
use crate::domain::clip::ClipKind;
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_clipboard, TcpChangeNotifier};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::control::ControlChannel;
use super::presenter::Presenter;
use super::signals::install_shutdown_handler;

/// Run daemon mode against the controller on the given port
pub async fn run_daemon(port: u16, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let address = format!("localhost:{}", port);
    let poll_interval = Duration::from_millis(config.poll_interval_ms_or_default());

    // The clipboard subsystem must attach before any watching begins.
    let clipboard: Arc<dyn Clipboard> = Arc::from(create_clipboard());
    if let Err(e) = clipboard.probe().await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    // One long-lived control connection for the whole process lifetime.
    let mut control = match ControlChannel::connect(&address).await {
        Ok(control) => control,
        Err(e) => {
            presenter.error(&format!("Failed to reach controller at {}: {}", address, e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = control.announce().await {
        presenter.error(&format!("Failed to announce to controller: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let cancel = CancellationToken::new();
    if let Err(e) = install_shutdown_handler(cancel.clone()) {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    // The first fatal error wins.
    let (fatal_tx, mut fatal_rx) = mpsc::channel::<String>(4);

    // Control receiver: drains inbound commands; peer close is fatal.
    {
        let cancel = cancel.clone();
        let fatal_tx = fatal_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = control.receive_loop(cancel).await {
                let _ = fatal_tx.send(format!("control channel: {}", e)).await;
            }
        });
    }

    // One watch loop and one relay loop per clipboard slot. The slots are
    // independent; their notifications race freely onto the wire.
    for kind in [ClipKind::Text, ClipKind::Image] {
        let events = spawn_watcher(Arc::clone(&clipboard), kind, poll_interval, cancel.clone());
        let notifier = TcpChangeNotifier::new(address.clone());
        let cancel = cancel.clone();
        let fatal_tx = fatal_tx.clone();

        tokio::spawn(async move {
            if let Err(e) = relay_events(events, notifier, cancel).await {
                let _ = fatal_tx.send(format!("{} relay: {}", kind, e)).await;
            }
        });
    }
    drop(fatal_tx);

    info!(%address, poll_ms = poll_interval.as_millis() as u64, "watching clipboard");

    tokio::select! {
        _ = cancel.cancelled() => {
            info!("shutdown requested");
            ExitCode::from(EXIT_SUCCESS)
        }
        maybe = fatal_rx.recv() => match maybe {
            Some(message) => {
                error!(%message, "fatal error, shutting down");
                cancel.cancel();
                ExitCode::from(EXIT_ERROR)
            }
            None => ExitCode::from(EXIT_SUCCESS),
        },
    }
}
