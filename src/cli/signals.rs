//! Signal handling for daemon shutdown

use tokio_util::sync::CancellationToken;

/// Install a handler that cancels the token on SIGINT/SIGTERM.
///
/// The token is the single shutdown path: watch loops, relay loops, and
/// the control receiver all observe it.
#[cfg(unix)]
pub fn install_shutdown_handler(cancel: CancellationToken) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigint.recv() => {}
            _ = sigterm.recv() => {}
        }
        cancel.cancel();
    });

    Ok(())
}

/// Install a handler that cancels the token on Ctrl+C.
#[cfg(not(unix))]
pub fn install_shutdown_handler(cancel: CancellationToken) -> std::io::Result<()> {
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        cancel.cancel();
    });

    Ok(())
}
