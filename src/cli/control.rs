//! Control channel
//!
//! One long-lived outbound connection, owned by the daemon for its whole
//! life. It announces startup with a fixed handshake and then drains
//! inbound command/ack bytes from the controller. It never carries
//! clipboard payloads; those travel on per-event notification
//! connections, which keeps variable-length payloads away from the
//! fixed-size control read buffer.

use std::io;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Handshake announcing the daemon to the controller
pub const HANDSHAKE: &str = "connection from rust client";

/// Inbound control traffic is short command/ack messages; a fixed buffer
/// is sufficient.
const READ_BUFFER_SIZE: usize = 1024;

/// The daemon's long-lived control connection
pub struct ControlChannel {
    stream: TcpStream,
}

impl ControlChannel {
    /// Dial the controller once. There is no reconnect logic; a failed
    /// dial is fatal to the daemon.
    pub async fn connect(address: &str) -> io::Result<Self> {
        let stream = TcpStream::connect(address).await?;
        Ok(Self { stream })
    }

    /// Announce startup to the controller
    pub async fn announce(&mut self) -> io::Result<()> {
        self.stream.write_all(HANDSHAKE.as_bytes()).await
    }

    /// Drain inbound bytes until cancellation or a read error.
    ///
    /// Peer close surfaces as an error: the daemon is not designed to
    /// survive controller disconnection.
    pub async fn receive_loop(mut self, cancel: CancellationToken) -> io::Result<()> {
        let mut buffer = [0u8; READ_BUFFER_SIZE];

        loop {
            let read = tokio::select! {
                _ = cancel.cancelled() => return Ok(()),
                read = self.stream.read(&mut buffer) => read,
            };

            let n = read?;
            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "controller closed the control connection",
                ));
            }

            let message = String::from_utf8_lossy(&buffer[..n]);
            info!(%message, "control message received");
        }
    }
}
