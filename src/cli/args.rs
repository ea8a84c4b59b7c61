//! CLI argument definitions using Clap

use std::str::FromStr;

use clap::Parser;

use crate::domain::error::PortParseError;

/// ClipRelay - clipboard change relay daemon
#[derive(Parser, Debug)]
#[command(name = "clip-relay")]
#[command(version)]
#[command(about = "Relays clipboard changes to a controller process over local TCP")]
#[command(long_about = None)]
pub struct Cli {
    /// Controller TCP port (daemon mode), or a one-shot command:
    /// READ_TEXT, READ_IMAGE, WRITE_TEXT, WRITE_IMAGE
    #[arg(value_name = "PORT_OR_COMMAND")]
    pub target: Option<String>,

    /// Clipboard poll interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub poll_interval: Option<u64>,

    /// Image-write tool (auto, native, or a platform helper)
    #[arg(long, value_name = "TOOL")]
    pub image_tool: Option<String>,
}

/// One-shot clipboard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotCommand {
    ReadText,
    ReadImage,
    WriteText,
    WriteImage,
}

impl FromStr for OneShotCommand {
    type Err = ();

    /// Command tokens are exact; anything else is treated as a port.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READ_TEXT" => Ok(Self::ReadText),
            "READ_IMAGE" => Ok(Self::ReadImage),
            "WRITE_TEXT" => Ok(Self::WriteText),
            "WRITE_IMAGE" => Ok(Self::WriteImage),
            _ => Err(()),
        }
    }
}

/// Resolved invocation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Watch the clipboard and relay changes to the controller.
    /// `port` is None when the positional argument was omitted.
    Daemon { port: Option<u16> },
    /// Perform one clipboard operation and exit
    OneShot(OneShotCommand),
}

/// Resolve the positional argument into an invocation mode.
///
/// No argument means daemon mode on the configured/default port. A known
/// command token selects one-shot mode; anything else must parse as a
/// nonzero TCP port.
pub fn resolve_mode(target: Option<&str>) -> Result<Mode, PortParseError> {
    let Some(target) = target else {
        return Ok(Mode::Daemon { port: None });
    };

    if let Ok(command) = target.parse::<OneShotCommand>() {
        return Ok(Mode::OneShot(command));
    }

    match target.parse::<u16>() {
        Ok(0) | Err(_) => Err(PortParseError {
            input: target.to_string(),
        }),
        Ok(port) => Ok(Mode::Daemon { port: Some(port) }),
    }
}
