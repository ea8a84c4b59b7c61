//! Main app runner for one-shot mode

use std::env;
use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::{ConfigStore, ImageWriter};
use crate::application::OneShotCommandUseCase;
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    create_clipboard, create_image_writer, ImageToolPreference, NoOpImageWriter, XdgConfigStore,
};

use super::args::OneShotCommand;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a one-shot clipboard command
pub async fn run_oneshot(command: OneShotCommand, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let clipboard = create_clipboard();

    // WRITE_IMAGE is the only command that needs a platform image writer;
    // the others must not fail on a missing helper tool.
    let image_writer: Box<dyn ImageWriter> = if command == OneShotCommand::WriteImage {
        let preference: ImageToolPreference = match config.image_tool_or_default().parse() {
            Ok(preference) => preference,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        };

        match create_image_writer(create_clipboard(), preference).await {
            Ok((writer, _tool)) => writer,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        Box::new(NoOpImageWriter::new())
    };

    let use_case = OneShotCommandUseCase::new(clipboard, image_writer);

    match command {
        OneShotCommand::ReadText => match use_case.read_text().await {
            Ok(encoded) => {
                presenter.output_inline(&encoded);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        },
        OneShotCommand::ReadImage => match use_case.read_image().await {
            Ok(encoded) => {
                presenter.output(&encoded);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        },
        OneShotCommand::WriteText => {
            let line = match read_stdin_line().await {
                Ok(line) => line,
                Err(e) => {
                    presenter.error(&format!("Failed to read standard input: {}", e));
                    return ExitCode::from(EXIT_ERROR);
                }
            };

            match use_case.write_text(&line).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        OneShotCommand::WriteImage => {
            let line = match read_stdin_line().await {
                Ok(line) => line,
                Err(e) => {
                    presenter.error(&format!("Failed to read standard input: {}", e));
                    return ExitCode::from(EXIT_ERROR);
                }
            };

            match use_case.write_image(&line).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
    }
}

/// Read one line from standard input, delimiter included
async fn read_stdin_line() -> std::io::Result<String> {
    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(line)
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        port: env::var("CLIP_RELAY_PORT").ok().and_then(|s| s.parse().ok()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
