use crate::error::{Result as ServerErrorResult, ServerError};

use std::fs::OpenOptions;
use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Install the global logger: plain lines appended to `log_file` when given,
/// otherwise stdout (with colored levels if `colored`).
pub fn initialize(
    log_level: turbo_config::LogLevel,
    log_file: Option<&Path>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level: LevelFilter = log_level.into();

    let output = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("cannot open log file {}: {e}", path.display()),
                })?;
            line_format(None).chain(file)
        }
        None => line_format(colored.then(level_colors)).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("logger already installed: {e}"),
        })?;

    let target = log_file.map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    info!("Logging at {level} to {target}");

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[rfc3339 - LEVEL] message [file:line]`
fn line_format(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        let now = humantime::format_rfc3339_millis(SystemTime::now());
        let file = record.file().unwrap_or("?");
        let line = record.line().unwrap_or(0);
        match colors {
            Some(colors) => out.finish(format_args!(
                "[{now} - {}] {message} [{file}:{line}]",
                colors.color(record.level())
            )),
            None => out.finish(format_args!(
                "[{now} - {}] {message} [{file}:{line}]",
                record.level()
            )),
        }
    })
}
