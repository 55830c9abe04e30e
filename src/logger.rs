use chrono::Local;
use fern::Dispatch;
use log::{LevelFilter, Record};
use std::fmt::Arguments;
use std::fs;

use crate::domain::utils::statistics::ANALYTICS_TARGET;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "dashboard.log";
const ANALYTICS_FILE: &str = "analytics.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sets up logging for the dashboard binary.
///
/// Operational records (clicks, loads, failed interactions) go to stderr in
/// colour and to `logs/dashboard.log`. Occupancy and booking events emitted on
/// the `dashboard_analytics` target are kept off the console and collected in
/// `logs/analytics.log`.
///
/// The level comes from `RUST_LOG` (default `info`). If a log file cannot be
/// opened the binary keeps logging to the console.
pub fn init() {
    if let Err(e) = fs::create_dir_all(LOG_DIR) {
        eprintln!("Failed to create log directory at '{}': {}", LOG_DIR, e);
    }

    let log_file_path = format!("{}/{}", LOG_DIR, LOG_FILE);
    let analytics_file_path = format!("{}/{}", LOG_DIR, ANALYTICS_FILE);

    let level = level_from(std::env::var("RUST_LOG").ok().as_deref());

    let console = Dispatch::new()
        .filter(|metadata| metadata.target() != ANALYTICS_TARGET)
        .format(|out, message, record| {
            let colors = fern::colors::ColoredLevelConfig::new()
                .error(fern::colors::Color::Red)
                .warn(fern::colors::Color::Yellow)
                .info(fern::colors::Color::Green)
                .debug(fern::colors::Color::Blue)
                .trace(fern::colors::Color::BrightBlack);

            out.finish(format_args!("[{} {} {}] {}", Local::now().format(TIMESTAMP_FORMAT), colors.color(record.level()), record.target(), message))
        })
        .chain(std::io::stderr());

    let mut dispatch = Dispatch::new().level(level).level_for("serde", LevelFilter::Warn).level_for("tokio", LevelFilter::Warn).chain(console);

    match fern::log_file(&log_file_path) {
        Ok(file) => {
            dispatch = dispatch.chain(Dispatch::new().filter(|metadata| metadata.target() != ANALYTICS_TARGET).format(plain_line).chain(file));
        }
        Err(e) => eprintln!("Failed to open log file '{}': {}. Logging to console only.", log_file_path, e),
    }

    match fern::log_file(&analytics_file_path) {
        Ok(file) => {
            dispatch = dispatch.chain(Dispatch::new().filter(|metadata| metadata.target() == ANALYTICS_TARGET).format(plain_line).chain(file));
        }
        Err(e) => eprintln!("Failed to open analytics log '{}': {}. Analytics events are dropped.", analytics_file_path, e),
    }

    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    log::info!("Logger initialized at level {}. Writing '{}' and '{}'.", level, log_file_path, analytics_file_path);
}

fn plain_line(out: fern::FormatCallback, message: &Arguments, record: &Record) {
    out.finish(format_args!("[{} {} {}] {}", Local::now().format(TIMESTAMP_FORMAT), record.level(), record.target(), message))
}

/// Level named by `RUST_LOG`, `info` when unset or unparsable.
fn level_from(value: Option<&str>) -> LevelFilter {
    value.and_then(|v| v.trim().parse::<LevelFilter>().ok()).unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("chatty")), LevelFilter::Info);
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" WARN ")), LevelFilter::Warn);
    }
}
