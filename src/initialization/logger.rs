//! Logger initialization.

use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Record};
use serde_json::json;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

// Dependencies that log too much below these levels
const MODULE_CLAMPS: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
];

fn level_label(level: Level) -> ColoredString {
    let label = level.to_string();
    match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.dimmed(),
    }
}

/// One JSON object per record: `ts` (epoch millis), `level`, `target`, `msg`.
fn json_line(record: &Record<'_>) -> String {
    json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

/// Initializes the global logger.
///
/// `RUST_LOG` is read first; `level` then overrides it for this crate and as the
/// default. Plain output colors the level name; JSON output writes one object per
/// line.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every fallback substitution
/// site_analyzer example.com --log-level info
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=site_analyzer=debug,reqwest=info site_analyzer example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, clamp) in MODULE_CLAMPS {
        builder.filter_module(module, *clamp);
    }
    builder.filter_module("site_analyzer", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| writeln!(buf, "{}", json_line(record)));
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} {} {}",
                    level_label(record.level()),
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;
    Ok(())
}
