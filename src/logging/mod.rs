//! Diagnostics on standard error
//!
//! Standard output carries the dump and nothing else, so everything the
//! program says about itself goes through the [`log`] facade to this backend,
//! which writes `LEVEL - message` lines to stderr. Level labels are coloured
//! when stderr is a terminal.
//!
//! The threshold comes from the `ARGDUMP_LOG` environment variable:
//! - `off`, `error`, `warn`, `info`, `debug`, `trace` (any case)
//! - unset: [`DEFAULT_LEVEL`]
//! - anything else: [`DEFAULT_LEVEL`], plus a warning once the logger is up

pub mod theme;

use std::env;
use std::io::{self, Write};

use crossterm::style::{style, Stylize};
use crossterm::tty::IsTty;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::constants::LOG_ENV_VAR;
use theme::DEFAULT_THEME;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

static LOGGER: Logger = Logger;

/// Install the stderr logger with a fixed threshold
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
}

/// Install the stderr logger with the threshold from `ARGDUMP_LOG`
pub fn init_from_env() -> Result<(), SetLoggerError> {
    let raw = env::var_os(LOG_ENV_VAR);
    let raw = raw.as_ref().map(|v| v.to_string_lossy());
    match parse_level(raw.as_deref()) {
        Ok(level) => init(level),
        Err(bad) => {
            init(DEFAULT_LEVEL)?;
            log::warn!("ignoring {}={:?}, using {}", LOG_ENV_VAR, bad, DEFAULT_LEVEL);
            Ok(())
        }
    }
}

/// Parse a level name; `None` means the variable was not set
///
/// Returns the rejected value on failure.
pub fn parse_level(value: Option<&str>) -> Result<LevelFilter, String> {
    match value {
        None => Ok(DEFAULT_LEVEL),
        Some(v) => v.trim().parse().map_err(|_| v.to_string()),
    }
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let stderr = io::stderr();
            let line = format_record(record, stderr.is_tty());
            let _ = writeln!(stderr.lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Render one record, with colour codes when `styled`
fn format_record(record: &Record, styled: bool) -> String {
    let level = record.level();
    if styled {
        format!(
            "{} - {}",
            style(level).with(DEFAULT_THEME.level(level)).bold(),
            style(record.args()).with(DEFAULT_THEME.message)
        )
    } else {
        format!("{} - {}", level, record.args())
    }
}
