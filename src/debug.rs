//! Debug logging bridge for chat-overlay
//!
//! Routes every `log::info!()`/`log::debug!()`/... call in the workspace to a
//! debug log file, controlled by the DEBUG_LEVEL environment variable:
//! - 0 or unset: No debugging
//! - 1: Errors only
//! - 2: Info level (window open/close, saves)
//! - 3: Debug level (command dispatch, tab edits)
//! - 4: Trace level (per-frame detail)
//!
//! All output goes to /tmp/chat_overlay_debug.log on Unix/macOS,
//! or %TEMP%\chat_overlay_debug.log on Windows, keeping it out of the host's
//! own console.

use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    /// Parse a DEBUG_LEVEL value. Anything unrecognised is `Off`.
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u8>() {
            Ok(1) => DebugLevel::Error,
            Ok(2) => DebugLevel::Info,
            Ok(3) => DebugLevel::Debug,
            Ok(4) => DebugLevel::Trace,
            _ => DebugLevel::Off,
        }
    }

    fn from_env() -> Self {
        std::env::var("DEBUG_LEVEL")
            .map(|val| Self::parse(&val))
            .unwrap_or(DebugLevel::Off)
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            DebugLevel::Off => log::LevelFilter::Off,
            DebugLevel::Error => log::LevelFilter::Error,
            DebugLevel::Info => log::LevelFilter::Info,
            DebugLevel::Debug => log::LevelFilter::Debug,
            DebugLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Global debug logger
struct DebugLogger {
    level: log::LevelFilter,
    file: Mutex<Option<std::fs::File>>,
}

impl DebugLogger {
    fn new(level: log::LevelFilter) -> Self {
        let file = if level != log::LevelFilter::Off {
            match OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(log_path())
            {
                Ok(mut f) => {
                    let _ = writeln!(
                        f,
                        "\n{}\nchat-overlay debug session started at {} (level={})\n{}",
                        "=".repeat(80),
                        get_timestamp(),
                        level,
                        "=".repeat(80)
                    );
                    Some(f)
                }
                // Silently fail if log file can't be opened
                Err(_e) => None,
            }
        } else {
            None
        };

        DebugLogger {
            level,
            file: Mutex::new(file),
        }
    }
}

impl log::Log for DebugLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(file) = self.file.lock().as_mut() {
            let _ = writeln!(
                file,
                "[{}] [{:<5}] [{}] {}",
                get_timestamp(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<DebugLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Get the path to the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/chat_overlay_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("chat_overlay_debug.log")
    }
}

/// Install the debug log bridge as the global `log` logger.
///
/// `level_override` takes precedence over DEBUG_LEVEL. Returns `false` if
/// another logger was already installed.
pub fn init_log_bridge(level_override: Option<log::LevelFilter>) -> bool {
    let level = level_override.unwrap_or_else(|| DebugLevel::from_env().to_level_filter());
    let logger = LOGGER.get_or_init(|| DebugLogger::new(level));
    if log::set_logger(logger).is_err() {
        return false;
    }
    log::set_max_level(logger.level);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_debug_level() {
        assert_eq!(DebugLevel::parse("0"), DebugLevel::Off);
        assert_eq!(DebugLevel::parse(" 3 "), DebugLevel::Debug);
        assert_eq!(DebugLevel::parse("4"), DebugLevel::Trace);
        assert_eq!(DebugLevel::parse("verbose"), DebugLevel::Off);
    }

    #[test]
    fn test_bridge_installs_once() {
        init_log_bridge(Some(log::LevelFilter::Off));
        assert!(!init_log_bridge(Some(log::LevelFilter::Off)));
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(DebugLevel::Off.to_level_filter(), log::LevelFilter::Off);
        assert_eq!(DebugLevel::Info.to_level_filter(), log::LevelFilter::Info);
    }
}
