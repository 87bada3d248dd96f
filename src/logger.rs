use std::io;
use std::path::Path;

use chrono::Local;
use fern::Dispatch;
use log::{Level, LevelFilter};

pub const LOG_LEVEL_ENV: &str = "B64JSON_DEBUG";

/// How log lines are filtered and prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub timestamps: bool,
}

impl LogSettings {
    pub fn new(level: LevelFilter) -> Self {
        // Plain info output stays terse; anything else is for diagnosing.
        LogSettings {
            level,
            timestamps: level != LevelFilter::Info,
        }
    }

    /// A `trace` or `debug` marker file next to the executable wins over
    /// `B64JSON_DEBUG`.
    pub fn detect() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let from_marker = exe_dir.as_deref().and_then(marker_level);
        let level = from_marker
            .unwrap_or_else(|| parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref()));
        Self::new(level)
    }

    fn prefix(&self, level: Level) -> String {
        if self.timestamps {
            format!("[{}][{level}]", Local::now().format("%b-%d-%Y %H:%M:%S.%f"))
        } else {
            format!("[{level}]")
        }
    }
}

fn marker_level(dir: &Path) -> Option<LevelFilter> {
    if dir.join("trace").exists() {
        Some(LevelFilter::Trace)
    } else if dir.join("debug").exists() {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    match value.map(str::trim) {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Installs the global logger. Lines go to stderr so that converted text on
/// stdout stays clean.
pub fn setup_logger() {
    let settings = LogSettings::detect();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}: {} <{}:{}>",
                settings.prefix(record.level()),
                message,
                record.file().unwrap_or("unknown_file"),
                record.line().unwrap_or(0),
            ))
        })
        .level(settings.level)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {}.", settings.level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels() {
        assert_eq!(parse_level(Some("trace")), LevelFilter::Trace);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" warn\n")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("error")), LevelFilter::Error);
    }

    #[test]
    fn unknown_or_missing_defaults_to_info() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("TRACE")), LevelFilter::Info);
        assert_eq!(parse_level(Some("")), LevelFilter::Info);
    }

    #[test]
    fn info_lines_carry_no_timestamp() {
        let settings = LogSettings::new(LevelFilter::Info);
        assert!(!settings.timestamps);
        assert_eq!(settings.prefix(Level::Warn), "[WARN]");

        let settings = LogSettings::new(LevelFilter::Debug);
        assert!(settings.timestamps);
        let prefix = settings.prefix(Level::Debug);
        assert!(prefix.starts_with('[') && prefix.ends_with("][DEBUG]"), "{prefix}");
    }

    #[test]
    fn marker_files_pick_the_level() {
        let dir = std::env::temp_dir().join(format!("b64json-markers-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        assert_eq!(marker_level(&dir), None);

        std::fs::write(dir.join("debug"), b"").unwrap();
        assert_eq!(marker_level(&dir), Some(LevelFilter::Debug));

        std::fs::write(dir.join("trace"), b"").unwrap();
        assert_eq!(marker_level(&dir), Some(LevelFilter::Trace));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
