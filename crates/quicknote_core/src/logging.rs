//! Logging bootstrap for the note core.
//!
//! # Responsibility
//! - Start rolling file logs once per process on behalf of the mobile shell.
//! - Keep log output metadata-only: note content never reaches disk.
//!
//! # Invariants
//! - Repeat initialization with the same level and directory succeeds.
//! - Re-initialization with a conflicting config is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "quicknote";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 3;
const PANIC_SUMMARY_MAX_CHARS: usize = 120;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogging {
    config: LogConfig,
    _handle: LoggerHandle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogConfig {
    level: &'static str,
    dir: PathBuf,
}

impl LogConfig {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        let level = match level.trim().to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" | "warning" => "warn",
            "error" => "error",
            other => {
                return Err(format!(
                    "unknown log level `{other}`; expected trace|debug|info|warn|error"
                ))
            }
        };

        let dir = log_dir.trim();
        if dir.is_empty() {
            return Err("log directory must not be empty".to_string());
        }
        let dir = Path::new(dir);
        if !dir.is_absolute() {
            return Err(format!(
                "log directory must be absolute, got `{}`",
                dir.display()
            ));
        }

        Ok(Self {
            level,
            dir: dir.to_path_buf(),
        })
    }
}

/// Starts file logging for this process.
///
/// The FFI shell calls this on every app launch; the first call wins and
/// later calls with the same `level` and `log_dir` are accepted as no-ops.
///
/// # Errors
/// - `level` outside `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir` empty, relative, or not creatable.
/// - A conflicting earlier initialization.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LogConfig::parse(level, log_dir)?;

    let active = ACTIVE.get_or_try_init(|| start_file_logger(requested.clone()))?;
    if active.config != requested {
        return Err(format!(
            "logging already active with level `{}` at `{}`; ignoring request for `{}` at `{}`",
            active.config.level,
            active.config.dir.display(),
            requested.level,
            requested.dir.display()
        ));
    }

    Ok(())
}

/// Returns the log level the shell should request for this build.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_file_logger(config: LogConfig) -> Result<ActiveLogging, String> {
    std::fs::create_dir_all(&config.dir).map_err(|err| {
        format!(
            "cannot create log directory `{}`: {err}",
            config.dir.display()
        )
    })?;

    let handle = Logger::try_with_str(config.level)
        .map_err(|err| format!("bad log level `{}`: {err}", config.level))?
        .log_to_file(
            FileSpec::default()
                .directory(config.dir.as_path())
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // Timestamp + file:line per record, so rotated files stay
        // self-describing when pulled off a device.
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("cannot start logger: {err}"))?;

    if PANIC_HOOK.set(()).is_ok() {
        install_panic_hook();
    }

    info!(
        "event=quicknote_start module=core status=ok os={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "event=logging_ready module=core status=ok level={} dir={}",
        config.level,
        config.dir.display()
    );

    Ok(ActiveLogging {
        config,
        _handle: handle,
    })
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic module=core status=error location={location} summary={}",
            panic_summary(panic_info)
        );
        previous(panic_info);
    }));
}

fn panic_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    // Panic payloads can quote user text; clamp them before they reach disk.
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|text| (*text).to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "opaque panic payload".to_string());

    single_line_clamped(&payload, PANIC_SUMMARY_MAX_CHARS)
}

fn single_line_clamped(value: &str, max_chars: usize) -> String {
    let flat = value.replace(['\n', '\r'], " ");
    let mut clamped: String = flat.chars().take(max_chars).collect();
    if flat.chars().count() > max_chars {
        clamped.push_str("...");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::{init_logging, single_line_clamped, LogConfig};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("quicknote-log-{tag}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn parse_normalizes_level_case_and_aliases() {
        let config = LogConfig::parse("WARNING", "/tmp/quicknote").expect("warning should parse");
        assert_eq!(config.level, "warn");
        assert!(LogConfig::parse("verbose", "/tmp/quicknote").is_err());
    }

    #[test]
    fn parse_rejects_empty_and_relative_dirs() {
        assert!(LogConfig::parse("info", "  ").is_err());
        let err = LogConfig::parse("info", "logs/run").expect_err("relative dir must fail");
        assert!(err.contains("absolute"));
    }

    #[test]
    fn single_line_clamped_flattens_and_caps() {
        let clamped = single_line_clamped("alpha\nbeta\rgamma", 7);
        assert_eq!(clamped, "alpha b...");

        let untouched = single_line_clamped("short", 10);
        assert_eq!(untouched, "short");
    }

    #[test]
    fn init_logging_accepts_repeat_config_and_rejects_conflicts() {
        let first_dir = unique_temp_dir("first");
        let first = first_dir.to_str().expect("utf-8 temp dir").to_string();
        let other = unique_temp_dir("other")
            .to_str()
            .expect("utf-8 temp dir")
            .to_string();

        init_logging("info", &first).expect("initial setup should succeed");
        init_logging("info", &first).expect("repeat with same config should succeed");

        let level_conflict =
            init_logging("debug", &first).expect_err("different level must be rejected");
        assert!(level_conflict.contains("already active"));

        let dir_conflict =
            init_logging("info", &other).expect_err("different directory must be rejected");
        assert!(dir_conflict.contains("already active"));
    }
}
