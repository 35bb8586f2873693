use std::fs::File;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a log file. Unset means log to stderr.
pub const LOG_FILE_ENV: &str = "DYNAMIC_APP_LOG";

/// Default filter when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Initialize tracing.
///
/// `RUST_LOG` takes precedence over the `debug` flag. When `DYNAMIC_APP_LOG`
/// is set, output goes to `{path}.{timestamp}.{pid}` so concurrent instances
/// don't clobber each other. If that file can't be created, logs go to
/// stderr as usual.
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let log_file = std::env::var(LOG_FILE_ENV)
        .ok()
        .and_then(|path| open_log_file(&path));

    match log_file {
        Some(file) => {
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_timer(UtcTime::rfc_3339());

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_timer(UtcTime::rfc_3339()),
                )
                .init();
        }
    }
}

/// Create `{base}.{timestamp}.{pid}`. Returns `None` (with a warning on
/// stderr) when the file can't be created.
fn open_log_file(base: &str) -> Option<File> {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", base, timestamp, pid);

    match File::create(&unique_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}; logging to stderr",
                unique_path, e
            );
            None
        }
    }
}
