use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::kernel::services::adapters::ensure_log_dir;
use crate::kernel::services::ports::Settings;

const DEFAULT_FILTER: &str = "image_editor=info";
const LOG_FILE_PREFIX: &str = "image-editor.log";

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Defaults to the settings log directory, then the system temp dir.
    pub log_dir: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

impl LoggingConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            log_dir: None,
            filter: settings.log_filter.clone(),
        }
    }
}

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Installs the global subscriber. Returns `None` if no log directory is usable or a
/// subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Option<LoggingGuard> {
    let log_dir = match &config.log_dir {
        Some(dir) => std::fs::create_dir_all(dir).map(|_| dir.clone()),
        None => ensure_log_dir(),
    }
    .or_else(|_| -> std::io::Result<PathBuf> {
        let dir = std::env::temp_dir().join("image-editor").join("logs");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    })
    .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry().with(env_filter(config)).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| {
            let directive = config.filter.as_deref()?;
            EnvFilter::try_new(directive)
                .map_err(|e| eprintln!("invalid log filter `{directive}`: {e}"))
                .ok()
        })
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
