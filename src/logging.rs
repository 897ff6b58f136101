//! Tracing setup. Diagnostics go to a log file next to the config so that
//! command output stays clean; user-facing messages use `ui::messages`.

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
/// Failing to open the log file only disables file logging.
pub fn initialize(cfg: &Config) {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| cfg.log_level.clone());
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_path = Config::log_file();
    let file = log_path
        .parent()
        .map(fs::create_dir_all)
        .transpose()
        .ok()
        .and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .ok()
        });

    let Some(file) = file else {
        return;
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .try_init();
}
