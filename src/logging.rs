//! Logging setup.
//!
//! The terminal belongs to the game, so logs only go to a file, and only when
//! `MEMORY_LOG_PATH` is set.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;

/// Install the global subscriber. Returns whether logging was enabled.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;

    Ok(true)
}

static TEST_INIT: Once = Once::new();

/// Idempotent logging for tests.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then "warn". Output goes
/// through the test writer so the harness captures it.
pub fn init_for_tests() {
    TEST_INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_path_means_no_subscriber() {
        let cfg = AppConfig {
            size: 4,
            seed: 1,
            eval_delay_ms: 500,
            log_path: None,
            log_filter: "info".to_string(),
        };
        assert!(!init(&cfg).unwrap());
    }

    #[test]
    fn test_init_is_idempotent() {
        init_for_tests();
        init_for_tests();
    }
}
