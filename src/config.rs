//! Environment configuration.
//!
//! - `MEMORY_BOARD_SIZE`: initial board size, one of 2, 4, 6 (default 4)
//! - `MEMORY_SEED`: fixed shuffle seed (default: derived from the clock)
//! - `MEMORY_EVAL_DELAY_MS`: delay before a pair is compared (default 500)
//! - `MEMORY_LOG_PATH`: write logs to this file (default: no logging)
//! - `MEMORY_LOG` / `RUST_LOG`: log filter (default "info")
//!
//! Unparseable or unsupported values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;
use crate::types::{DEFAULT_SIZE, EVAL_DELAY_MS, SUPPORTED_SIZES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub size: u8,
    pub seed: u32,
    pub eval_delay_ms: u32,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let size = get("MEMORY_BOARD_SIZE")
            .and_then(|s| s.trim().parse::<u8>().ok())
            .filter(|s| SUPPORTED_SIZES.contains(s))
            .unwrap_or(DEFAULT_SIZE);

        let seed = get("MEMORY_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let eval_delay_ms = get("MEMORY_EVAL_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(EVAL_DELAY_MS);

        let log_path = get("MEMORY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = get("MEMORY_LOG")
            .or_else(|| get("RUST_LOG"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            size,
            seed,
            eval_delay_ms,
            log_path,
            log_filter,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            seed: self.seed,
            eval_delay_ms: self.eval_delay_ms,
        }
    }
}

/// Seed from the wall clock and process id.
fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mixed = nanos ^ (nanos >> 32) ^ ((std::process::id() as u64) << 16);
    mixed as u32
}
