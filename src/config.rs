//! Startup configuration from environment variables.
//!
//! - `TETRIS_RESERVE_SEED`: u32 seed for piece kinds (default: time-derived)
//! - `TETRIS_RESERVE_MODE`: `tui` or `lines` (default: `tui`)
//! - `TETRIS_RESERVE_LOG`: tracing filter directive (default: `info`)
//! - `TETRIS_RESERVE_LOG_PATH`: write logs to this file instead of stderr
//!
//! Values that fail to parse fall back to their default.

use std::time::{SystemTime, UNIX_EPOCH};

/// How the binary talks to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full-screen terminal UI.
    Tui,
    /// One menu selection per stdin line, one JSON object per stdout line.
    Lines,
}

impl Mode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tui" => Some(Mode::Tui),
            "lines" | "line" => Some(Mode::Lines),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` means derive one from the clock at startup.
    pub seed: Option<u32>,
    pub mode: Mode,
    pub log_filter: String,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mode: Mode::Tui,
            log_filter: "info".to_string(),
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETRIS_RESERVE_SEED").and_then(|s| s.trim().parse().ok());
        let mode = lookup("TETRIS_RESERVE_MODE")
            .and_then(|s| Mode::from_str(&s))
            .unwrap_or(defaults.mode);
        let log_filter = lookup("TETRIS_RESERVE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);
        let log_path = lookup("TETRIS_RESERVE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            mode,
            log_filter,
            log_path,
        }
    }

    /// The configured seed, or one taken from the system clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TETRIS_RESERVE_SEED", "42"),
            ("TETRIS_RESERVE_MODE", "LINES"),
            ("TETRIS_RESERVE_LOG", "tetris_reserve_core=debug"),
            ("TETRIS_RESERVE_LOG_PATH", " /tmp/reserve.log "),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.mode, Mode::Lines);
        assert_eq!(config.log_filter, "tetris_reserve_core=debug");
        assert_eq!(config.log_path.as_deref(), Some("/tmp/reserve.log"));
        assert_eq!(config.resolve_seed(), 42);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TETRIS_RESERVE_SEED", "-3"),
            ("TETRIS_RESERVE_MODE", "gui"),
            ("TETRIS_RESERVE_LOG", "  "),
            ("TETRIS_RESERVE_LOG_PATH", ""),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}
