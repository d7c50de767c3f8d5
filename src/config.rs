//! Runtime configuration from environment variables.
//!
//! - `GRID_DRIVE_LOG_DIR`: directory for `grid-drive.log`
//! - `GRID_DRIVE_LOG_DISABLED`: `1` or `true` turns logging off
//! - `GRID_DRIVE_CELL_WIDTH`: terminal columns per grid cell (1..=4, default 2)
//!
//! Unparseable values fall back to the defaults.

use std::path::PathBuf;

pub const LOG_DIR_VAR: &str = "GRID_DRIVE_LOG_DIR";
pub const LOG_DISABLED_VAR: &str = "GRID_DRIVE_LOG_DISABLED";
pub const CELL_WIDTH_VAR: &str = "GRID_DRIVE_CELL_WIDTH";

pub const DEFAULT_CELL_WIDTH: u16 = 2;
pub const MAX_CELL_WIDTH: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_dir: PathBuf,
    pub log_enabled: bool,
    pub cell_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_enabled: true,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(LOG_DIR_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.log_dir = PathBuf::from(dir);
        }

        if let Some(v) = lookup(LOG_DISABLED_VAR) {
            let v = v.trim().to_lowercase();
            config.log_enabled = !(v == "1" || v == "true");
        }

        if let Some(w) = lookup(CELL_WIDTH_VAR).and_then(|s| s.trim().parse::<u16>().ok()) {
            config.cell_width = w.clamp(1, MAX_CELL_WIDTH);
        }

        config
    }
}

/// Platform cache directory for logs, falling back to the temp dir.
pub fn default_log_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Caches")
                .join("grid-drive")
                .join("logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join("grid-drive").join("logs");
        } else if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".cache")
                .join("grid-drive")
                .join("logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local_appdata).join("grid-drive").join("logs");
        }
    }

    std::env::temp_dir().join("grid-drive").join("logs")
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
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[]));
        assert!(config.log_enabled);
        assert_eq!(config.cell_width, DEFAULT_CELL_WIDTH);
        assert_eq!(config.log_dir, default_log_dir());
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            (LOG_DIR_VAR, " /tmp/gd-logs "),
            (LOG_DISABLED_VAR, "TRUE"),
            (CELL_WIDTH_VAR, "3"),
        ]));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/gd-logs"));
        assert!(!config.log_enabled);
        assert_eq!(config.cell_width, 3);
    }

    #[test]
    fn cell_width_is_clamped() {
        assert_eq!(
            Config::from_lookup(lookup(&[(CELL_WIDTH_VAR, "0")])).cell_width,
            1
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(CELL_WIDTH_VAR, "12")])).cell_width,
            MAX_CELL_WIDTH
        );
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[
            (LOG_DIR_VAR, "   "),
            (LOG_DISABLED_VAR, "nope"),
            (CELL_WIDTH_VAR, "wide"),
        ]));
        assert_eq!(config.log_dir, default_log_dir());
        assert!(config.log_enabled);
        assert_eq!(config.cell_width, DEFAULT_CELL_WIDTH);
    }
}
