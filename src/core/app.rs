//! Application identity and well-known file names.

pub const NAME: &str = env!("CARGO_PKG_NAME");

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Organization segment of the platform config/cache directories.
pub const VENDOR: &str = "wathiqa";

/// TUI log file, written in the cache directory.
pub const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

/// Display settings, written in the config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Stored API key, written in the config directory.
pub const API_KEY_FILE: &str = "api-key";
