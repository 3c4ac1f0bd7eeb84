//! Store layer configuration constants
//!
//! Central location for notification timeouts and persisted-preference keys
//! used throughout the store layer.

// ===== Notification Timeouts =====

/// How long success notifications stay visible, in milliseconds
pub const SUCCESS_TIMEOUT_MS: u64 = 3_000;

/// How long informational notifications stay visible, in milliseconds
pub const INFO_TIMEOUT_MS: u64 = 3_000;

/// How long error notifications stay visible, in milliseconds.
/// Longer than the others so failures are not missed.
pub const ERROR_TIMEOUT_MS: u64 = 5_000;

// ===== Persisted Preferences =====

/// Storage key under which the theme preference is persisted
pub const THEME_STORAGE_KEY: &str = "theme";

/// Stored value that selects the dark theme; any other value means light
pub const THEME_DARK_VALUE: &str = "dark";

// ===== UI Defaults =====

/// Default sidebar width in logical pixels; 0 means collapsed
pub const DEFAULT_SIDEBAR_WIDTH: u32 = 256;

/// Default icon assigned to newly created notebooks
pub const DEFAULT_NOTEBOOK_ICON: &str = "📁";
