// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.
//!
//! Centralizing defaults here keeps `serde(default = ...)` attributes and
//! the `Default` impls in `mod.rs` in agreement.

use crate::ui::theming::ThemeMode;

/// Base URL of the back-office REST API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Request timeout for backend calls, in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Auto-dismiss duration applied to toasts that do not specify one, in
/// milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

pub fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

pub fn default_api_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}

pub fn default_api_timeout_secs() -> Option<u64> {
    Some(DEFAULT_API_TIMEOUT_SECS)
}

pub fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}
