//! Configuration path utilities for argot.
//!
//! This module resolves the settings file path and expands shell variables
//! like `~` in user supplied paths.

/// Default path for the settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.argot/settings.yml";

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use argot_core::config::get_settings_path;
///
/// let default_path = get_settings_path(None);
/// assert!(default_path.ends_with("settings.yml"));
///
/// let custom_path = get_settings_path(Some("/path/to/settings.yml"));
/// assert_eq!(custom_path, "/path/to/settings.yml");
/// ```
#[must_use]
pub fn get_settings_path(settings_path_arg: Option<&str>) -> String {
    expand_path(settings_path_arg.unwrap_or(DEFAULT_SETTINGS_PATH))
}

/// Expands `~` and environment variables in a path, leaving it untouched when
/// expansion fails.
#[must_use]
pub fn expand_path(path: &str) -> String {
    match shellexpand::full(path) {
        Ok(expanded) => expanded.to_string(),
        Err(_) => shellexpand::tilde(path).to_string(),
    }
}
