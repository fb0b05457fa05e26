//! Application settings and their one-time initialization.

use serde::{Deserialize, Serialize};

use crate::censor::CensoredNames;
use crate::error::{Error, Result};

/// Default prefix for option environment variables
pub const DEFAULT_APP_PREFIX: &str = "ARGOT";
/// Default name of the root command used in usage hints
pub const DEFAULT_ROOT_COMMAND_NAME: &str = "argot";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_app_prefix")]
    pub app_prefix: String,
    #[serde(default = "default_root_command_name")]
    pub root_command_name: String,
    /// Option names censored in addition to the built-in ones
    #[serde(default)]
    pub censored_options: Vec<String>,
}

fn default_app_prefix() -> String {
    DEFAULT_APP_PREFIX.to_string()
}

fn default_root_command_name() -> String {
    DEFAULT_ROOT_COMMAND_NAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_prefix: default_app_prefix(),
            root_command_name: default_root_command_name(),
            censored_options: Vec::new(),
        }
    }
}

impl Settings {
    /// The built-in censored names extended with the configured ones.
    #[must_use]
    pub fn censored_names(&self) -> CensoredNames {
        CensoredNames::default().with_additional(&self.censored_options)
    }
}

/// Holds settings that must be initialized exactly once before use.
#[derive(Debug, Default)]
pub struct SettingsHolder {
    settings: Option<Settings>,
}

impl SettingsHolder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`Error::SettingsAlreadyInitialized`] on a second call.
    pub fn initialize(&mut self, settings: Settings) -> Result<&Settings> {
        if self.settings.is_some() {
            return Err(Error::SettingsAlreadyInitialized);
        }

        Ok(self.settings.insert(settings))
    }

    /// # Errors
    ///
    /// Returns [`Error::SettingsNotInitialized`] before [`Self::initialize`].
    pub fn get(&self) -> Result<&Settings> {
        self.settings.as_ref().ok_or(Error::SettingsNotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_once() {
        let mut holder = SettingsHolder::new();
        assert!(holder.initialize(Settings::default()).is_ok());
        assert!(matches!(
            holder.initialize(Settings::default()),
            Err(Error::SettingsAlreadyInitialized)
        ));
    }

    #[test]
    fn test_get_before_initialize_fails() {
        let holder = SettingsHolder::new();
        assert!(matches!(holder.get(), Err(Error::SettingsNotInitialized)));
    }

    #[test]
    fn test_get_after_initialize() {
        let mut holder = SettingsHolder::new();
        let settings = Settings {
            app_prefix: "MYAPP".to_string(),
            ..Settings::default()
        };
        holder.initialize(settings.clone()).unwrap();
        assert_eq!(holder.get().unwrap(), &settings);
    }

    #[test]
    fn test_deserialize_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("censored_options: [apiKey]").unwrap();
        assert_eq!(settings.app_prefix, DEFAULT_APP_PREFIX);
        assert_eq!(settings.root_command_name, DEFAULT_ROOT_COMMAND_NAME);

        let names = settings.censored_names();
        assert!(names.contains("api-key"));
        assert!(names.contains("password"));
    }
}
