//! Redaction of sensitive option values before arguments are logged or echoed.

use indexmap::IndexSet;
use log::warn;
use serde_yaml::Value;

use crate::argument_set::ArgumentSet;
use crate::name_format::{dash_form, format_option};

/// Replacement text for every censored value
pub const CENSOR_PLACEHOLDER: &str = "****";

/// Option names whose values are always censored
pub const DEFAULT_CENSORED_OPTIONS: [&str; 12] = [
    "auth",
    "authentication",
    "basicAuth",
    "basic-auth",
    "certFilePassphrase",
    "cert-file-passphrase",
    "credentials",
    "pass",
    "password",
    "passphrase",
    "tokenValue",
    "token-value",
];

/// The set of option names whose values must never be shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensoredNames {
    names: IndexSet<String>,
}

impl Default for CensoredNames {
    fn default() -> Self {
        Self::new(DEFAULT_CENSORED_OPTIONS)
    }
}

impl CensoredNames {
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds extra names in both their camel and kebab spellings.
    #[must_use]
    pub fn with_additional<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if name.is_empty() {
                warn!("Ignoring empty censored option name");
                continue;
            }

            let formatted = format_option(name);
            self.names.insert(formatted.camel_case);
            self.names.insert(formatted.kebab_case);
        }
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Copies a raw command line, replacing the token after each censored
    /// flag with the placeholder.
    ///
    /// Only the first occurrence of a given flag is considered.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::censor::CensoredNames;
    ///
    /// let tokens: Vec<String> = ["--password", "secret123", "--host", "x"]
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// let censored = CensoredNames::new(["password"]).censor_tokens(&tokens);
    /// assert_eq!(censored, ["--password", "****", "--host", "x"]);
    /// ```
    #[must_use]
    pub fn censor_tokens(&self, tokens: &[String]) -> Vec<String> {
        let mut censored = tokens.to_vec();

        for flag in self.names.iter().filter_map(|name| dash_form(name).ok()) {
            let Some(position) = tokens.iter().position(|token| *token == flag) else {
                continue;
            };

            if let Some(value) = censored.get_mut(position + 1) {
                *value = CENSOR_PLACEHOLDER.to_string();
            }
        }

        censored
    }

    /// Copies a parsed argument set, replacing censored values with the
    /// placeholder.
    ///
    /// Any other key holding a value equal to a censored one is treated as an
    /// alias of it and censored too.
    #[must_use]
    pub fn censor_arguments(&self, arguments: &ArgumentSet) -> ArgumentSet {
        let mut censored = arguments.clone();
        let placeholder = Value::from(CENSOR_PLACEHOLDER);

        for (key, original) in arguments.iter() {
            if !self.contains(key) {
                continue;
            }

            censored.insert(key.clone(), placeholder.clone());

            if original.is_null() {
                continue;
            }

            for (alias, value) in arguments.iter() {
                if alias != key && value == original {
                    censored.insert(alias.clone(), placeholder.clone());
                }
            }
        }

        censored
    }
}
