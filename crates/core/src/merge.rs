//! Precedence merging of option values from profiles, the environment and
//! the command line.

use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::argument_set::ArgumentSet;
use crate::definitions::{ArgumentDefinitions, ValueType};
use crate::error::{Error, Result};
use crate::name_format::{format_option, set_option_value};

/// Segment between the application prefix and the option name in
/// environment variable names, e.g. `ARGOT_OPT_HOST`.
pub const ENV_OPTION_SEGMENT: &str = "OPT";

/// A flat key/value bag loaded from a profile.
pub type Profile = IndexMap<String, Value>;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoadedProfile {
    #[serde(rename = "type")]
    pub profile_type: String,
    pub name: String,
    #[serde(default)]
    pub properties: Profile,
}

/// Provides loaded profiles by type.
pub trait ProfileSource {
    /// Returns the first loaded profile of `profile_type`, if any.
    fn get(&self, profile_type: &str, must_exist: bool) -> Option<&Profile>;
}

/// Profiles in the order they were loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedProfiles {
    profiles: Vec<LoadedProfile>,
}

impl LoadedProfiles {
    #[must_use]
    pub fn new(profiles: Vec<LoadedProfile>) -> Self {
        Self { profiles }
    }

    pub fn push(&mut self, profile: LoadedProfile) {
        self.profiles.push(profile);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadedProfile> {
        self.profiles.iter()
    }
}

impl ProfileSource for LoadedProfiles {
    fn get(&self, profile_type: &str, must_exist: bool) -> Option<&Profile> {
        let found = self
            .profiles
            .iter()
            .find(|profile| profile.profile_type == profile_type);

        match found {
            Some(profile) => {
                debug!("Using {} profile \"{}\"", profile_type, profile.name);
                Some(&profile.properties)
            }
            None => {
                if must_exist {
                    debug!("No {} profile is loaded", profile_type);
                }
                None
            }
        }
    }
}

/// Read-only view of environment variables.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Collects option values from profiles, taking profile types strictly in
/// `profile_order`.
///
/// The first profile that supplies a non-null value for an option wins; later
/// profiles never override it.
///
/// # Errors
///
/// Returns [`Error::ProfileNotFound`] if a profile type in `profile_order`
/// has no loaded profile. No partial result is returned.
pub fn extract_from_profiles<P: ProfileSource + ?Sized>(
    profiles: &P,
    profile_order: &[String],
    definitions: &ArgumentDefinitions,
) -> Result<ArgumentSet> {
    let mut extracted = ArgumentSet::new();

    for profile_type in profile_order {
        let profile = profiles
            .get(profile_type, true)
            .ok_or_else(|| Error::profile_not_found(profile_type))?;

        for (name, _) in definitions.named() {
            let Some(value) = profile.get(name) else {
                continue;
            };

            if value.is_null() {
                continue;
            }

            let names = format_option(name);
            if extracted.contains_key(&names.camel_case) || extracted.contains_key(&names.kebab_case)
            {
                debug!(
                    "Option \"{}\" already set by an earlier profile, ignoring {} profile value",
                    name, profile_type
                );
                continue;
            }

            debug!("Option \"{}\" taken from {} profile", name, profile_type);
            extracted.overwrite_with(&set_option_value(name, value.clone()));
        }
    }

    Ok(extracted)
}

/// Combines argument sets left to right; later sets overwrite earlier ones
/// key for key.
///
/// # Examples
///
/// ```
/// use argot_core::argument_set::ArgumentSet;
/// use argot_core::merge::merge;
/// use serde_yaml::Value;
///
/// let first: ArgumentSet = [("a", Value::from(1))].into_iter().collect();
/// let second: ArgumentSet = [("a", Value::from(2)), ("b", Value::from(3))]
///     .into_iter()
///     .collect();
///
/// let merged = merge([&first, &second]);
/// assert_eq!(merged.get("a"), Some(&Value::from(2)));
/// assert_eq!(merged.get("b"), Some(&Value::from(3)));
/// ```
pub fn merge<'a, I>(sources: I) -> ArgumentSet
where
    I: IntoIterator<Item = &'a ArgumentSet>,
{
    let mut merged = ArgumentSet::new();
    for source in sources {
        merged.overwrite_with(source);
    }
    merged
}

/// Builds the environment variable name for an option, e.g.
/// `ARGOT_OPT_REJECT_UNAUTHORIZED` for `rejectUnauthorized`.
#[must_use]
pub fn env_var_name(app_prefix: &str, option_name: &str) -> String {
    let to_env = |segment: &str| segment.to_uppercase().replace('-', "_");
    format!(
        "{}_{}_{}",
        to_env(app_prefix),
        ENV_OPTION_SEGMENT,
        to_env(&format_option(option_name).kebab_case)
    )
}

/// Collects option values from environment variables named by
/// [`env_var_name`], converting each to the option's value type.
pub fn extract_from_environment<E: Environment + ?Sized>(
    app_prefix: &str,
    definitions: &ArgumentDefinitions,
    environment: &E,
) -> ArgumentSet {
    let mut extracted = ArgumentSet::new();

    for option in &definitions.options {
        let variable = env_var_name(app_prefix, &option.name);
        let Some(raw) = environment.var(&variable) else {
            continue;
        };

        debug!("Option \"{}\" taken from environment variable {}", option.name, variable);
        extracted.overwrite_with(&set_option_value(
            &option.name,
            parse_env_value(&raw, option.value_type),
        ));
    }

    extracted
}

/// Converts a raw environment value to the option's value type. Values that
/// do not parse as the expected type are kept as strings.
#[must_use]
pub fn parse_env_value(raw: &str, value_type: ValueType) -> Value {
    match value_type {
        ValueType::String => Value::from(raw),
        ValueType::Boolean => {
            if raw.eq_ignore_ascii_case("true") {
                Value::Bool(true)
            } else if raw.eq_ignore_ascii_case("false") {
                Value::Bool(false)
            } else {
                Value::from(raw)
            }
        }
        ValueType::Number => {
            let trimmed = raw.trim();
            if let Ok(integer) = trimmed.parse::<i64>() {
                Value::from(integer)
            } else if let Ok(float) = trimmed.parse::<f64>() {
                Value::from(float)
            } else {
                Value::from(raw)
            }
        }
        ValueType::Array => Value::Sequence(
            split_env_array(raw)
                .into_iter()
                .map(Value::from)
                .collect(),
        ),
    }
}

/// Splits on unescaped spaces; `\ ` yields a literal space inside an item.
fn split_env_array(raw: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&' ') => {
                current.push(' ');
                chars.next();
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    items.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        items.push(current);
    }

    items
}

/// Folds profile, environment and command line values into one set.
/// Command line values beat environment values, which beat profile values.
#[must_use]
pub fn resolve_arguments(
    from_profiles: &ArgumentSet,
    from_environment: &ArgumentSet,
    from_command_line: &ArgumentSet,
) -> ArgumentSet {
    merge([from_profiles, from_environment, from_command_line])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{OptionDefinition, PositionalDefinition};

    fn profile(profile_type: &str, name: &str, properties: &[(&str, Value)]) -> LoadedProfile {
        LoadedProfile {
            profile_type: profile_type.to_string(),
            name: name.to_string(),
            properties: properties
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        }
    }

    fn definitions() -> ArgumentDefinitions {
        ArgumentDefinitions {
            options: vec![
                OptionDefinition::new("host", ValueType::String),
                OptionDefinition::new("port", ValueType::Number),
                OptionDefinition::new("rejectUnauthorized", ValueType::Boolean),
            ],
            positionals: vec![PositionalDefinition::new("dataset", false)],
        }
    }

    fn order(types: &[&str]) -> Vec<String> {
        types.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_merge_later_overrides_earlier() {
        let first: ArgumentSet = [("a", Value::from(1))].into_iter().collect();
        let second: ArgumentSet = [("a", Value::from(2)), ("b", Value::from(3))]
            .into_iter()
            .collect();

        let merged = merge([&first, &second]);
        let expected: ArgumentSet = [("a", Value::from(2)), ("b", Value::from(3))]
            .into_iter()
            .collect();
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_empty_sources() {
        let empty = ArgumentSet::new();
        assert!(merge([&empty, &empty]).is_empty());
        assert!(merge(std::iter::empty::<&ArgumentSet>()).is_empty());
    }

    #[test]
    fn test_merge_is_shallow() {
        let first: ArgumentSet = [("nested", serde_yaml::from_str("{a: 1, b: 2}").unwrap())]
            .into_iter()
            .collect();
        let second: ArgumentSet = [("nested", serde_yaml::from_str("{a: 5}").unwrap())]
            .into_iter()
            .collect();

        let merged = merge([&first, &second]);
        let expected: Value = serde_yaml::from_str("{a: 5}").unwrap();
        assert_eq!(merged.get("nested"), Some(&expected));
    }

    #[test]
    fn test_extract_from_profiles_first_in_order_wins() {
        let profiles = LoadedProfiles::new(vec![
            profile("user", "me", &[("host", Value::from("user.example.com"))]),
            profile("base", "global", &[("host", Value::from("base.example.com"))]),
        ]);

        let extracted =
            extract_from_profiles(&profiles, &order(&["base", "user"]), &definitions()).unwrap();

        assert_eq!(extracted.get("host"), Some(&Value::from("base.example.com")));
    }

    #[test]
    fn test_extract_from_profiles_fills_gaps_from_later_profiles() {
        let profiles = LoadedProfiles::new(vec![
            profile("base", "global", &[("host", Value::from("base.example.com"))]),
            profile(
                "user",
                "me",
                &[("port", Value::from(443)), ("rejectUnauthorized", Value::Bool(false))],
            ),
        ]);

        let extracted =
            extract_from_profiles(&profiles, &order(&["base", "user"]), &definitions()).unwrap();

        assert_eq!(extracted.get("port"), Some(&Value::from(443)));
        assert_eq!(extracted.get("rejectUnauthorized"), Some(&Value::Bool(false)));
        assert_eq!(extracted.get("reject-unauthorized"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_extract_from_profiles_skips_null_and_undefined_options() {
        let profiles = LoadedProfiles::new(vec![
            profile("base", "global", &[("host", Value::Null), ("user", Value::from("me"))]),
            profile("user", "me", &[("host", Value::from("user.example.com"))]),
        ]);

        let extracted =
            extract_from_profiles(&profiles, &order(&["base", "user"]), &definitions()).unwrap();

        assert_eq!(extracted.get("host"), Some(&Value::from("user.example.com")));
        assert!(!extracted.contains_key("user"));
    }

    #[test]
    fn test_extract_from_profiles_includes_positionals() {
        let profiles = LoadedProfiles::new(vec![profile(
            "base",
            "global",
            &[("dataset", Value::from("IBMUSER.DATA"))],
        )]);

        let extracted =
            extract_from_profiles(&profiles, &order(&["base"]), &definitions()).unwrap();
        assert_eq!(extracted.get("dataset"), Some(&Value::from("IBMUSER.DATA")));
    }

    #[test]
    fn test_extract_from_profiles_missing_type_fails() {
        let profiles = LoadedProfiles::new(vec![profile("base", "global", &[])]);

        let result = extract_from_profiles(&profiles, &order(&["base", "zosmf"]), &definitions());

        match result {
            Err(Error::ProfileNotFound {
                message,
                additional_details,
            }) => {
                assert!(message.contains("zosmf"));
                assert!(!additional_details.is_empty());
            }
            other => panic!("Expected ProfileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(env_var_name("argot", "host"), "ARGOT_OPT_HOST");
        assert_eq!(
            env_var_name("my-app", "rejectUnauthorized"),
            "MY_APP_OPT_REJECT_UNAUTHORIZED"
        );
    }

    #[test]
    fn test_extract_from_environment_types_values() {
        let mut environment = HashMap::new();
        environment.insert("ARGOT_OPT_HOST".to_string(), "env.example.com".to_string());
        environment.insert("ARGOT_OPT_PORT".to_string(), "8443".to_string());
        environment.insert(
            "ARGOT_OPT_REJECT_UNAUTHORIZED".to_string(),
            "FALSE".to_string(),
        );
        environment.insert("ARGOT_OPT_DATASET".to_string(), "ignored".to_string());

        let extracted = extract_from_environment("argot", &definitions(), &environment);

        assert_eq!(extracted.get("host"), Some(&Value::from("env.example.com")));
        assert_eq!(extracted.get("port"), Some(&Value::from(8443)));
        assert_eq!(extracted.get("reject-unauthorized"), Some(&Value::Bool(false)));
        assert!(!extracted.contains_key("dataset"));
    }

    #[test]
    fn test_extract_from_environment_empty() {
        let environment: HashMap<String, String> = HashMap::new();
        assert!(extract_from_environment("argot", &definitions(), &environment).is_empty());
    }

    #[test]
    fn test_parse_env_value_fallbacks() {
        assert_eq!(parse_env_value("yes", ValueType::Boolean), Value::from("yes"));
        assert_eq!(parse_env_value("1.5", ValueType::Number), Value::from(1.5));
        assert_eq!(parse_env_value("abc", ValueType::Number), Value::from("abc"));
    }

    #[test]
    fn test_parse_env_value_array_with_escaped_spaces() {
        let value = parse_env_value("one two\\ words  three", ValueType::Array);
        let expected = Value::Sequence(vec![
            Value::from("one"),
            Value::from("two words"),
            Value::from("three"),
        ]);
        assert_eq!(value, expected);
    }

    #[test]
    fn test_resolve_arguments_precedence() {
        let from_profiles = merge([
            &set_option_value("host", Value::from("profile")),
            &set_option_value("port", Value::from(1)),
            &set_option_value("user", Value::from("ibmuser")),
        ]);
        let from_environment = merge([
            &set_option_value("host", Value::from("env")),
            &set_option_value("port", Value::from(2)),
        ]);
        let from_command_line = set_option_value("host", Value::from("cli"));

        let resolved = resolve_arguments(&from_profiles, &from_environment, &from_command_line);

        assert_eq!(resolved.get("host"), Some(&Value::from("cli")));
        assert_eq!(resolved.get("port"), Some(&Value::from(2)));
        assert_eq!(resolved.get("user"), Some(&Value::from("ibmuser")));
    }
}
