//! The argument set handed between the parser, the merge layer and the
//! command handlers.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Ordered mapping of option names (in either spelling) to values, plus the
/// reserved executable name (`$0`) and positional command path (`_`) slots.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ArgumentSet {
    #[serde(rename = "$0", default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,

    #[serde(rename = "_", default, skip_serializing_if = "Vec::is_empty")]
    pub command_path: Vec<String>,

    #[serde(flatten)]
    values: IndexMap<String, Value>,
}

impl ArgumentSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = Some(executable.into());
        self
    }

    #[must_use]
    pub fn with_command_path<I, S>(mut self, command_path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command_path = command_path.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Inserts or overwrites a value, keeping the original position of an
    /// existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.executable.is_none() && self.command_path.is_empty()
    }

    /// Shallow overwrite of this set with every entry of `other`.
    ///
    /// The reserved slots are only replaced when `other` actually carries them.
    pub fn overwrite_with(&mut self, other: &ArgumentSet) {
        if other.executable.is_some() {
            self.executable.clone_from(&other.executable);
        }

        if !other.command_path.is_empty() {
            self.command_path.clone_from(&other.command_path);
        }

        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ArgumentSet {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self {
            executable: None,
            command_path: Vec::new(),
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Display for ArgumentSet {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_yaml::to_string(self) {
            Ok(yaml) => formatter.write_str(yaml.trim_end()),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
