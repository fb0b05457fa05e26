use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::name_format::{dash_form, positional_syntax};

/// The kind of value an option or positional accepts.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    String,
    Boolean,
    Number,
    Array,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OptionDefinition {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default, rename = "type")]
    pub value_type: ValueType,
    pub description: Option<String>,
}

impl OptionDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            value_type,
            description: None,
        }
    }
}

impl Display for OptionDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let flag = dash_form(&self.name).map_err(|_| std::fmt::Error)?;
        formatter.write_str(&flag)?;

        for alias in &self.aliases {
            if let Ok(alias) = dash_form(alias) {
                write!(formatter, " | {alias}")?;
            }
        }

        if let Some(desc) = &self.description {
            write!(formatter, " ({desc})")?;
        }

        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PositionalDefinition {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, rename = "type")]
    pub value_type: ValueType,
}

impl PositionalDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            value_type: ValueType::String,
        }
    }
}

impl Display for PositionalDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&positional_syntax(self.required, &self.name))
    }
}

/// The options and positionals a single command accepts.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ArgumentDefinitions {
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
    #[serde(default)]
    pub positionals: Vec<PositionalDefinition>,
}

impl ArgumentDefinitions {
    /// Name and value type of every option followed by every positional.
    pub fn named(&self) -> impl Iterator<Item = (&str, ValueType)> {
        self.options
            .iter()
            .map(|option| (option.name.as_str(), option.value_type))
            .chain(
                self.positionals
                    .iter()
                    .map(|positional| (positional.name.as_str(), positional.value_type)),
            )
    }
}

/// A group or command in the command tree.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommandNode {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub children: Vec<CommandNode>,
}

impl CommandNode {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<CommandNode>) -> Self {
        self.children = children;
        self
    }

    /// True when `token` is the node's name or its first alias.
    #[must_use]
    pub fn answers_to(&self, token: &str) -> bool {
        self.name == token || self.aliases.first().is_some_and(|alias| alias == token)
    }
}
