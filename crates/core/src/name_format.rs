//! Option name canonicalization.
//!
//! Every option can be spelled in camelCase (`basicAuth`) or kebab-case
//! (`basic-auth`). The functions here convert between the two spellings and
//! build the small formatting helpers that depend on them.

use std::collections::HashMap;

use leon::Template;
use serde_yaml::Value;

use crate::argument_set::ArgumentSet;
use crate::error::{Error, Result};

const SEPARATOR: char = '-';

const HELP_HEADER_TEMPLATE: &str = "{indent}{header}\n{indent}{dashes}";

/// Both canonical spellings of an option name, along with the key that was
/// originally supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionNames {
    pub key: String,
    pub camel_case: String,
    pub kebab_case: String,
}

/// Canonicalizes `name` into its camelCase and kebab-case spellings.
///
/// # Examples
///
/// ```
/// use argot_core::name_format::format_option;
///
/// let names = format_option("hello--------world");
/// assert_eq!(names.camel_case, "helloWorld");
/// assert_eq!(names.kebab_case, "hello-world");
/// ```
#[must_use]
pub fn format_option(name: &str) -> OptionNames {
    OptionNames {
        key: name.to_string(),
        camel_case: to_camel_case(name),
        kebab_case: to_kebab_case(name),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replaces each run of separators and the word character that follows it
/// with that character uppercased. Runs with no following word character
/// vanish.
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut camel = String::with_capacity(name.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != SEPARATOR {
            camel.push(chars[i]);
            i += 1;
            continue;
        }

        while i < chars.len() && chars[i] == SEPARATOR {
            i += 1;
        }

        if i < chars.len() && is_word_char(chars[i]) {
            camel.extend(chars[i].to_uppercase());
            i += 1;
        }
    }

    camel
}

/// Lowercases each uppercase letter behind a single separator, collapses
/// repeated separators and drops trailing ones.
#[must_use]
pub fn to_kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut kebab = String::with_capacity(name.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != SEPARATOR && !c.is_ascii_uppercase() {
            kebab.push(c);
            i += 1;
            continue;
        }

        let mut end = i;
        while end < chars.len() && chars[end] == SEPARATOR {
            end += 1;
        }

        if end < chars.len() && chars[end].is_ascii_uppercase() {
            kebab.push(SEPARATOR);
            kebab.push(chars[end].to_ascii_lowercase());
            i = end + 1;
            continue;
        }

        // A run of separators only: collapse it, or drop it at the end.
        if end < chars.len() {
            kebab.push(SEPARATOR);
        }
        i = end;
    }

    kebab
}

/// Returns the flag spelling of an option: `-p` for single characters and
/// `--password` for everything else.
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] if `name` is empty.
pub fn dash_form(name: &str) -> Result<String> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(Error::InvalidOption),
        (Some(_), None) => Ok(format!("-{name}")),
        _ => Ok(format!("--{name}")),
    }
}

#[must_use]
pub fn positional_syntax(required: bool, name: &str) -> String {
    if required {
        format!("<{name}>")
    } else {
        format!("[{name}]")
    }
}

/// Builds an argument fragment that exposes `value` under both spellings
/// of `name`.
#[must_use]
pub fn set_option_value(name: &str, value: Value) -> ArgumentSet {
    let names = format_option(name);
    let mut fragment = ArgumentSet::new();
    fragment.insert(names.camel_case, value.clone());
    fragment.insert(names.kebab_case, value);
    fragment
}

/// Formats a help section header: the uppercased header with a dashed
/// underline of the same width, both lines prefixed by `indent`.
///
/// # Errors
///
/// Returns [`Error::EmptyHeader`] if the header is empty or whitespace, or a
/// template error if rendering fails.
pub fn format_help_header(header: &str, indent: &str) -> Result<String> {
    if header.trim().is_empty() {
        return Err(Error::EmptyHeader);
    }

    let template = Template::parse(HELP_HEADER_TEMPLATE)?;
    let mut context: HashMap<String, String> = HashMap::new();
    context.insert("indent".to_string(), indent.to_string());
    context.insert("header".to_string(), header.to_uppercase());
    context.insert(
        "dashes".to_string(),
        SEPARATOR.to_string().repeat(header.chars().count()),
    );

    Ok(template.render(&context)?)
}
