//! Diagnostics for command lines that do not match any known command.
//!
//! The entered text is compared against the full name of every command in the
//! tree by edit distance, and the closest one is offered as a suggestion.

use std::collections::HashMap;

use leon::Template;
use log::{debug, warn};
use strsim::levenshtein;

use crate::definitions::CommandNode;
use crate::error::Result;

const IMPROPER_SYNTAX: &str = "Command failed due to improper syntax";
const USAGE_TEMPLATE: &str = "Use \"{command} --help\" to view groups, commands, and options.";

/// Group tokens considered when resolving the usage hint
const MAX_GROUP_TOKENS: usize = 2;

/// Outcome of diagnosing an unrecognized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnosis {
    /// Nothing was entered; the caller should show root help instead.
    RootHelp,
    Failure(Suggestion),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Full name of the nearest known command, if the tree has any
    pub closest: Option<String>,
    pub distance: Option<usize>,
    pub message: String,
}

/// Full names of every node below the root, depth first.
#[must_use]
pub fn flatten_command_tree(root: &CommandNode) -> Vec<String> {
    let mut full_names = Vec::new();
    for child in &root.children {
        collect_full_names(child, "", &mut full_names);
    }
    full_names
}

fn collect_full_names(node: &CommandNode, parent: &str, full_names: &mut Vec<String>) {
    let full_name = if parent.is_empty() {
        node.name.clone()
    } else {
        format!("{parent} {}", node.name)
    };

    full_names.push(full_name.clone());
    for child in &node.children {
        collect_full_names(child, &full_name, full_names);
    }
}

/// Finds the candidate with the smallest edit distance to `entered`.
///
/// Ties keep the candidate seen first; blank candidates are skipped.
#[must_use]
pub fn closest_command<'a, I>(entered: &str, candidates: I) -> Option<(String, usize)>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut closest: Option<(String, usize)> = None;

    for candidate in candidates {
        if candidate.trim().is_empty() {
            continue;
        }

        let distance = levenshtein(entered, candidate);
        let is_closer = closest
            .as_ref()
            .map_or(true, |(_, best)| distance < *best);
        if is_closer {
            closest = Some((candidate.clone(), distance));
        }
    }

    closest
}

/// Walks the first group tokens of `entered` down the tree.
///
/// Returns the matched group names and, when two levels matched, the
/// children of the second one.
fn resolve_groups(root: &CommandNode, entered: &str) -> (Vec<String>, Option<Vec<String>>) {
    let tokens: Vec<&str> = entered.split_whitespace().take(MAX_GROUP_TOKENS + 1).collect();
    let mut groups = Vec::new();

    let Some(first) = tokens.first() else {
        return (groups, None);
    };
    let Some(group) = root.children.iter().find(|node| node.answers_to(first)) else {
        return (groups, None);
    };
    groups.push(group.name.clone());

    let Some(second) = tokens.get(1) else {
        return (groups, None);
    };
    let Some(subgroup) = group.children.iter().find(|node| node.answers_to(second)) else {
        return (groups, None);
    };
    groups.push(subgroup.name.clone());

    let available = subgroup
        .children
        .iter()
        .map(|node| node.name.clone())
        .collect();

    (groups, Some(available))
}

fn usage_hint(root: &CommandNode, groups: &[String]) -> Result<String> {
    let command = std::iter::once(root.name.as_str())
        .chain(groups.iter().map(String::as_str))
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join(" ");

    let template = Template::parse(USAGE_TEMPLATE)?;
    let mut context: HashMap<String, String> = HashMap::new();
    context.insert("command".to_string(), command);
    Ok(template.render(&context)?)
}

/// Builds the failure message for `entered`, or routes blank input to root
/// help.
///
/// The message lines are, in order: the syntax error header, the entered
/// command, the suggestion (when one exists), the available commands (when
/// two groups resolved) and a usage hint.
///
/// # Errors
///
/// Returns an error only if the usage hint template fails to render.
pub fn diagnose_unknown_command(root: &CommandNode, entered: &str) -> Result<Diagnosis> {
    if entered.trim().is_empty() {
        debug!("No command entered, routing to root help");
        return Ok(Diagnosis::RootHelp);
    }

    let full_names = flatten_command_tree(root);
    let closest = closest_command(entered, &full_names);
    let (groups, available) = resolve_groups(root, entered);

    let mut lines = vec![
        IMPROPER_SYNTAX.to_string(),
        format!("Command entered: \"{entered}\""),
    ];

    if let Some((name, distance)) = &closest {
        warn!("Unknown command \"{}\", nearest is \"{}\" ({})", entered, name, distance);
        lines.push(format!("Unknown group or command. Did you mean: {name}?"));
    }

    if let Some(available) = &available {
        lines.push(format!("Available commands are \"{}\".", available.join(", ")));
    }

    lines.push(usage_hint(root, &groups)?);

    Ok(Diagnosis::Failure(Suggestion {
        distance: closest.as_ref().map(|(_, distance)| *distance),
        closest: closest.map(|(name, _)| name),
        message: lines.join("\n"),
    }))
}
