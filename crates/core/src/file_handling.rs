//! Loading of the YAML files the CLI works from: settings, profiles, argument
//! definitions and the command tree.

use std::fs::{self, File};
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::definitions::{ArgumentDefinitions, CommandNode};
use crate::error::{Error, Result};
use crate::merge::{LoadedProfile, LoadedProfiles};
use crate::settings::Settings;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn read_yaml<T: DeserializeOwned>(file_description: &str, path: &str) -> Result<T> {
    let reader = get_reader(file_description, path)?;

    let parsed = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            file_description.to_string(),
            path.to_string(),
            e,
        )
    })?;

    info!("Loaded {} file `{}`", file_description, path);
    Ok(parsed)
}

/// Reads the settings file, falling back to defaults when it doesn't exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn get_settings(settings_path: &str) -> Result<Settings> {
    if !Path::new(settings_path).exists() {
        info!("No settings file at `{}`, using defaults", settings_path);
        return Ok(Settings::default());
    }

    read_yaml("settings", settings_path)
}

/// Writes settings to disk, creating the parent directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or
/// serialization fails.
pub fn write_settings(settings_path: &str, settings: &Settings) -> Result<()> {
    if let Some(parent) = Path::new(settings_path).parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::io_error(
                "settings directory".to_string(),
                parent.display().to_string(),
                e,
            )
        })?;
    }

    let f = File::create(settings_path)
        .map_err(|e| Error::io_error("settings".to_string(), settings_path.to_string(), e))?;

    serde_yaml::to_writer(f, settings).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })
}

/// Reads a YAML list of `{type, name, properties}` profiles, keeping their
/// order.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn get_profiles(profiles_path: &str) -> Result<LoadedProfiles> {
    let profiles: Vec<LoadedProfile> = read_yaml("profiles", profiles_path)?;
    Ok(LoadedProfiles::new(profiles))
}

/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn get_argument_definitions(definitions_path: &str) -> Result<ArgumentDefinitions> {
    read_yaml("argument definitions", definitions_path)
}

/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn get_command_tree(tree_path: &str) -> Result<CommandNode> {
    read_yaml("command tree", tree_path)
}
