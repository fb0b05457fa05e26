//! Argot Core Library
//!
//! This crate provides the argument normalization and command resolution layer
//! of a CLI framework: option name canonicalization, redaction of sensitive
//! values, precedence merging of option values and diagnostics for unknown
//! commands.
//!
//! # Key Features
//!
//! - **Name Formatting**: Convert option names between camelCase and kebab-case
//! - **Censoring**: Replace sensitive values in raw or parsed arguments with `****`
//! - **Merging**: Fold profile, environment and command line values by precedence
//! - **Suggestions**: Find the nearest known command for a mistyped command line
//! - **Settings**: Load and persist the application settings file
//!
//! # Examples
//!
//! Resolving option values from profiles and the environment:
//!
//! ```no_run
//! use argot_core::file_handling::{get_argument_definitions, get_profiles};
//! use argot_core::merge::{extract_from_environment, extract_from_profiles, ProcessEnvironment};
//!
//! let definitions = get_argument_definitions("definitions.yml")?;
//! let profiles = get_profiles("profiles.yml")?;
//! let order = vec!["base".to_string()];
//!
//! let from_profiles = extract_from_profiles(&profiles, &order, &definitions)?;
//! let from_environment = extract_from_environment("ARGOT", &definitions, &ProcessEnvironment);
//! println!("{from_profiles}\n{from_environment}");
//! # Ok::<(), argot_core::error::Error>(())
//! ```

pub mod argument_set;
pub mod censor;
pub mod config;
pub mod definitions;
pub mod error;
pub mod file_handling;
pub mod merge;
pub mod name_format;
pub mod settings;
pub mod suggest;
