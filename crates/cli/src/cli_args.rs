//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure of the `argot`
//! binary using the `clap` crate.

use crate::arguments::{parse_values, ValueProvider};
use argot_core::argument_set::ArgumentSet;
use argot_core::error::Result;
use clap::{Parser, Subcommand};

/// Command-line arguments for the argot CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use argot_cli::cli_args::Args;
///
/// let args = Args::parse_from(["argot", "censor", "--", "--password", "secret"]);
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.argot/settings.yml`.
    #[arg(long, short = 's', global = true)]
    pub settings_path: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a raw command line with sensitive values replaced by `****`.
    Censor {
        /// The tokens to censor, usually given after `--`.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Merge option values from profiles, the environment and the command line.
    Resolve(ResolveArgs),

    /// Diagnose a command line that matches no known command.
    Suggest {
        /// Path to the command tree YAML.
        #[arg(long, short = 't')]
        tree_path: String,

        /// The words of the mistyped command.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Write a default settings file.
    InitSettings {
        /// Overwrite an existing settings file.
        #[arg(long, short = 'f', action)]
        force: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Path to the option and positional definitions YAML.
    #[arg(long, short = 'd')]
    pub definitions_path: String,

    /// Path to the loaded profiles YAML.
    #[arg(long, short = 'p')]
    pub profiles_path: Option<String>,

    /// Profile types to read values from, highest precedence first.
    ///
    /// # Examples
    /// ```bash
    /// argot resolve -d defs.yml -p profiles.yml -o zosmf -o base
    /// ```
    #[arg(long = "profile-order", short = 'o', action = clap::ArgAction::Append)]
    pub profile_order: Vec<String>,

    /// Option values in the format key=value; these beat every other source.
    #[arg(long = "set", action = clap::ArgAction::Append)]
    pub values: Vec<String>,
}

impl ValueProvider for ResolveArgs {
    fn command_line_values(&self) -> Result<ArgumentSet> {
        parse_values(&self.values)
    }
}
