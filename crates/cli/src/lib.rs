//! Argot CLI Library
//!
//! This crate provides the command-line interface for argot. It wires the
//! core argument normalization layer to files, the process environment and
//! the terminal.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`arguments`]: Option values supplied directly with `--set key=value`
//!
//! # Examples
//!
//! ```bash
//! # Censor a raw command line before logging it
//! argot censor -- --password secret --host example.com
//!
//! # Merge profile, environment and command line values
//! argot resolve -d defs.yml -p profiles.yml -o zosmf -o base --set port=443
//!
//! # Suggest the nearest known command
//! argot suggest -t tree.yml zosmff chk
//! ```

pub mod arguments;
pub mod cli_args;
