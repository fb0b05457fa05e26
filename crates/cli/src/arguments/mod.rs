//! Option values supplied directly on the command line.
//!
//! Values are given as repeated `--set key=value` flags. Each value is parsed
//! as a YAML scalar, so `443` becomes a number and `true` a boolean, and is
//! stored under both spellings of its option name.

// Export public items from submodules
pub mod processing;

// Re-exports for convenience
pub use processing::parse_values;

use argot_core::argument_set::ArgumentSet;
use argot_core::error::Result;

/// Trait for argument structures that carry option values of their own.
pub trait ValueProvider {
    /// Returns the directly supplied values keyed by both name spellings.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is not in `key=value` format.
    fn command_line_values(&self) -> Result<ArgumentSet>;
}
