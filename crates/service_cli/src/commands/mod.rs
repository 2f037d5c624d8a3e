//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod price;
pub mod spot;

use clap::ValueEnum;

/// Output format shared by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}
