//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, ConvertArgs};
pub use commands::{build_options, handle_config_action, list_charsets, run_convert};
pub use enums::{CharacterSet, EdgeMode, Filter, PolarityArg};
