//! CLI module for ipv6canon
//!
//! Provides command-line interface for:
//! - validate / expand / abbreviate / canonicalize: IPv6 literals
//! - to-binary / to-hex / to-decimal: numeral base conversion

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{BinarySource, Cli, Command, HexSource};
pub use commands::{
    abbreviate, canonicalize, execute, expand, run, run_command, to_binary, to_decimal, to_hex,
    validate, Settings,
};
pub use config::{Config, OutputFormat};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response, write_text, CommandOutput};
