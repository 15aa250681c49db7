//! CLI argument definitions using clap
//!
//! Commands:
//! - ipv6canon validate <literal>
//! - ipv6canon expand <literal>
//! - ipv6canon abbreviate <literal>
//! - ipv6canon canonicalize <literal>
//! - ipv6canon to-binary <value> [--from hex|decimal] [--keep-leading-zeros]
//! - ipv6canon to-hex <value> [--from binary|decimal]
//! - ipv6canon to-decimal <value> --base <2|16>

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::observability::Severity;

/// ipv6canon - IPv6 literal canonicalization and numeral base conversion
#[derive(Parser, Debug)]
#[command(name = "ipv6canon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Render results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Minimum log severity written to stderr (trace, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<Severity>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check an IPv6 literal against the address grammar
    Validate {
        /// IPv6 literal
        literal: String,
    },

    /// Expand an IPv6 literal to eight four-digit segments
    Expand {
        /// IPv6 literal
        literal: String,
    },

    /// Abbreviate an IPv6 literal to its shortest form
    Abbreviate {
        /// IPv6 literal
        literal: String,
    },

    /// Expand an IPv6 literal, then abbreviate the expanded form
    Canonicalize {
        /// IPv6 literal
        literal: String,
    },

    /// Convert hex digits or a decimal integer to binary digits
    ToBinary {
        /// Numeral to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Notation of the input value
        #[arg(long, value_enum, default_value = "hex")]
        from: BinarySource,

        /// Keep leading zeros of hex input (four bits per hex digit)
        #[arg(long)]
        keep_leading_zeros: bool,
    },

    /// Convert binary digits or a decimal integer to hex digits
    ToHex {
        /// Numeral to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Notation of the input value
        #[arg(long, value_enum, default_value = "binary")]
        from: HexSource,
    },

    /// Decimal value of a binary or hex numeral
    ToDecimal {
        /// Numeral to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Base of the numeral (2 or 16)
        #[arg(long)]
        base: u32,
    },
}

impl Command {
    /// Command name as logged
    pub fn name(&self) -> &'static str {
        match self {
            Command::Validate { .. } => "validate",
            Command::Expand { .. } => "expand",
            Command::Abbreviate { .. } => "abbreviate",
            Command::Canonicalize { .. } => "canonicalize",
            Command::ToBinary { .. } => "to-binary",
            Command::ToHex { .. } => "to-hex",
            Command::ToDecimal { .. } => "to-decimal",
        }
    }
}

/// Accepted inputs for `to-binary`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinarySource {
    Hex,
    Decimal,
}

/// Accepted inputs for `to-hex`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexSource {
    Binary,
    Decimal,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
