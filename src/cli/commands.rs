//! CLI command implementations
//!
//! Commands are thin: they call the engine, then render the result or the
//! failure reason. No canonicalization logic lives here.

use std::str::FromStr;

use crate::address;
use crate::numeral::{self, BigInt};
use crate::observability::{Event, Logger};

use super::args::{BinarySource, Cli, Command, HexSource};
use super::config::{Config, OutputFormat};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response, write_text, CommandOutput};

/// Effective settings after merging the config file with command-line flags
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub output_format: OutputFormat,
    pub keep_leading_zeros: bool,
    pub logger: Logger,
}

impl Settings {
    /// Merge `config` with the overriding flags in `cli`
    pub fn resolve(cli: &Cli, config: &Config) -> CliResult<Self> {
        let output_format = if cli.json {
            OutputFormat::Json
        } else {
            config.output_format()?
        };

        let severity = match cli.log_level {
            Some(level) => level,
            None => config.severity()?,
        };

        Ok(Self {
            output_format,
            keep_leading_zeros: config.keep_leading_zeros,
            logger: Logger::new(severity),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            keep_leading_zeros: false,
            logger: Logger::default(),
        }
    }
}

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = Config::load_or_default(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, &config)?;

    if let Some(path) = &cli.config {
        let path = path.display().to_string();
        settings
            .logger
            .log_event(Event::ConfigLoaded, &[("path", path.as_str())]);
    }

    run_command(&cli.command, &settings)
}

/// Run a command and render its result
pub fn run_command(cmd: &Command, settings: &Settings) -> CliResult<()> {
    let logger = &settings.logger;
    logger.log_event(Event::CommandStart, &[("command", cmd.name())]);

    match execute(cmd, settings) {
        Ok(output) => {
            logger.log_event(Event::CommandComplete, &[("command", cmd.name())]);
            match settings.output_format {
                OutputFormat::Text => write_text(&output),
                OutputFormat::Json => write_response(output.to_json()),
            }
        }
        Err(e) => {
            logger.log_event(
                Event::CommandFailed,
                &[
                    ("code", e.code_str()),
                    ("command", cmd.name()),
                    ("message", e.message()),
                ],
            );
            if settings.output_format == OutputFormat::Json {
                write_error(e.code_str(), e.message())?;
            }
            Err(e)
        }
    }
}

/// Compute a command's result without writing anything
pub fn execute(cmd: &Command, settings: &Settings) -> CliResult<CommandOutput> {
    match cmd {
        Command::Validate { literal } => validate(literal),
        Command::Expand { literal } => expand(literal),
        Command::Abbreviate { literal } => abbreviate(literal),
        Command::Canonicalize { literal } => canonicalize(literal),
        Command::ToBinary {
            value,
            from,
            keep_leading_zeros,
        } => to_binary(value, *from, *keep_leading_zeros || settings.keep_leading_zeros),
        Command::ToHex { value, from } => to_hex(value, *from),
        Command::ToDecimal { value, base } => to_decimal(value, *base),
    }
}

/// Check a literal; an invalid literal is reported as an error
pub fn validate(literal: &str) -> CliResult<CommandOutput> {
    address::validate(literal).map_err(address::AddressError::InvalidFormat)?;
    Ok(CommandOutput::single("result", "valid"))
}

pub fn expand(literal: &str) -> CliResult<CommandOutput> {
    let expanded = address::expand(literal)?;
    Ok(CommandOutput::single("expanded", expanded.into_string()))
}

pub fn abbreviate(literal: &str) -> CliResult<CommandOutput> {
    let abbreviated = address::abbreviate(literal)?;
    Ok(CommandOutput::single("abbreviated", abbreviated.into_string()))
}

/// Expand, then abbreviate the expanded form
pub fn canonicalize(literal: &str) -> CliResult<CommandOutput> {
    let expanded = address::expand(literal)?;
    let abbreviated = address::abbreviate(expanded.as_str())?;
    Ok(CommandOutput::new()
        .with("expanded", expanded.into_string())
        .with("abbreviated", abbreviated.into_string()))
}

pub fn to_binary(value: &str, from: BinarySource, keep_leading_zeros: bool) -> CliResult<CommandOutput> {
    let binary = match from {
        BinarySource::Hex => numeral::hex_to_binary(value, keep_leading_zeros)?,
        BinarySource::Decimal => numeral::big_integer_to_binary(&parse_decimal(value)?)?,
    };
    Ok(CommandOutput::single("binary", binary))
}

pub fn to_hex(value: &str, from: HexSource) -> CliResult<CommandOutput> {
    let hex = match from {
        HexSource::Binary => numeral::binary_to_hex(value)?,
        HexSource::Decimal => numeral::big_integer_to_hex(&parse_decimal(value)?)?,
    };
    Ok(CommandOutput::single("hex", hex))
}

pub fn to_decimal(value: &str, base: u32) -> CliResult<CommandOutput> {
    let decimal = numeral::to_decimal(value, base)?;
    Ok(CommandOutput::single("decimal", decimal.to_string()))
}

/// Signed so that negative input reaches the engine's NegativeValue check
fn parse_decimal(value: &str) -> CliResult<BigInt> {
    BigInt::from_str(value.trim())
        .map_err(|_| CliError::invalid_input(format!("Invalid decimal integer: {:?}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cmd: Command) -> CliResult<CommandOutput> {
        execute(&cmd, &Settings::default())
    }

    #[test]
    fn test_canonicalize_matches_driver_flow() {
        let output = run(Command::Canonicalize {
            literal: "0000:0000:3:0000:0000:0000:0:0008".into(),
        })
        .unwrap();
        assert_eq!(output.get("expanded"), Some("0000:0000:0003:0000:0000:0000:0000:0008"));
        assert_eq!(output.get("abbreviated"), Some("0:0:3::8"));
    }

    #[test]
    fn test_validate_reports_reason() {
        assert_eq!(
            run(Command::Validate { literal: "::1".into() }).unwrap().get("result"),
            Some("valid")
        );

        let err = run(Command::Validate { literal: "1:2:3:4:5:6:7:8:9".into() }).unwrap_err();
        assert_eq!(err.code_str(), "IPV6CANON_INVALID_FORMAT");
        assert!(err.message().contains("eight segments"));
    }

    #[test]
    fn test_to_binary_from_hex_and_decimal() {
        let output = run(Command::ToBinary {
            value: "0f".into(),
            from: BinarySource::Hex,
            keep_leading_zeros: false,
        })
        .unwrap();
        assert_eq!(output.get("binary"), Some("1111"));

        let output = run(Command::ToBinary {
            value: "255".into(),
            from: BinarySource::Decimal,
            keep_leading_zeros: false,
        })
        .unwrap();
        assert_eq!(output.get("binary"), Some("11111111"));
    }

    #[test]
    fn test_keep_leading_zeros_from_settings() {
        let settings = Settings {
            keep_leading_zeros: true,
            ..Settings::default()
        };
        let cmd = Command::ToBinary {
            value: "0f".into(),
            from: BinarySource::Hex,
            keep_leading_zeros: false,
        };
        assert_eq!(execute(&cmd, &settings).unwrap().get("binary"), Some("00001111"));
    }

    #[test]
    fn test_negative_decimal_is_rejected() {
        let err = run(Command::ToHex { value: "-5".into(), from: HexSource::Decimal }).unwrap_err();
        assert_eq!(err.code_str(), "IPV6CANON_NEGATIVE_VALUE");
    }

    #[test]
    fn test_malformed_decimal() {
        let err = run(Command::ToHex { value: "12ab".into(), from: HexSource::Decimal }).unwrap_err();
        assert_eq!(err.code_str(), "IPV6CANON_INVALID_FORMAT");
    }

    #[test]
    fn test_to_decimal_wide_value() {
        let output = run(Command::ToDecimal { value: "1".repeat(68), base: 2 }).unwrap();
        assert_eq!(output.get("decimal"), Some("295147905179352825855"));
    }

    #[test]
    fn test_to_decimal_unsupported_base() {
        let err = run(Command::ToDecimal { value: "11".into(), base: 10 }).unwrap_err();
        assert_eq!(err.code_str(), "IPV6CANON_UNSUPPORTED_BASE");
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let cli = Cli {
            config: None,
            json: true,
            log_level: Some(crate::observability::Severity::Error),
            command: Command::Expand { literal: "::".into() },
        };
        let settings = Settings::resolve(&cli, &Config::default()).unwrap();
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert_eq!(settings.logger.min_severity(), crate::observability::Severity::Error);
    }
}
