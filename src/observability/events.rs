//! Observable CLI events
//!
//! Engine functions never log; only the CLI collaborator emits these.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded
    ConfigLoaded,
    /// A command started
    CommandStart,
    /// A command produced its result
    CommandComplete,
    /// A command returned an error
    CommandFailed,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CommandStart => "COMMAND_START",
            Event::CommandComplete => "COMMAND_COMPLETE",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Failures are logged at ERROR, the rest at INFO
    pub fn severity(&self) -> Severity {
        match self {
            Event::CommandFailed => Severity::Error,
            Event::ConfigLoaded | Event::CommandStart | Event::CommandComplete => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
