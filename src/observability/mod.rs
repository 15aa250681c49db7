//! Observability for the CLI
//!
//! Structured JSON-lines logging with typed events. Logging is read-only and
//! synchronous; it never changes what a command computes.
//!
//! # Usage
//!
//! ```ignore
//! use ipv6canon::observability::{Event, Logger, Severity};
//!
//! let logger = Logger::new(Severity::Info);
//! logger.log_event(Event::CommandStart, &[("command", "expand")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

impl Logger {
    /// Log a lifecycle event at the event's own severity
    pub fn log_event(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(event.severity(), event.as_str(), fields);
    }
}
