//! Failure causes carried by host failure events.
//!
//! A failure cause is anything that exposes a message and can render a trace.
//! Scenario-level failures use [`MessageOnlyFailureCause`], which renders the
//! message alone. Faults in the bridging setup use [`NativeCause`], which keeps
//! the error chain and a captured backtrace.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;

use crate::error::BoxError;

/// Capability set the host requires from the cause of a failure.
pub trait FailureCause: fmt::Display + fmt::Debug + Send + Sync {
    /// Returns the human-readable message.
    fn message(&self) -> &str;

    /// Writes the trace shown beneath a failure in reports.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `sink` fails.
    fn render_trace(&self, sink: &mut dyn fmt::Write) -> fmt::Result;

    /// Renders the trace into a new string.
    fn trace(&self) -> String {
        let mut rendered = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.render_trace(&mut rendered);
        rendered
    }
}

/// A failure cause whose message and trace are exactly the supplied text.
///
/// The trace is a single line holding the message, with no frames.
///
/// # Examples
///
/// ```
/// use scenario_bridge::{FailureCause, MessageOnlyFailureCause};
///
/// let cause = MessageOnlyFailureCause::new("expected 4, got 5");
/// assert_eq!(cause.message(), "expected 4, got 5");
/// assert_eq!(cause.to_string(), "expected 4, got 5");
/// assert_eq!(cause.trace(), "expected 4, got 5\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageOnlyFailureCause {
    message: String,
}

impl MessageOnlyFailureCause {
    /// Wraps `message` as a failure cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Consumes the cause and returns the message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for MessageOnlyFailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl FailureCause for MessageOnlyFailureCause {
    fn message(&self) -> &str {
        &self.message
    }

    fn render_trace(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(sink, "{}", self.message)
    }
}

/// A failure cause backed by a native Rust error.
///
/// The trace lists the error, each `caused by:` source, and the backtrace
/// captured when the cause was created (if backtraces are enabled).
#[derive(Debug)]
pub struct NativeCause {
    message: String,
    error: BoxError,
    backtrace: Backtrace,
}

impl NativeCause {
    /// Wraps `error`, capturing a backtrace at the call site.
    #[must_use]
    pub fn new(error: impl Into<BoxError>) -> Self {
        let error = error.into();
        Self {
            message: error.to_string(),
            error,
            backtrace: Backtrace::capture(),
        }
    }

    /// Returns the wrapped error.
    #[must_use]
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.error.as_ref()
    }
}

impl fmt::Display for NativeCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl FailureCause for NativeCause {
    fn message(&self) -> &str {
        &self.message
    }

    fn render_trace(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(sink, "{}", self.message)?;
        let mut source = self.error.source();
        while let Some(cause) = source {
            writeln!(sink, "caused by: {cause}")?;
            source = cause.source();
        }
        if self.backtrace.status() == BacktraceStatus::Captured {
            writeln!(sink, "stack backtrace:")?;
            writeln!(sink, "{}", self.backtrace)?;
        }
        Ok(())
    }
}
