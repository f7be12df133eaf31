//! Synthetic failure records.
//!
//! A test-source layer that wants to report a failure without raising one
//! builds a [`FailureRecord`] and hands it to the notifier.

use crate::cause::MessageOnlyFailureCause;
use crate::description::Description;
use crate::error::BridgeError;
use crate::notifier::Failure;

/// A description node paired with a message-only cause.
///
/// # Examples
///
/// ```
/// use scenario_bridge::{Description, FailureCause, FailureRecord};
///
/// let record = FailureRecord::new(Description::test("adds"), "expected 4, got 5");
/// assert_eq!(record.description().display_name(), "adds");
/// assert_eq!(record.cause().message(), "expected 4, got 5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureRecord {
    description: Description,
    cause: MessageOnlyFailureCause,
}

impl FailureRecord {
    /// Pairs `description` with a cause displaying exactly `message`.
    #[must_use]
    pub fn new(description: Description, message: impl Into<String>) -> Self {
        Self {
            description,
            cause: MessageOnlyFailureCause::new(message),
        }
    }

    /// Starts a builder whose inputs may be absent.
    #[must_use]
    pub fn builder() -> FailureRecordBuilder {
        FailureRecordBuilder::default()
    }

    /// Returns the failed node.
    #[must_use]
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the message-only cause.
    #[must_use]
    pub fn cause(&self) -> &MessageOnlyFailureCause {
        &self.cause
    }

    /// Splits the record into its node and cause.
    #[must_use]
    pub fn into_parts(self) -> (Description, MessageOnlyFailureCause) {
        (self.description, self.cause)
    }
}

impl From<FailureRecord> for Failure {
    fn from(record: FailureRecord) -> Self {
        Self::new(record.description, record.cause)
    }
}

/// Builder for [`FailureRecord`] that rejects missing inputs.
///
/// # Examples
///
/// ```
/// use scenario_bridge::{BridgeError, Description, FailureRecord};
///
/// let missing = FailureRecord::builder().message("boom").build();
/// assert!(matches!(missing, Err(BridgeError::InvalidArgument("description"))));
///
/// let built = FailureRecord::builder()
///     .description(Description::test("adds"))
///     .message("boom")
///     .build();
/// assert!(built.is_ok());
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct FailureRecordBuilder {
    description: Option<Description>,
    message: Option<String>,
}

impl FailureRecordBuilder {
    /// Sets the failed node.
    pub fn description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the message the cause displays.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builds the record.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidArgument`] naming the first missing
    /// input.
    pub fn build(self) -> Result<FailureRecord, BridgeError> {
        let description = self
            .description
            .ok_or(BridgeError::InvalidArgument("description"))?;
        let message = self
            .message
            .ok_or(BridgeError::InvalidArgument("message"))?;
        Ok(FailureRecord::new(description, message))
    }
}
