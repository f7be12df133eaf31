//! Host notifier protocol and failure events.

use std::fmt;

use crate::cause::FailureCause;
use crate::description::Description;

/// A failure event: the failed node paired with its cause.
pub struct Failure {
    description: Description,
    cause: Box<dyn FailureCause>,
}

impl Failure {
    /// Pairs `description` with `cause`.
    #[must_use]
    pub fn new(description: Description, cause: impl FailureCause + 'static) -> Self {
        Self {
            description,
            cause: Box::new(cause),
        }
    }

    /// Returns the failed node.
    #[must_use]
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the cause of the failure.
    #[must_use]
    pub fn cause(&self) -> &dyn FailureCause {
        self.cause.as_ref()
    }

    /// Returns the cause's message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.cause.message()
    }

    /// Returns the rendered trace of the cause.
    #[must_use]
    pub fn trace(&self) -> String {
        self.cause.trace()
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("description", &self.description.display_name())
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description.display_name(), self.cause)
    }
}

/// Event sink through which a runner reports progress.
///
/// Only failures must be handled; the lifecycle callbacks default to no-ops.
pub trait Notifier {
    /// A scenario is about to run.
    fn test_started(&mut self, description: &Description) {
        let _ = description;
    }

    /// A scenario finished, whether it passed or failed.
    fn test_finished(&mut self, description: &Description) {
        let _ = description;
    }

    /// A scenario was skipped without running.
    fn test_ignored(&mut self, description: &Description) {
        let _ = description;
    }

    /// A scenario failed.
    fn test_failure(&mut self, failure: Failure);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn test_started(&mut self, description: &Description) {
        (**self).test_started(description);
    }

    fn test_finished(&mut self, description: &Description) {
        (**self).test_finished(description);
    }

    fn test_ignored(&mut self, description: &Description) {
        (**self).test_ignored(description);
    }

    fn test_failure(&mut self, failure: Failure) {
        (**self).test_failure(failure);
    }
}
