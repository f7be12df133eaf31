//! Scenario failures reported as data.
//!
//! The scenario engine creates a [`ScenarioError`] when an expectation is not
//! met. The error is translated into a [`FailureRecord`] once and then
//! discarded.

use std::fmt;

use thiserror::Error;

use crate::cause::FailureCause;
use crate::description::Description;
use crate::error::BridgeError;
use crate::failure::FailureRecord;
use crate::identity::{ScenarioIdentity, UniqueId};

/// A failed expectation in a declarative scenario.
///
/// The error carries no backtrace: the failure comes from scenario
/// evaluation, not from a fault in code.
///
/// # Examples
///
/// ```
/// use scenario_bridge::{Description, ScenarioError, UniqueId};
///
/// let mut row = UniqueId::new();
/// row.insert("a".into(), 2.into());
/// let error = ScenarioError::parameterized("doubles", row.clone(), "expected 4, got 5");
/// assert_eq!(error.unique_id(), Some(&row));
///
/// let record = error.into_failure(Description::test("doubles {a=2}"));
/// assert_eq!(record.cause().to_string(), "expected 4, got 5");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ScenarioError {
    identity: ScenarioIdentity,
    message: String,
}

impl ScenarioError {
    /// Reports a failure of a scenario that is not parameterized.
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::from_identity(ScenarioIdentity::new(name), message)
    }

    /// Reports a failure of one invocation of a parameterized scenario.
    #[must_use]
    pub fn parameterized(
        name: impl Into<String>,
        unique_id: UniqueId,
        message: impl Into<String>,
    ) -> Self {
        Self::from_identity(ScenarioIdentity::parameterized(name, unique_id), message)
    }

    /// Reports a failure for an existing identity.
    #[must_use]
    pub fn from_identity(identity: ScenarioIdentity, message: impl Into<String>) -> Self {
        Self {
            identity,
            message: message.into(),
        }
    }

    /// Returns the identity of the failed scenario.
    #[must_use]
    pub fn identity(&self) -> &ScenarioIdentity {
        &self.identity
    }

    /// Returns the scenario's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.identity.name()
    }

    /// Returns the structured identifier of a parameterized scenario.
    #[must_use]
    pub fn unique_id(&self) -> Option<&UniqueId> {
        self.identity.unique_id()
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Translates the error into a failure record for `description`.
    #[must_use]
    pub fn into_failure(self, description: Description) -> FailureRecord {
        FailureRecord::new(description, self.message)
    }

    /// Translates the error into a failure record for the leaf of `tree`
    /// carrying the same identity.
    ///
    /// When several leaves share the identity, the first in declaration order
    /// is used.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::UnknownScenario`] when no leaf matches.
    pub fn locate_in(self, tree: &Description) -> Result<FailureRecord, BridgeError> {
        match tree.find(&self.identity) {
            Some(leaf) => Ok(FailureRecord::new(leaf.clone(), self.message)),
            None => Err(BridgeError::UnknownScenario(self.identity)),
        }
    }
}

impl FailureCause for ScenarioError {
    fn message(&self) -> &str {
        &self.message
    }

    fn render_trace(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(sink, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::ScenarioError;
    use crate::{BridgeError, Description, FailureCause, ScenarioIdentity, UniqueId};
    use rstest::rstest;

    fn row(index: i64) -> UniqueId {
        let mut id = UniqueId::new();
        id.insert("row".into(), index.into());
        id
    }

    #[rstest]
    #[case("adds", "expected 4, got 5")]
    #[case("", "")]
    #[case("unicode ✓", "multi\nline")]
    fn plain_error_has_no_unique_id(#[case] name: &str, #[case] message: &str) {
        let error = ScenarioError::new(name, message);
        assert_eq!(error.name(), name);
        assert_eq!(error.unique_id(), None);
        assert_eq!(error.message(), message);
        assert_eq!(error.to_string(), message);
    }

    #[test]
    fn parameterized_error_preserves_fields() {
        let error = ScenarioError::parameterized("sums", row(3), "expected 6");
        assert_eq!(error.name(), "sums");
        assert_eq!(error.unique_id(), Some(&row(3)));
        assert_eq!(error.message(), "expected 6");
    }

    #[test]
    fn error_renders_as_failure_cause_without_frames() {
        let error = ScenarioError::new("adds", "expected 4");
        assert_eq!(FailureCause::message(&error), "expected 4");
        assert_eq!(error.trace(), "expected 4\n");
    }

    #[test]
    fn locate_in_matches_row() {
        let tree = Description::suite("sums")
            .with_child(Description::scenario(ScenarioIdentity::parameterized(
                "sums",
                row(1),
            )))
            .with_child(Description::scenario(ScenarioIdentity::parameterized(
                "sums",
                row(2),
            )));
        let error = ScenarioError::parameterized("sums", row(2), "expected 4");
        let record = match error.locate_in(&tree) {
            Ok(record) => record,
            Err(error) => panic!("row should be located: {error}"),
        };
        assert_eq!(record.description().display_name(), "sums {row=2}");
        assert_eq!(record.cause().message(), "expected 4");
    }

    #[test]
    fn locate_in_reports_unknown_scenario() {
        let tree = Description::suite("empty");
        let result = ScenarioError::new("ghost", "boom").locate_in(&tree);
        assert!(matches!(
            result,
            Err(BridgeError::UnknownScenario(identity)) if identity.name() == "ghost"
        ));
    }
}
