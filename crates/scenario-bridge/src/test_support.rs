//! Test support utilities for exercising runners and engines.
//!
//! This module is gated behind the `test-support` feature to avoid including
//! test utilities in production builds.

use crate::description::Description;
use crate::identity::ScenarioIdentity;
use crate::notifier::{Failure, Notifier};
use crate::runner::Runner;
use crate::scenario::ScenarioError;

/// One event captured by a [`RecordingNotifier`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotifierEvent {
    /// A scenario started.
    Started(String),
    /// A scenario finished.
    Finished(String),
    /// A scenario was skipped.
    Ignored(String),
    /// A scenario failed.
    Failed {
        /// The failed node.
        description: Description,
        /// The cause's message.
        message: String,
        /// The cause's rendered trace.
        trace: String,
    },
}

/// Notifier that records every event in arrival order.
///
/// # Examples
///
/// ```
/// use scenario_bridge::{Description, FailureRecord, Notifier};
/// use scenario_bridge::test_support::RecordingNotifier;
///
/// let mut notifier = RecordingNotifier::default();
/// notifier.test_failure(FailureRecord::new(Description::test("adds"), "boom").into());
/// assert_eq!(notifier.failure_messages(), ["boom"]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Vec<NotifierEvent>,
}

impl RecordingNotifier {
    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[NotifierEvent] {
        &self.events
    }

    /// Returns the recorded failure events.
    pub fn failures(&self) -> impl Iterator<Item = &NotifierEvent> {
        self.events
            .iter()
            .filter(|event| matches!(event, NotifierEvent::Failed { .. }))
    }

    /// Returns the messages of the recorded failures.
    #[must_use]
    pub fn failure_messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                NotifierEvent::Failed { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn test_started(&mut self, description: &Description) {
        let name = description.display_name().to_owned();
        self.events.push(NotifierEvent::Started(name));
    }

    fn test_finished(&mut self, description: &Description) {
        let name = description.display_name().to_owned();
        self.events.push(NotifierEvent::Finished(name));
    }

    fn test_ignored(&mut self, description: &Description) {
        let name = description.display_name().to_owned();
        self.events.push(NotifierEvent::Ignored(name));
    }

    fn test_failure(&mut self, failure: Failure) {
        self.events.push(NotifierEvent::Failed {
            message: failure.message().to_owned(),
            trace: failure.trace(),
            description: failure.description().clone(),
        });
    }
}

/// Outcome a [`ScriptedScenario`] reports when run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptedOutcome {
    /// The scenario passes.
    Pass,
    /// The scenario's expectation fails with the message.
    Fail(String),
    /// The scenario is skipped.
    Ignore,
    /// The engine itself faults while running the scenario.
    Fault(String),
}

/// A scenario with a predetermined outcome.
#[derive(Clone, Debug)]
pub struct ScriptedScenario {
    identity: ScenarioIdentity,
    outcome: ScriptedOutcome,
}

impl ScriptedScenario {
    /// A scenario that passes.
    #[must_use]
    pub fn passing(identity: ScenarioIdentity) -> Self {
        Self {
            identity,
            outcome: ScriptedOutcome::Pass,
        }
    }

    /// A scenario whose expectation fails with `message`.
    #[must_use]
    pub fn failing(identity: ScenarioIdentity, message: impl Into<String>) -> Self {
        Self {
            identity,
            outcome: ScriptedOutcome::Fail(message.into()),
        }
    }

    /// A scenario the engine skips.
    #[must_use]
    pub fn ignored(identity: ScenarioIdentity) -> Self {
        Self {
            identity,
            outcome: ScriptedOutcome::Ignore,
        }
    }

    /// A scenario during which the engine panics with `message`.
    #[must_use]
    pub fn faulting(identity: ScenarioIdentity, message: impl Into<String>) -> Self {
        Self {
            identity,
            outcome: ScriptedOutcome::Fault(message.into()),
        }
    }
}

/// In-memory scenario engine runner.
///
/// Scenarios run in declaration order. Failures are reported as
/// [`ScenarioError`]s translated onto the failing scenario's own leaf.
#[derive(Clone, Debug)]
pub struct ScriptedRunner {
    name: String,
    scenarios: Vec<ScriptedScenario>,
}

impl ScriptedRunner {
    /// Creates a runner with no scenarios.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scenarios: Vec::new(),
        }
    }

    /// Appends a scenario.
    #[must_use]
    pub fn with_scenario(mut self, scenario: ScriptedScenario) -> Self {
        self.scenarios.push(scenario);
        self
    }
}

impl Runner for ScriptedRunner {
    fn description(&self) -> Description {
        self.scenarios
            .iter()
            .fold(Description::suite(self.name.clone()), |suite, scenario| {
                suite.with_child(Description::scenario(scenario.identity.clone()))
            })
    }

    fn run(&self, notifier: &mut dyn Notifier) {
        for scenario in &self.scenarios {
            let leaf = Description::scenario(scenario.identity.clone());
            match &scenario.outcome {
                ScriptedOutcome::Ignore => {
                    notifier.test_ignored(&leaf);
                    continue;
                }
                ScriptedOutcome::Fault(message) => {
                    notifier.test_started(&leaf);
                    panic!("{message}");
                }
                ScriptedOutcome::Pass => notifier.test_started(&leaf),
                ScriptedOutcome::Fail(message) => {
                    notifier.test_started(&leaf);
                    let error = ScenarioError::from_identity(scenario.identity.clone(), message);
                    notifier.test_failure(error.into_failure(leaf.clone()).into());
                }
            }
            notifier.test_finished(&leaf);
        }
    }
}
