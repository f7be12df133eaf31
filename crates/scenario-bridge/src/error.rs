//! Error types for the bridge.
//!
//! Construction failures (instantiating a test source, loading the engine's
//! bootstrap script, asking the engine for a runner) are genuine defects in
//! the bridging setup and keep their full error chain. Scenario failures are
//! not errors of this type; see [`ScenarioError`](crate::ScenarioError).

use thiserror::Error;

use crate::cause::NativeCause;
use crate::description::Description;
use crate::identity::ScenarioIdentity;
use crate::notifier::Failure;

/// Boxed error returned by external collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while constructing adapters or building failure records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BridgeError {
    /// The test source could not be instantiated.
    #[error("failed to instantiate test source `{source_type}`")]
    Instantiation {
        /// Type name of the test source.
        source_type: &'static str,
        /// Underlying instantiation error.
        #[source]
        source: BoxError,
    },

    /// The scenario engine's bootstrap script could not be loaded.
    #[error("failed to load bootstrap script `{script}`")]
    ScriptLoad {
        /// Name of the bootstrap script.
        script: String,
        /// Underlying loader error.
        #[source]
        source: BoxError,
    },

    /// The scenario engine could not create a runner for a test source.
    #[error("scenario engine could not create a runner for `{test_path}`")]
    RunnerFactory {
        /// Path reported by the test source.
        test_path: String,
        /// Underlying engine error.
        #[source]
        source: BoxError,
    },

    /// A required argument was not supplied.
    #[error("invalid argument: {0} is required")]
    InvalidArgument(&'static str),

    /// No leaf of a description tree carries the given identity.
    #[error("no scenario named `{0}` in the description tree")]
    UnknownScenario(ScenarioIdentity),

    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BridgeError {
    /// Whether this error was raised while constructing a runner adapter.
    #[must_use]
    pub fn is_construction_failure(&self) -> bool {
        matches!(
            self,
            Self::Instantiation { .. } | Self::ScriptLoad { .. } | Self::RunnerFactory { .. }
        )
    }

    /// Converts the error into a host failure for `description`.
    ///
    /// The failure carries a [`NativeCause`], so reports show the full error
    /// chain and backtrace rather than a bare message.
    #[must_use]
    pub fn into_failure(self, description: Description) -> Failure {
        Failure::new(description, NativeCause::new(self))
    }
}
