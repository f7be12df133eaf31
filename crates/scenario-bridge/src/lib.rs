//! Bridge between externally described scenarios and a static runner contract.
//!
//! A foreign scenario engine is loaded through an [`EngineProvider`] and
//! exposed to the host framework as a [`Runner`] by [`RunnerAdapter`]. The
//! adapter forwards description retrieval and execution to the engine's own
//! runner without interpreting events.
//!
//! Scenario failures travel as data: a [`ScenarioError`] names the failed
//! scenario by [`ScenarioIdentity`] and is translated once into a
//! [`FailureRecord`], whose [`MessageOnlyFailureCause`] renders the assertion
//! message and nothing else. Faults in the bridging setup surface as
//! [`BridgeError`]s that keep their full error chain.
//!
//! Hosts that configure the bridge from the environment build their provider
//! with [`ScriptEngineProvider::from_config`], which also installs stderr
//! logging through [`logging::init_logging`]:
//!
//! ```
//! use std::sync::Arc;
//! use scenario_bridge::{BoxError, BridgeConfig, Runner, ScriptEngineProvider, TestSource};
//!
//! # fn no_runner(_: Arc<dyn TestSource>) -> Result<Box<dyn Runner>, BoxError> {
//! #     Err("no engine in this example".into())
//! # }
//! let config = BridgeConfig::from_env()?;
//! let provider = ScriptEngineProvider::from_config(
//!     &config,
//!     |_script: &str| -> Result<(), BoxError> { Ok(()) },
//!     no_runner,
//! );
//! assert_eq!(provider.script(), config.bootstrap_script);
//! # Ok::<(), scenario_bridge::BridgeError>(())
//! ```

mod adapter;
pub mod bootstrap;
mod cause;
mod config;
mod description;
mod engine;
mod error;
mod failure;
mod identity;
pub mod logging;
mod notifier;
mod runner;
mod scenario;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use adapter::RunnerAdapter;
pub use cause::{FailureCause, MessageOnlyFailureCause, NativeCause};
pub use config::{BridgeConfig, DEFAULT_BOOTSTRAP_SCRIPT, LogLevel};
pub use description::Description;
pub use engine::{EngineProvider, ScriptEngineProvider, ScriptLoader};
pub use error::{BoxError, BridgeError};
pub use failure::{FailureRecord, FailureRecordBuilder};
pub use identity::{ScenarioIdentity, UniqueId};
pub use notifier::{Failure, Notifier};
pub use runner::{Runner, TestSource};
pub use scenario::ScenarioError;
