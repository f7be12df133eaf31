//! Scenario engine providers.
//!
//! An [`EngineProvider`] hides how the foreign scenario engine is loaded. The
//! adapter asks it to bootstrap the engine and then to create a runner for a
//! test source. [`ScriptEngineProvider`] is the script-based implementation:
//! it evaluates a bootstrap script through a [`ScriptLoader`] at most once per
//! process and delegates runner creation to a factory.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::bootstrap;
use crate::config::BridgeConfig;
use crate::error::{BoxError, BridgeError};
use crate::logging;
use crate::runner::{Runner, TestSource};

/// Loads and evaluates a named script resource.
///
/// A loader runs while its script's bootstrap lock is held. Requesting the
/// same script again from inside the loader fails with
/// [`BridgeError::ScriptLoad`].
pub trait ScriptLoader: Send + Sync {
    /// Loads `script` into the scenario engine.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when the script cannot be found or fails to
    /// evaluate.
    fn load_script(&self, script: &str) -> Result<(), BoxError>;
}

impl<F> ScriptLoader for F
where
    F: Fn(&str) -> Result<(), BoxError> + Send + Sync,
{
    fn load_script(&self, script: &str) -> Result<(), BoxError> {
        self(script)
    }
}

/// Supplies runners from a foreign scenario engine.
pub trait EngineProvider {
    /// Initializes the engine. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::ScriptLoad`] when initialization fails.
    fn bootstrap(&self) -> Result<(), BridgeError> {
        Ok(())
    }

    /// Creates a runner bound to `source`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::RunnerFactory`] when the engine cannot produce a
    /// runner for the source.
    fn create_runner(&self, source: Arc<dyn TestSource>) -> Result<Box<dyn Runner>, BridgeError>;
}

/// Engine provider that bootstraps the engine from a script.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use scenario_bridge::{
///     BoxError, Description, EngineProvider, Notifier, Runner, ScriptEngineProvider,
///     TestSource,
/// };
///
/// struct Empty(String);
///
/// impl Runner for Empty {
///     fn description(&self) -> Description {
///         Description::suite(self.0.clone())
///     }
///     fn run(&self, _notifier: &mut dyn Notifier) {}
/// }
///
/// struct Specs;
/// impl TestSource for Specs {
///     fn test_path(&self) -> String {
///         "specs/empty".into()
///     }
/// }
///
/// let provider = ScriptEngineProvider::new(
///     "doc/engine.script",
///     |_script: &str| -> Result<(), BoxError> { Ok(()) },
///     |source: Arc<dyn TestSource>| -> Result<Box<dyn Runner>, BoxError> {
///         Ok(Box::new(Empty(source.test_path())))
///     },
/// );
/// provider.bootstrap()?;
/// let runner = provider.create_runner(Arc::new(Specs))?;
/// assert_eq!(runner.description().display_name(), "specs/empty");
/// # Ok::<(), scenario_bridge::BridgeError>(())
/// ```
pub struct ScriptEngineProvider<L, F> {
    script: String,
    loader: L,
    factory: F,
}

impl<L, F> ScriptEngineProvider<L, F>
where
    L: ScriptLoader,
    F: Fn(Arc<dyn TestSource>) -> Result<Box<dyn Runner>, BoxError>,
{
    /// Creates a provider that loads `script` with `loader` and builds
    /// runners with `factory`.
    #[must_use]
    pub fn new(script: impl Into<String>, loader: L, factory: F) -> Self {
        Self {
            script: script.into(),
            loader,
            factory,
        }
    }

    /// Creates a provider that loads the bootstrap script named in `config`.
    ///
    /// Also installs the bridge's logging at `config`'s level unless a
    /// global subscriber is already set.
    #[must_use]
    pub fn from_config(config: &BridgeConfig, loader: L, factory: F) -> Self {
        logging::init_logging(config);
        Self::new(config.bootstrap_script.clone(), loader, factory)
    }

    /// Returns the bootstrap script name.
    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }
}

impl<L, F> EngineProvider for ScriptEngineProvider<L, F>
where
    L: ScriptLoader,
    F: Fn(Arc<dyn TestSource>) -> Result<Box<dyn Runner>, BoxError>,
{
    fn bootstrap(&self) -> Result<(), BridgeError> {
        bootstrap::bootstrap_once(&self.script, || self.loader.load_script(&self.script))
    }

    fn create_runner(&self, source: Arc<dyn TestSource>) -> Result<Box<dyn Runner>, BridgeError> {
        let test_path = source.test_path();
        debug!(script = %self.script, test_path = %test_path, "creating scenario runner");
        (self.factory)(source).map_err(|source| BridgeError::RunnerFactory { test_path, source })
    }
}

impl<L, F> fmt::Debug for ScriptEngineProvider<L, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptEngineProvider")
            .field("script", &self.script)
            .finish_non_exhaustive()
    }
}
