//! Runner adapter exposing a foreign scenario engine as a host runner.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::description::Description;
use crate::engine::EngineProvider;
use crate::error::{BoxError, BridgeError};
use crate::notifier::Notifier;
use crate::runner::{Runner, TestSource};

/// Bridges one test source to the host framework.
///
/// Construction instantiates the test source, bootstraps the scenario engine
/// and resolves the engine's runner for that source. The runner is the
/// adapter's sole delegate for the adapter's lifetime; build a new adapter to
/// re-initialize. No partially constructed adapter is ever returned.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use scenario_bridge::{
///     BoxError, Description, Notifier, Runner, RunnerAdapter, ScriptEngineProvider,
///     TestSource,
/// };
///
/// #[derive(Default)]
/// struct MathSpecs;
///
/// impl TestSource for MathSpecs {
///     fn test_path(&self) -> String {
///         "specs/math".into()
///     }
/// }
///
/// struct Engine(String);
///
/// impl Runner for Engine {
///     fn description(&self) -> Description {
///         Description::suite(self.0.clone())
///     }
///     fn run(&self, _notifier: &mut dyn Notifier) {}
/// }
///
/// let provider = ScriptEngineProvider::new(
///     "doc/adapter.script",
///     |_: &str| -> Result<(), BoxError> { Ok(()) },
///     |source: Arc<dyn TestSource>| -> Result<Box<dyn Runner>, BoxError> {
///         Ok(Box::new(Engine(source.test_path())))
///     },
/// );
/// let adapter = RunnerAdapter::new::<MathSpecs>(&provider)?;
/// assert_eq!(adapter.description().display_name(), "specs/math");
/// # Ok::<(), scenario_bridge::BridgeError>(())
/// ```
pub struct RunnerAdapter {
    test_path: String,
    delegate: Box<dyn Runner>,
}

impl RunnerAdapter {
    /// Builds an adapter for a test source constructible without arguments.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::ScriptLoad`] or [`BridgeError::RunnerFactory`]
    /// when the engine cannot be bootstrapped or yields no runner.
    pub fn new<S>(provider: &dyn EngineProvider) -> Result<Self, BridgeError>
    where
        S: TestSource + Default + 'static,
    {
        Self::try_new(|| Ok::<_, BoxError>(S::default()), provider)
    }

    /// Builds an adapter for the test source produced by `instantiate`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Instantiation`] when `instantiate` fails, and
    /// otherwise the errors of [`RunnerAdapter::new`].
    pub fn try_new<S, E, F>(
        instantiate: F,
        provider: &dyn EngineProvider,
    ) -> Result<Self, BridgeError>
    where
        S: TestSource + 'static,
        E: Into<BoxError>,
        F: FnOnce() -> Result<S, E>,
    {
        let source_type = type_name::<S>();
        let _span = debug_span!("runner_adapter", source = source_type).entered();
        let source = instantiate().map_err(|error| BridgeError::Instantiation {
            source_type,
            source: error.into(),
        })?;
        Self::from_source(Arc::new(source), provider)
    }

    /// Builds an adapter for an already instantiated test source.
    ///
    /// # Errors
    ///
    /// See [`RunnerAdapter::new`].
    pub fn from_source(
        source: Arc<dyn TestSource>,
        provider: &dyn EngineProvider,
    ) -> Result<Self, BridgeError> {
        let test_path = source.test_path();
        provider.bootstrap()?;
        let delegate = provider.create_runner(source)?;
        debug!(test_path = %test_path, "runner adapter ready");
        Ok(Self {
            test_path,
            delegate,
        })
    }

    /// Returns the path reported by the test source at construction.
    #[must_use]
    pub fn test_path(&self) -> &str {
        &self.test_path
    }
}

impl Runner for RunnerAdapter {
    fn description(&self) -> Description {
        self.delegate.description()
    }

    fn run(&self, notifier: &mut dyn Notifier) {
        debug!(test_path = %self.test_path, "delegating run");
        self.delegate.run(notifier);
    }
}

impl fmt::Debug for RunnerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerAdapter")
            .field("test_path", &self.test_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::RunnerAdapter;
    use crate::{
        BoxError, BridgeError, Description, EngineProvider, Failure, Notifier, Runner, TestSource,
    };
    use std::cell::Cell;
    use std::sync::Arc;

    #[derive(Default)]
    struct Specs;

    impl TestSource for Specs {
        fn test_path(&self) -> String {
            "specs/unit".into()
        }
    }

    struct Fixed;

    impl Runner for Fixed {
        fn description(&self) -> Description {
            Description::suite("fixed").with_child(Description::test("only"))
        }

        fn run(&self, notifier: &mut dyn Notifier) {
            let leaf = Description::test("only");
            notifier.test_started(&leaf);
            notifier.test_finished(&leaf);
        }
    }

    #[derive(Default)]
    struct CountingProvider {
        bootstraps: Cell<usize>,
        created: Cell<usize>,
        fail_bootstrap: bool,
    }

    impl EngineProvider for CountingProvider {
        fn bootstrap(&self) -> Result<(), BridgeError> {
            self.bootstraps.set(self.bootstraps.get() + 1);
            if self.fail_bootstrap {
                return Err(BridgeError::ScriptLoad {
                    script: "unit.script".into(),
                    source: "missing".into(),
                });
            }
            Ok(())
        }

        fn create_runner(
            &self,
            _source: Arc<dyn TestSource>,
        ) -> Result<Box<dyn Runner>, BridgeError> {
            self.created.set(self.created.get() + 1);
            Ok(Box::new(Fixed))
        }
    }

    #[derive(Default)]
    struct Started(usize);

    impl Notifier for Started {
        fn test_started(&mut self, _description: &Description) {
            self.0 += 1;
        }

        fn test_failure(&mut self, _failure: Failure) {}
    }

    #[test]
    fn construction_bootstraps_then_creates_runner() {
        let provider = CountingProvider::default();
        let adapter = match RunnerAdapter::new::<Specs>(&provider) {
            Ok(adapter) => adapter,
            Err(error) => panic!("adapter should build: {error}"),
        };
        assert_eq!(provider.bootstraps.get(), 1);
        assert_eq!(provider.created.get(), 1);
        assert_eq!(adapter.test_path(), "specs/unit");
    }

    #[test]
    fn instantiation_failure_skips_engine() {
        let provider = CountingProvider::default();
        let result = RunnerAdapter::try_new(
            || Err::<Specs, BoxError>("no default constructor".into()),
            &provider,
        );
        assert!(matches!(result, Err(BridgeError::Instantiation { .. })));
        assert_eq!(provider.bootstraps.get(), 0);
    }

    #[test]
    fn bootstrap_failure_skips_runner_creation() {
        let provider = CountingProvider {
            fail_bootstrap: true,
            ..CountingProvider::default()
        };
        let result = RunnerAdapter::new::<Specs>(&provider);
        assert!(matches!(result, Err(BridgeError::ScriptLoad { .. })));
        assert_eq!(provider.created.get(), 0);
    }

    #[test]
    fn run_forwards_notifier() {
        let provider = CountingProvider::default();
        let Ok(adapter) = RunnerAdapter::new::<Specs>(&provider) else {
            panic!("adapter should build");
        };
        let mut notifier = Started::default();
        adapter.run(&mut notifier);
        assert_eq!(notifier.0, 1);
        assert_eq!(adapter.description().test_count(), 1);
    }
}
