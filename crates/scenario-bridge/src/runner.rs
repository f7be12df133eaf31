//! Runner and test-source contracts.

use crate::description::Description;
use crate::notifier::Notifier;

/// The runner capability set the host framework drives.
///
/// Faults raised by a runner while executing are panics; they propagate
/// through [`run`](Self::run) to the caller unchanged.
pub trait Runner: Send {
    /// Returns the description tree of the scenarios this runner executes.
    fn description(&self) -> Description;

    /// Executes the scenarios, reporting events through `notifier`.
    fn run(&self, notifier: &mut dyn Notifier);
}

impl<R: Runner + ?Sized> Runner for Box<R> {
    fn description(&self) -> Description {
        (**self).description()
    }

    fn run(&self, notifier: &mut dyn Notifier) {
        (**self).run(notifier);
    }
}

/// Descriptor identifying where an external scenario script lives.
///
/// # Examples
///
/// ```
/// use scenario_bridge::TestSource;
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
/// assert_eq!(MathSpecs.test_path(), "specs/math");
/// ```
pub trait TestSource: Send + Sync {
    /// Returns the location of the scenario script to load.
    fn test_path(&self) -> String;
}
