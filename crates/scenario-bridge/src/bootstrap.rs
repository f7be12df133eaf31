//! Process-wide guard for scenario engine bootstrap scripts.
//!
//! The scenario engine is process-wide state. Its bootstrap script must be
//! evaluated at most once per process even when several adapters are built
//! concurrently during discovery. Each script name gets its own lock, so
//! loading one script never blocks callers waiting on another.
//!
//! A loader that asks for its own script again on the same thread gets a
//! [`BridgeError::ScriptLoad`] instead of waiting on its own lock.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing::{debug, info, warn};

use crate::error::{BoxError, BridgeError};

type ScriptSlot = Arc<Mutex<bool>>;

static LOADED_SCRIPTS: OnceLock<Mutex<HashMap<String, ScriptSlot>>> = OnceLock::new();

thread_local! {
    static LOADING: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Marks a script as being loaded on the current thread until dropped.
struct LoadingGuard<'a> {
    script: &'a str,
}

impl<'a> LoadingGuard<'a> {
    fn enter(script: &'a str) -> Option<Self> {
        let owned = script.to_owned();
        let inserted = LOADING.with_borrow_mut(|active| active.insert(owned));
        inserted.then_some(Self { script })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        LOADING.with_borrow_mut(|active| active.remove(self.script));
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn slot_for(script: &str) -> ScriptSlot {
    let registry = LOADED_SCRIPTS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut slots = lock(registry);
    Arc::clone(slots.entry(script.to_owned()).or_default())
}

/// Runs `load` for `script` unless an earlier call already succeeded.
///
/// Concurrent callers for the same script wait for the first load to finish.
/// A failed load is not remembered, so the next caller tries again.
///
/// # Errors
///
/// Returns [`BridgeError::ScriptLoad`] when `load` fails, or when `load`
/// calls back into `bootstrap_once` for the same script.
///
/// # Examples
///
/// ```
/// use scenario_bridge::bootstrap::{bootstrap_once, is_bootstrapped};
///
/// let mut loads = 0;
/// for _ in 0..3 {
///     bootstrap_once("doc/example.script", || {
///         loads += 1;
///         Ok(())
///     })?;
/// }
/// assert_eq!(loads, 1);
/// assert!(is_bootstrapped("doc/example.script"));
/// # Ok::<(), scenario_bridge::BridgeError>(())
/// ```
pub fn bootstrap_once<F>(script: &str, load: F) -> Result<(), BridgeError>
where
    F: FnOnce() -> Result<(), BoxError>,
{
    let Some(_loading) = LoadingGuard::enter(script) else {
        warn!(script, "bootstrap script requested while it is loading");
        return Err(BridgeError::ScriptLoad {
            script: script.to_owned(),
            source: "bootstrap script re-entered while loading".into(),
        });
    };
    let slot = slot_for(script);
    let mut loaded = lock(&slot);
    if *loaded {
        debug!(script, "bootstrap script already loaded");
        return Ok(());
    }
    match load() {
        Ok(()) => {
            *loaded = true;
            info!(script, "loaded scenario engine bootstrap script");
            Ok(())
        }
        Err(source) => {
            warn!(script, error = %source, "bootstrap script failed to load");
            Err(BridgeError::ScriptLoad {
                script: script.to_owned(),
                source,
            })
        }
    }
}

/// Whether `script` has been loaded successfully in this process.
#[must_use]
pub fn is_bootstrapped(script: &str) -> bool {
    let Some(registry) = LOADED_SCRIPTS.get() else {
        return false;
    };
    let slot = lock(registry).get(script).map(Arc::clone);
    slot.is_some_and(|slot| *lock(&slot))
}
