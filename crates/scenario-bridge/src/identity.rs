//! Scenario identity values.
//!
//! A scenario is identified by its display name and, for data-driven
//! scenarios, a structured identifier distinguishing one invocation from the
//! others sharing that name.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Structured identifier for one invocation of a parameterized scenario.
///
/// Keys are field names chosen by the scenario engine (for example, the
/// column headers of a data table); values are opaque to the bridge.
pub type UniqueId = BTreeMap<String, serde_json::Value>;

/// Identity of one scenario occurrence.
///
/// The absence of a [`UniqueId`] means the scenario is not parameterized. It
/// does not mean the identifier is unknown.
///
/// # Examples
///
/// ```
/// use scenario_bridge::{ScenarioIdentity, UniqueId};
///
/// let plain = ScenarioIdentity::new("adds two numbers");
/// assert!(!plain.is_parameterized());
///
/// let mut row = UniqueId::new();
/// row.insert("row".into(), 2.into());
/// let param = ScenarioIdentity::parameterized("adds two numbers", row);
/// assert_eq!(param.to_string(), "adds two numbers {row=2}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioIdentity {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    unique_id: Option<UniqueId>,
}

impl ScenarioIdentity {
    /// Creates the identity of a scenario that is not parameterized.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unique_id: None,
        }
    }

    /// Creates the identity of one invocation of a parameterized scenario.
    ///
    /// Uniqueness of `unique_id` across invocations is the caller's
    /// responsibility.
    #[must_use]
    pub fn parameterized(name: impl Into<String>, unique_id: UniqueId) -> Self {
        Self {
            name: name.into(),
            unique_id: Some(unique_id),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the structured identifier, if the scenario is parameterized.
    #[must_use]
    pub fn unique_id(&self) -> Option<&UniqueId> {
        self.unique_id.as_ref()
    }

    /// Whether this identity carries a structured identifier.
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        self.unique_id.is_some()
    }
}

impl fmt::Display for ScenarioIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        let Some(unique_id) = &self.unique_id else {
            return Ok(());
        };
        f.write_str(" {")?;
        for (position, (key, value)) in unique_id.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=")?;
            match value {
                serde_json::Value::String(text) => f.write_str(text)?,
                other => write!(f, "{other}")?,
            }
        }
        f.write_str("}")
    }
}
