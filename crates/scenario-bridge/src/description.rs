//! Description trees used for discovery, filtering and reporting.

use serde::Serialize;

use crate::identity::ScenarioIdentity;

/// One node of the static naming tree a runner exposes.
///
/// Suites hold an ordered sequence of children. Leaves represent individual
/// scenarios and may carry the [`ScenarioIdentity`] the engine reports
/// failures against.
///
/// # Examples
///
/// ```
/// use scenario_bridge::{Description, ScenarioIdentity};
///
/// let tree = Description::suite("math")
///     .with_child(Description::scenario(ScenarioIdentity::new("adds")))
///     .with_child(Description::test("subtracts"));
/// assert_eq!(tree.test_count(), 2);
/// assert!(tree.find(&ScenarioIdentity::new("adds")).is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Description {
    display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    identity: Option<ScenarioIdentity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Description>,
    #[serde(skip)]
    suite: bool,
}

impl Description {
    /// Creates an empty suite node.
    #[must_use]
    pub fn suite(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            identity: None,
            children: Vec::new(),
            suite: true,
        }
    }

    /// Creates a leaf with a display name and no scenario identity.
    #[must_use]
    pub fn test(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            identity: None,
            children: Vec::new(),
            suite: false,
        }
    }

    /// Creates a leaf for a scenario, displayed as the rendered identity.
    #[must_use]
    pub fn scenario(identity: ScenarioIdentity) -> Self {
        Self {
            display_name: identity.to_string(),
            identity: Some(identity),
            children: Vec::new(),
            suite: false,
        }
    }

    /// Appends a child node, turning a leaf into a suite if necessary.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.add_child(child);
        self
    }

    /// Appends a child node in place.
    pub fn add_child(&mut self, child: Self) {
        self.suite = true;
        self.children.push(child);
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the scenario identity of a leaf, if one was attached.
    #[must_use]
    pub fn identity(&self) -> Option<&ScenarioIdentity> {
        self.identity.as_ref()
    }

    /// Returns the children in declaration order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Whether this node is a suite.
    #[must_use]
    pub fn is_suite(&self) -> bool {
        self.suite
    }

    /// Whether this node is a leaf representing one scenario.
    #[must_use]
    pub fn is_test(&self) -> bool {
        !self.suite
    }

    /// Counts the leaves beneath (and including) this node.
    #[must_use]
    pub fn test_count(&self) -> usize {
        if self.is_test() {
            return 1;
        }
        self.children.iter().map(Self::test_count).sum()
    }

    /// Iterates leaves depth-first in declaration order.
    pub fn leaves(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                if node.is_test() {
                    return Some(node);
                }
                stack.extend(node.children.iter().rev());
            }
            None
        })
    }

    /// Finds the first leaf carrying `identity`.
    #[must_use]
    pub fn find(&self, identity: &ScenarioIdentity) -> Option<&Self> {
        self.leaves()
            .find(|leaf| leaf.identity.as_ref() == Some(identity))
    }

    /// Serializes the tree as pretty-printed JSON for discovery diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error if a unique identifier value cannot be serialized.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
