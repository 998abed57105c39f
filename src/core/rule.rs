//! Transition rules: guards, targets, and the optional else branch.

use super::cases::{Cases, CASE_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Condition text that marks an unconditional transition.
pub const ALWAYS: &str = "always";

/// Outgoing control for one state.
///
/// A rule is either a dispatch (one target per guard, or one target shared
/// by every guard) or a binary branch with an `otherwise` target taken when
/// the guard does not hold.
///
/// # Example
///
/// ```rust
/// use lucid_fsm::core::TransitionRule;
///
/// let rule = TransitionRule::branch("rb_data == 0", "PLACE_PIECE", "SELECT_BOX");
///
/// assert!(rule.is_branch());
/// assert_eq!(rule.label(), "rb_data == 0");
/// assert_eq!(rule.inverse_label().as_deref(), Some("rb_data != 0"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRule {
    conditions: Cases,
    targets: Cases,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    otherwise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inverse_label: Option<String>,
}

impl TransitionRule {
    /// Move to `targets` when `conditions` hold.
    pub fn new(conditions: impl Into<Cases>, targets: impl Into<Cases>) -> Self {
        Self {
            conditions: conditions.into(),
            targets: targets.into(),
            otherwise: None,
            label: None,
            inverse_label: None,
        }
    }

    /// Move to `target` unconditionally.
    pub fn always(target: impl Into<String>) -> Self {
        Self::new(ALWAYS, target.into())
    }

    /// Move to `then` when `condition` holds, otherwise to `otherwise`.
    pub fn branch(
        condition: impl Into<Cases>,
        then: impl Into<Cases>,
        otherwise: impl Into<String>,
    ) -> Self {
        Self::new(condition, then).otherwise(otherwise)
    }

    /// Set the else target. An empty target leaves the rule non-branching.
    pub fn otherwise(mut self, target: impl Into<String>) -> Self {
        let target = target.into();
        self.otherwise = (!target.is_empty()).then_some(target);
        self
    }

    /// Override the diagram label of the true edge.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Override the diagram label of the else edge.
    pub fn with_inverse_label(mut self, label: impl Into<String>) -> Self {
        self.inverse_label = Some(label.into());
        self
    }

    pub fn conditions(&self) -> &Cases {
        &self.conditions
    }

    pub fn targets(&self) -> &Cases {
        &self.targets
    }

    pub fn otherwise_target(&self) -> Option<&str> {
        self.otherwise.as_deref().filter(|target| !target.is_empty())
    }

    pub fn is_branch(&self) -> bool {
        self.otherwise_target().is_some()
    }

    pub fn is_unconditional(&self) -> bool {
        self.conditions.len() == 1 && self.conditions.first() == Some(ALWAYS)
    }

    /// Label for the true edge(s).
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.conditions.to_string())
    }

    /// Label for the else edge, derived by flipping `==` to `!=` in each
    /// condition unless one was given. `None` for non-branching rules.
    pub fn inverse_label(&self) -> Option<String> {
        self.otherwise_target()?;
        if let Some(label) = &self.inverse_label {
            return Some(label.clone());
        }
        let inverted: Vec<String> = self
            .conditions
            .iter()
            .map(|condition| condition.replace("==", "!="))
            .collect();
        Some(inverted.join(CASE_SEPARATOR))
    }
}
