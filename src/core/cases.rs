//! Ordered per-case values.
//!
//! Signal values, guard conditions and target states all accept either a
//! single token or a list. Both are stored as a list so downstream code only
//! ever sees one shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when a list of cases is rendered as text.
pub const CASE_SEPARATOR: &str = " | ";

/// An ordered, possibly singleton, sequence of symbolic tokens.
///
/// # Example
///
/// ```rust
/// use lucid_fsm::core::Cases;
///
/// let single = Cases::from("1");
/// assert_eq!(single.len(), 1);
///
/// let many = Cases::from(["small", "med", "large"]);
/// assert_eq!(many.to_string(), "small | med | large");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OneOrMany", into = "Vec<String>")]
pub struct Cases(Vec<String>);

impl Cases {
    /// Number of cases.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when this holds more than one case.
    pub fn is_vector(&self) -> bool {
        self.0.len() > 1
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Replicate a singleton to `n` cases, or borrow the cases as-is when
    /// there are already exactly `n`. Any other length yields `None`.
    pub fn broadcast(&self, n: usize) -> Option<Vec<&str>> {
        match self.0.len() {
            1 => Some(vec![self.0[0].as_str(); n]),
            len if len == n => Some(self.iter().collect()),
            _ => None,
        }
    }
}

impl fmt::Display for Cases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(CASE_SEPARATOR))
    }
}

impl From<&str> for Cases {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for Cases {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl<T: Into<String>> From<Vec<T>> for Cases {
    fn from(values: Vec<T>) -> Self {
        Self(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<String>, const N: usize> From<[T; N]> for Cases {
    fn from(values: [T; N]) -> Self {
        Self(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<String>> FromIterator<T> for Cases {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Cases> for Vec<String> {
    fn from(cases: Cases) -> Self {
        cases.0
    }
}

/// Wire shape accepted in descriptions: a bare string or a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Cases {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(token) => Self(vec![token]),
            OneOrMany::Many(tokens) => Self(tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_is_stored_as_one_case() {
        let cases = Cases::from("regfile_addr.temp1");
        assert_eq!(cases.as_slice(), &["regfile_addr.temp1".to_string()]);
        assert!(!cases.is_vector());
    }

    #[test]
    fn broadcast_replicates_singleton() {
        let cases = Cases::from("1");
        assert_eq!(cases.broadcast(3), Some(vec!["1", "1", "1"]));
    }

    #[test]
    fn broadcast_keeps_matching_length() {
        let cases = Cases::from(["a", "b"]);
        assert_eq!(cases.broadcast(2), Some(vec!["a", "b"]));
    }

    #[test]
    fn broadcast_rejects_other_lengths() {
        assert_eq!(Cases::from(["a", "b"]).broadcast(3), None);
        assert_eq!(Cases::default().broadcast(1), None);
    }

    #[test]
    fn deserializes_from_string_or_list() {
        let one: Cases = serde_json::from_str("\"x\"").unwrap();
        let many: Cases = serde_json::from_str("[\"x\", \"y\"]").unwrap();
        assert_eq!(one, Cases::from("x"));
        assert_eq!(many, Cases::from(["x", "y"]));
    }

    #[test]
    fn serializes_as_list() {
        let json = serde_json::to_string(&Cases::from("x")).unwrap();
        assert_eq!(json, "[\"x\"]");
    }
}
