//! Value objects shared by the contact detail domain.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, the
//! ordered-unique tag collection) so that once a value reaches the domain
//! layer it can be treated as trusted.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Opaque identifier of a contact, as carried in backend route paths.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId(String);

impl ContactId {
    /// Trims whitespace and rejects empty identifiers.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ContactId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ContactId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContactId> for String {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

/// Ordered collection of unique, non-empty tag strings.
///
/// Insertion order is preserved; adding an existing tag or an
/// empty/whitespace-only tag is a no-op.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims the tag and appends it unless it is empty or already present.
    /// Returns whether the set changed.
    pub fn add(&mut self, tag: &str) -> bool {
        let trimmed = tag.trim();
        if trimmed.is_empty() || self.0.iter().any(|t| t == trimmed) {
            return false;
        }
        self.0.push(trimmed.to_string());
        true
    }

    /// Removes the tag by exact string match. Removing a non-member is a
    /// no-op; returns whether the set changed.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|t| t == tag) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for TagSet {
    /// Rebuilds the set from raw wire data, applying the add rules so the
    /// uniqueness invariant holds regardless of what the backend sent.
    fn from(values: Vec<String>) -> Self {
        let mut tags = Self::new();
        for value in values {
            tags.add(&value);
        }
        tags
    }
}

impl From<TagSet> for Vec<String> {
    fn from(value: TagSet) -> Self {
        value.0
    }
}

impl FromIterator<String> for TagSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_id_rejects_blank_values() {
        assert_eq!(ContactId::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(
            ContactId::new("").err(),
            Some(TypeConstraintError::EmptyString)
        );
        let id = ContactId::new(" abc123 ").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn tag_set_deduplicates_and_preserves_order() {
        let mut tags = TagSet::new();
        assert!(tags.add("investor"));
        assert!(tags.add("vip"));
        assert!(!tags.add("investor"));
        assert!(!tags.add(" investor "));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["investor", "vip"]);
    }

    #[test]
    fn tag_set_rejects_empty_and_whitespace() {
        let mut tags = TagSet::new();
        assert!(!tags.add(""));
        assert!(!tags.add("   "));
        assert!(tags.is_empty());
    }

    #[test]
    fn tag_set_remove_is_exact_match_noop_for_non_members() {
        let mut tags = TagSet::from(vec!["a".into(), "b".into(), "c".into()]);
        assert!(!tags.remove("missing"));
        assert!(tags.remove("b"));
        assert!(!tags.remove("b"));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn tag_set_from_wire_applies_invariants() {
        let tags = TagSet::from(vec!["x".to_string(), "x".to_string(), " ".to_string()]);
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("x"));
    }
}
