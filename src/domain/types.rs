//! Strongly-typed values and validation errors used by the category entity.
//!
//! The entity carries these wrappers instead of raw primitives so that the
//! identifier cannot be confused with other UUIDs and every rule violation has
//! exactly one, stable message.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Smallest accepted category name length, in characters.
pub const NAME_MIN_LENGTH: u64 = 3;
/// Largest accepted category name length, in characters.
pub const NAME_MAX_LENGTH: u64 = 255;
/// Largest accepted category description length, in characters.
pub const DESCRIPTION_MAX_LENGTH: u64 = 10_000;

/// A single violated category rule.
///
/// Variants are listed in the order the validation routine checks them; only
/// the first violation is ever reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The name was missing, empty or whitespace-only.
    #[error("Name should not be empty or null")]
    EmptyName,
    /// The name is shorter than [`NAME_MIN_LENGTH`].
    #[error("Name should be at least 3 characters long")]
    NameTooShort,
    /// The name is longer than [`NAME_MAX_LENGTH`].
    #[error("Name should be less or equal 255 characters long")]
    NameTooLong,
    /// The description was missing.
    #[error("Description should not be null")]
    MissingDescription,
    /// The description is longer than [`DESCRIPTION_MAX_LENGTH`].
    #[error("Description should be less or equal 10,000 characters long")]
    DescriptionTooLong,
}

/// Errors produced when parsing a [`CategoryId`] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryIdError {
    /// The text is not a UUID.
    #[error("category_id must be a valid UUID: {0}")]
    Malformed(String),
    /// The nil UUID never identifies a category.
    #[error("category_id must not be nil")]
    Nil,
}

/// Unique identifier for a category.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generates a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, rejecting the nil value.
    pub fn new(value: Uuid) -> Result<Self, CategoryIdError> {
        if value.is_nil() {
            Err(CategoryIdError::Nil)
        } else {
            Ok(Self(value))
        }
    }

    /// Returns the raw UUID backing this identifier.
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = CategoryIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Uuid::parse_str(s.trim()).map_err(|e| CategoryIdError::Malformed(e.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<Uuid> for CategoryId {
    type Error = CategoryIdError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for Uuid {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl PartialEq<Uuid> for CategoryId {
    fn eq(&self, other: &Uuid) -> bool {
        self.0 == *other
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Uuid::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_not_nil() {
        let first = CategoryId::generate();
        let second = CategoryId::generate();
        assert_ne!(first, second);
        assert!(!first.get().is_nil());
    }

    #[test]
    fn rejects_nil_ids() {
        assert_eq!(CategoryId::new(Uuid::nil()).unwrap_err(), CategoryIdError::Nil);
    }

    #[test]
    fn parses_ids_from_text() {
        let id = CategoryId::generate();
        let parsed: CategoryId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        let err = "not-a-uuid".parse::<CategoryId>().unwrap_err();
        assert!(matches!(err, CategoryIdError::Malformed(_)));
    }

    #[test]
    fn validation_messages_name_the_rule() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Name should not be empty or null"
        );
        assert_eq!(
            ValidationError::DescriptionTooLong.to_string(),
            "Description should be less or equal 10,000 characters long"
        );
    }
}
