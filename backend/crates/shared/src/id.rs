//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! IDs in this API are decimal strings handed out sequentially by the
//! stores ("1", "2", ...), so the wrapper is backed by a `String` and
//! serializes as a plain JSON string.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type QuizId = Id<markers::Quiz>;
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from an existing string value
    pub fn from_string(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    /// Create from a 1-based sequence position
    pub fn from_sequence(position: usize) -> Self {
        Self::from_string(position.to_string())
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert to the underlying string
    pub fn into_string(self) -> String {
        self.value
    }
}

// Manual impls: derives would put a `T: Trait` bound on the marker type,
// which is a phantom and carries no data.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<Id<T>> for String {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Quiz IDs
    pub struct Quiz;

    /// Marker for Question IDs
    pub struct Question;

    /// Marker for User IDs
    pub struct User;
}

/// Type aliases for common IDs
pub type QuizId = Id<markers::Quiz>;
pub type QuestionId = Id<markers::Question>;
pub type UserId = Id<markers::User>;
