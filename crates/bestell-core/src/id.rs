//! # Assign-Once Identifiers
//!
//! Entity ids start out unassigned and are committed exactly once by the
//! factory. Later commits are ignored.
//!
//! ```text
//!   Unassigned ──assign(a)──► Assigned(a) ──assign(b)──► Assigned(a)
//! ```
//!
//! Validation of the candidate value is the entity's job and happens before
//! [`AssignOnce::assign`] is reached, so a malformed value is rejected even
//! when an id is already in place.

use serde::{Serialize, Serializer};

/// An identifier that can be set once and is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssignOnce<T> {
    Unassigned,
    Assigned(T),
}

impl<T> AssignOnce<T> {
    /// Commits `value` if nothing is assigned yet.
    ///
    /// Returns `true` when the value was committed, `false` when an earlier
    /// value stays in place.
    pub fn assign(&mut self, value: T) -> bool {
        match self {
            AssignOnce::Unassigned => {
                *self = AssignOnce::Assigned(value);
                true
            }
            AssignOnce::Assigned(_) => false,
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            AssignOnce::Unassigned => None,
            AssignOnce::Assigned(value) => Some(value),
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, AssignOnce::Assigned(_))
    }
}

impl<T> Default for AssignOnce<T> {
    fn default() -> Self {
        AssignOnce::Unassigned
    }
}

/// Serialized as the plain value, or `null` while unassigned.
impl<T: Serialize> Serialize for AssignOnce<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_assignment_wins() {
        let mut id = AssignOnce::default();
        assert!(!id.is_assigned());

        assert!(id.assign("A-1".to_string()));
        assert!(!id.assign("B-2".to_string()));
        assert_eq!(id.get().map(String::as_str), Some("A-1"));
    }

    #[test]
    fn test_serializes_as_option() {
        let mut id: AssignOnce<u64> = AssignOnce::Unassigned;
        assert_eq!(serde_json::to_string(&id).unwrap(), "null");
        id.assign(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
