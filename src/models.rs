//! Frontend Models
//!
//! Data structures for the todo list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of an item, never reused within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the todo list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Item text content (already trimmed, never blank)
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(id: ItemId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}
