//! Profile types.
//!
//! A profile is a named grouping used to filter events (e.g. "Work",
//! "Personal"). Profiles are created once at startup and never mutated.

use serde::{Deserialize, Serialize};

/// A named grouping that events belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
}

impl Profile {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
