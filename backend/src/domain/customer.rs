//! Customer records returned by the customer sources.
//!
//! Individuals and corporates are disjoint collections: neither variant
//! references the other and they only meet inside a
//! [`BatchResult`](crate::domain::BatchResult). Both are immutable value
//! objects; identifiers are assigned by the persistence layer and never change
//! once a record has been read.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An individual (personal) customer.
///
/// # Examples
/// ```
/// use customer_batch::domain::Individual;
///
/// let individual = Individual::new(1, "個人A");
/// assert_eq!(individual.id(), 1);
/// assert_eq!(individual.name(), "個人A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    id: i64,
    name: String,
}

impl Individual {
    /// Build an individual from a persisted identifier and display name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Identifier assigned by the persistence layer.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Display name. Not unique.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A corporate customer.
///
/// # Examples
/// ```
/// use customer_batch::domain::Corporate;
///
/// let corporate = Corporate::new(10, "法人X");
/// assert_eq!(corporate.id(), 10);
/// assert_eq!(corporate.name(), "法人X");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corporate {
    id: i64,
    name: String,
}

impl Corporate {
    /// Build a corporate from a persisted identifier and display name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Identifier assigned by the persistence layer.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Display name. Not unique.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Labels the two customer sources in logs, events and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerKind {
    /// The individuals collection.
    Individuals,
    /// The corporates collection.
    Corporates,
}

impl CustomerKind {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Individuals => "individuals",
            Self::Corporates => "corporates",
        }
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
