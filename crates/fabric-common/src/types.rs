//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an element in the host document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    /// Creates an element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrows the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Where a document-level class or attribute is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentTarget {
    /// The root element (`<html>`).
    Root,
    /// The `<body>` element.
    Body,
}

impl fmt::Display for DocumentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Body => write!(f, "body"),
        }
    }
}
