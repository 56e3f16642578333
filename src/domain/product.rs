//! Product - A single catalog entry

use serde::{Deserialize, Serialize};

/// An immutable product record
///
/// `name` doubles as the identifier: it is unique within a catalog and is the
/// routing parameter of the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name and identifier
    pub name: String,
    /// Pre-formatted price (e.g. "$100")
    pub price: String,
    /// Free-form description
    pub description: String,
}

impl Product {
    /// Create a new product
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}
