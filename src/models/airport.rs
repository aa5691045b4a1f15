//! Airport reference record

use serde::{Deserialize, Serialize};

/// Airport reference record, loaded once from the catalog dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// Carrier-reporting airport ID (e.g. 10397 for Atlanta)
    pub id: i32,

    /// Display name
    pub name: String,
}

impl Airport {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
