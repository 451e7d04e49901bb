//! Externally supplied identity records.
//!
//! The engine never reads files; hosts hand it an already loaded list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Everything else the dataset carries, kept opaque.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl PersonRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            attributes: BTreeMap::new(),
        }
    }
}
