//! Result-role values
//!
//! Concrete node/relationship data decoded from the store's result rows.
//! Every value carries the store-assigned identity that the merge step keys
//! dedup on; identity is never used for ownership, only for telling entities
//! apart across fan-out rows.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Capability every result-role value must expose: a stable, store-assigned
/// identity. Two values with equal identity denote the same underlying store
/// entity.
pub trait EntityIdentity {
    fn identity(&self) -> i64;
}

/// A fetched node: identity, labels, and a property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeValue {
    /// Store-assigned identity, e.g. from `id(n)`.
    pub identity: i64,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl NodeValue {
    pub fn new(identity: i64) -> Self {
        NodeValue {
            identity,
            labels: Vec::new(),
            properties: HashMap::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

impl EntityIdentity for NodeValue {
    fn identity(&self) -> i64 {
        self.identity
    }
}

/// A fetched relationship: identity, type, and a property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipValue {
    /// Store-assigned identity, e.g. from `id(r)`.
    pub identity: i64,
    /// Relationship type, e.g. `FOLLOWS`. Empty when the store omits it.
    #[serde(rename = "type", default)]
    pub rel_type: String,
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl RelationshipValue {
    pub fn new(identity: i64) -> Self {
        RelationshipValue {
            identity,
            rel_type: String::new(),
            properties: HashMap::new(),
        }
    }

    pub fn with_type(mut self, rel_type: impl Into<String>) -> Self {
        self.rel_type = rel_type.into();
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

impl EntityIdentity for RelationshipValue {
    fn identity(&self) -> i64 {
        self.identity
    }
}
