//! Result assembly
//!
//! Everything between "the store returned a flat row table" and "the caller
//! holds one graph": per-row extraction into result-role pattern graphs
//! ([`extract`]) and the identity-keyed merge that collapses fan-out rows back
//! into a single deduplicated graph ([`merge`]).
//!
//! Failures here always abort the whole batch. A partially extracted or
//! partially merged graph would silently violate the identity invariants the
//! merge depends on, so no partial result ever escapes.

pub mod extract;
pub mod merge;

pub use extract::extract;
pub use merge::merge;

use crate::pattern_graph::values::{NodeValue, RelationshipValue};
use crate::pattern_graph::PatternGraph;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A result-role graph: concrete fetched values keyed by pattern-slot name.
pub type ResultGraph = PatternGraph<NodeValue, RelationshipValue>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssemblyError {
    #[error("Row {row} is missing column '{column}' (check the pattern's requested names)")]
    MissingColumn { row: usize, column: String },
    #[error("Row {row}, column '{column}' could not be decoded: {reason}")]
    Decode {
        row: usize,
        column: String,
        reason: String,
    },
    #[error("Merge key '{key}' maps to entities with differing payloads (same identity, different data across rows)")]
    InconsistentEntity { key: String },
}

/// One flat row as returned by the protocol collaborator: an opaque set of
/// named columns holding wire values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.columns.insert(column.into(), value);
    }

    pub fn column(&self, name: &str) -> Option<&Value> {
        self.columns.get(name)
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Row {
            columns: iter.into_iter().collect(),
        }
    }
}
