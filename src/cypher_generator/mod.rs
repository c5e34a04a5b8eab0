//! Cypher query generation
//!
//! Turns a pattern graph plus a chosen clause into one query string:
//!
//! ```text
//! MATCH (a:User), (b:Post), (a)-[ab:AUTHORED]->(b)
//! WHERE a.age > 21 AND id(a) = 42
//! RETURN a, b, ab
//! ```
//!
//! Request and return fragments are collected vertices-first then relations,
//! each group in the graph's (deterministic) iteration order, so the same
//! pattern always compiles to the same text. Caller-supplied conditions come
//! before auto-generated identity-equality conditions; the WHERE line is
//! omitted entirely when there are none. Pure text rendering, no I/O, cannot
//! fail at run time.

use crate::pattern_graph::getters::{NodeGetter, RelationshipGetter};
use crate::pattern_graph::{relation_slot_name, PatternGraph};
use std::fmt;

/// Leading keyword of the generated query, selecting match-existing vs.
/// create-or-merge semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Match,
    Merge,
    Create,
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Match => write!(f, "MATCH"),
            Clause::Merge => write!(f, "MERGE"),
            Clause::Create => write!(f, "CREATE"),
        }
    }
}

/// Compile a pattern graph into query text.
///
/// `custom_conditions` are emitted verbatim into the WHERE clause, followed by
/// one `id(name) = value` condition per slot carrying an identity filter.
///
/// An empty pattern compiles to the degenerate `MATCH\nRETURN` (no fragment
/// lists); no store accepts it, so callers are expected to request at least
/// one slot.
pub fn compile(
    clause: Clause,
    custom_conditions: &[String],
    pattern: &PatternGraph<NodeGetter, RelationshipGetter>,
) -> String {
    let mut request_fragments = Vec::new();
    let mut return_fragments = Vec::new();
    let mut conditions: Vec<String> = custom_conditions.to_vec();

    for (name, getter) in pattern.vertices() {
        request_fragments.push(getter.request_fragment(name));
        return_fragments.push(getter.return_fragment(name));
        if let Some(identity) = getter.identity_filter() {
            conditions.push(format!("id({}) = {}", name, identity));
        }
    }

    for ((from, to), getter) in pattern.relations() {
        let slot = relation_slot_name(from, to);
        request_fragments.push(getter.request_fragment(&slot, from, to));
        return_fragments.push(getter.return_fragment(&slot));
        if let Some(identity) = getter.identity_filter() {
            conditions.push(format!("id({}) = {}", slot, identity));
        }
    }

    let mut query = clause.to_string();
    if !request_fragments.is_empty() {
        query.push(' ');
        query.push_str(&request_fragments.join(", "));
    }
    if !conditions.is_empty() {
        query.push_str("\nWHERE ");
        query.push_str(&conditions.join(" AND "));
    }
    query.push_str("\nRETURN");
    if !return_fragments.is_empty() {
        query.push(' ');
        query.push_str(&return_fragments.join(", "));
    }
    query
}
