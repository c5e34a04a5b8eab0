//! Name-keyed pattern graph container
//!
//! `PatternGraph` is the one container shared by both sides of a query's life:
//! on the way in it holds pattern-role getters describing label/property
//! constraints per slot, on the way out it holds result-role values decoded
//! from the store's rows. Slots are identified by opaque string names
//! (`a`, `b`, ...); relations are keyed by the directed `(from, to)` name pair
//! as written in the pattern.
//!
//! Both mappings are `BTreeMap` so iteration order is deterministic, which
//! keeps generated query text reproducible for a given graph.

pub mod builder;
pub mod getters;
pub mod values;

use std::collections::BTreeMap;

/// Derive the slot name used for a relationship between two vertex slots.
///
/// Relationship columns and RETURN items are named by endpoint concatenation:
/// `("a", "b")` → `"ab"`. The generator and the extractor must agree on this.
pub fn relation_slot_name(from: &str, to: &str) -> String {
    format!("{}{}", from, to)
}

/// Generic graph container keyed by pattern-slot name.
///
/// `N` is the vertex payload, `R` the relation payload. Every transform in
/// this crate produces a fresh graph; nothing mutates a graph after it has
/// been handed to a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternGraph<N, R> {
    vertices: BTreeMap<String, N>,
    relations: BTreeMap<(String, String), R>,
}

impl<N, R> Default for PatternGraph<N, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, R> PatternGraph<N, R> {
    /// Create an empty graph.
    pub fn new() -> Self {
        PatternGraph {
            vertices: BTreeMap::new(),
            relations: BTreeMap::new(),
        }
    }

    /// Insert a vertex under `name`, replacing any previous entry.
    pub fn insert_vertex(&mut self, name: impl Into<String>, vertex: N) {
        self.vertices.insert(name.into(), vertex);
    }

    /// Insert a relation under the directed `(from, to)` pair.
    ///
    /// Both endpoints should exist as vertex keys for the graph to be
    /// well-formed; this is not enforced here.
    pub fn insert_relation(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        relation: R,
    ) {
        self.relations.insert((from.into(), to.into()), relation);
    }

    pub fn vertex(&self, name: &str) -> Option<&N> {
        self.vertices.get(name)
    }

    pub fn relation(&self, from: &str, to: &str) -> Option<&R> {
        self.relations
            .get(&(from.to_string(), to.to_string()))
    }

    /// Vertices in name order.
    pub fn vertices(&self) -> impl Iterator<Item = (&String, &N)> {
        self.vertices.iter()
    }

    /// Relations in `(from, to)` order.
    pub fn relations(&self) -> impl Iterator<Item = (&(String, String), &R)> {
        self.relations.iter()
    }

    /// Vertex slot names in iteration order.
    pub fn vertex_names(&self) -> Vec<String> {
        self.vertices.keys().cloned().collect()
    }

    /// Relation endpoint pairs in iteration order.
    pub fn relation_names(&self) -> Vec<(String, String)> {
        self.relations.keys().cloned().collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.relations.is_empty()
    }

    /// Consume the graph into its underlying maps.
    pub fn into_parts(self) -> (BTreeMap<String, N>, BTreeMap<(String, String), R>) {
        (self.vertices, self.relations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph: PatternGraph<u32, u32> = PatternGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.relation_count(), 0);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut graph = PatternGraph::new();
        graph.insert_vertex("a", 1);
        graph.insert_vertex("b", 2);
        graph.insert_relation("a", "b", 10);

        assert_eq!(graph.vertex("a"), Some(&1));
        assert_eq!(graph.vertex("c"), None);
        assert_eq!(graph.relation("a", "b"), Some(&10));
        assert_eq!(graph.relation("b", "a"), None);
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let mut graph: PatternGraph<u32, u32> = PatternGraph::new();
        graph.insert_vertex("c", 3);
        graph.insert_vertex("a", 1);
        graph.insert_vertex("b", 2);

        let names = graph.vertex_names();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_insert_replaces_existing_slot() {
        let mut graph: PatternGraph<u32, u32> = PatternGraph::new();
        graph.insert_vertex("a", 1);
        graph.insert_vertex("a", 2);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.vertex("a"), Some(&2));
    }

    #[test]
    fn test_relation_slot_name() {
        assert_eq!(relation_slot_name("a", "b"), "ab");
        assert_eq!(relation_slot_name("user", "post"), "userpost");
    }
}
