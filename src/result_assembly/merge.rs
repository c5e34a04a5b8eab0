//! Identity-keyed merge
//!
//! A fan-out query returns one row per matched path, so an ancestor shared by
//! N leaf paths arrives N times. Naive concatenation of the per-row graphs
//! would keep all N copies; the merge instead keys every vertex by
//! `slot name + store identity` and unions the renamed graphs, so repeated
//! occurrences of the same entity collapse to one vertex while distinct
//! entities sharing a slot name stay apart.
//!
//! The fold is commutative and associative over well-formed input: the final
//! key and relation sets depend only on the multiset of `(name, identity)`
//! pairs seen. Two entries colliding on a key with *different* payloads mean
//! the store returned inconsistent data for one entity; that is detected and
//! rejected rather than silently overwritten.

use super::{AssemblyError, ResultGraph};
use crate::pattern_graph::values::EntityIdentity;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Rename every vertex to `name + identity` and rewrite relation endpoint
/// pairs accordingly. Endpoints without a matching vertex keep their original
/// name; well-formedness is the caller's responsibility.
fn rename_by_identity(graph: ResultGraph) -> ResultGraph {
    let (vertices, relations) = graph.into_parts();

    let rename: BTreeMap<String, String> = vertices
        .iter()
        .map(|(name, node)| (name.clone(), format!("{}{}", name, node.identity())))
        .collect();

    let mut renamed = ResultGraph::new();
    for (name, node) in vertices {
        let new_name = rename[&name].clone();
        renamed.insert_vertex(new_name, node);
    }
    for ((from, to), relation) in relations {
        let from = rename.get(&from).cloned().unwrap_or(from);
        let to = rename.get(&to).cloned().unwrap_or(to);
        renamed.insert_relation(from, to, relation);
    }
    renamed
}

fn union_into<K: Ord + std::fmt::Debug, V: PartialEq>(
    accumulator: &mut BTreeMap<K, V>,
    incoming: BTreeMap<K, V>,
) -> Result<(), AssemblyError> {
    for (key, value) in incoming {
        match accumulator.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(entry) => {
                if *entry.get() != value {
                    return Err(AssemblyError::InconsistentEntity {
                        key: format!("{:?}", entry.key()),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Fold per-row result graphs into one deduplicated graph.
///
/// Zero graphs yield the empty graph; one graph yields that graph with its
/// vertices renamed. Input order does not affect the result.
pub fn merge(graphs: Vec<ResultGraph>) -> Result<ResultGraph, AssemblyError> {
    let mut merged_vertices = BTreeMap::new();
    let mut merged_relations = BTreeMap::new();

    for graph in graphs {
        let (vertices, relations) = rename_by_identity(graph).into_parts();
        union_into(&mut merged_vertices, vertices)?;
        union_into(&mut merged_relations, relations)?;
    }

    let mut merged = ResultGraph::new();
    for (name, node) in merged_vertices {
        merged.insert_vertex(name, node);
    }
    for ((from, to), relation) in merged_relations {
        merged.insert_relation(from, to, relation);
    }
    Ok(merged)
}
