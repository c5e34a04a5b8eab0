//! Row extraction
//!
//! Slices the flat row table back into graph shape: one result graph per row,
//! index-aligned with the input. Vertex columns are looked up by slot name,
//! relationship columns by the derived endpoint-concatenation slot name the
//! generator put in the RETURN clause.

use super::{AssemblyError, ResultGraph, Row};
use crate::pattern_graph::relation_slot_name;
use serde::de::DeserializeOwned;

fn decode_column<T: DeserializeOwned>(
    row: &Row,
    row_index: usize,
    column: &str,
) -> Result<T, AssemblyError> {
    let value = row
        .column(column)
        .ok_or_else(|| AssemblyError::MissingColumn {
            row: row_index,
            column: column.to_string(),
        })?;
    serde_json::from_value(value.clone()).map_err(|e| AssemblyError::Decode {
        row: row_index,
        column: column.to_string(),
        reason: e.to_string(),
    })
}

/// Extract one result graph per row.
///
/// `vertex_names` and `relation_names` are the slots the compiled query
/// requested; every row must carry a decodable column for each of them. Any
/// missing or undecodable column fails the whole batch: a half-decoded batch
/// would corrupt the merge step's identity bookkeeping downstream.
pub fn extract(
    vertex_names: &[String],
    relation_names: &[(String, String)],
    rows: &[Row],
) -> Result<Vec<ResultGraph>, AssemblyError> {
    let mut graphs = Vec::with_capacity(rows.len());

    for (row_index, row) in rows.iter().enumerate() {
        let mut graph = ResultGraph::new();
        for name in vertex_names {
            let node = decode_column(row, row_index, name)?;
            graph.insert_vertex(name.clone(), node);
        }
        for (from, to) in relation_names {
            let column = relation_slot_name(from, to);
            let relation = decode_column(row, row_index, &column)?;
            graph.insert_relation(from.clone(), to.clone(), relation);
        }
        graphs.push(graph);
    }

    Ok(graphs)
}
