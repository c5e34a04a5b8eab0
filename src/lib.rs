//! Rowgraph - query construction and result reassembly for graph stores
//!
//! This crate is the core of a client library for graph databases spoken to
//! over a row-oriented query protocol:
//! - Pattern graphs describing named node/relationship slots, with
//!   label/property constraints validated against a schema registry
//! - Cypher query generation with a selectable clause (MATCH / MERGE / CREATE)
//! - Row extraction turning the store's flat row table into per-row graphs
//! - An identity-keyed merge collapsing fan-out rows back into one
//!   deduplicated graph

pub mod client;
pub mod cypher_generator;
pub mod graph_schema;
pub mod pattern_graph;
pub mod result_assembly;
