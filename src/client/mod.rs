//! Client orchestration
//!
//! Ties the pipeline together around the one suspension point in the whole
//! flow: compile the pattern into query text, hand it to the execution
//! collaborator, await the row table, then extract and merge synchronously.
//! The core holds no state between calls; a `GraphClient` is just the
//! executor plus the pipeline, and callers may run it concurrently as long as
//! each call owns its own pattern.
//!
//! Execution failures surface unchanged; there are no retries here.

use crate::cypher_generator::{compile, Clause};
use crate::pattern_graph::getters::{NodeGetter, RelationshipGetter};
use crate::pattern_graph::PatternGraph;
use crate::result_assembly::{extract, merge, AssemblyError, ResultGraph, Row};
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by the execution collaborator (connection loss, malformed
/// query, store-side error). Propagated verbatim.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("query execution failed: {0}")]
pub struct ExecutionError(pub String);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// The protocol collaborator: executes one query over an established session
/// and returns the flat row table. Cancellation and timeouts live behind this
/// boundary; the core has nothing to cancel once it holds rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, query: &str) -> Result<Vec<Row>, ExecutionError>;
}

/// End-to-end pipeline over an execution collaborator.
#[derive(Debug)]
pub struct GraphClient<E> {
    executor: E,
}

impl<E: QueryExecutor> GraphClient<E> {
    pub fn new(executor: E) -> Self {
        GraphClient { executor }
    }

    /// Compile the pattern, execute it, and reassemble the returned rows into
    /// one deduplicated result graph.
    pub async fn run(
        &self,
        clause: Clause,
        custom_conditions: &[String],
        pattern: &PatternGraph<NodeGetter, RelationshipGetter>,
    ) -> Result<ResultGraph, ClientError> {
        let query = compile(clause, custom_conditions, pattern);
        log::debug!("compiled query:\n{}", query);

        let rows = self.executor.execute(&query).await?;
        log::debug!("executor returned {} rows", rows.len());

        let graphs = extract(&pattern.vertex_names(), &pattern.relation_names(), &rows)?;
        let merged = merge(graphs)?;
        log::debug!(
            "merged result graph: {} vertices, {} relations",
            merged.vertex_count(),
            merged.relation_count()
        );
        Ok(merged)
    }
}
