//! Schema-validated pattern construction
//!
//! `PatternBuilder` is the gate between caller intent and the generator: a
//! getter only enters the pattern if every label, property, and endpoint it
//! names is declared in the schema registry. Validation happens when the
//! finished getter is added, so misuse fails at construction time with a
//! descriptive error rather than at the store.
//!
//! Direct insertion through `PatternGraph` stays available as an unvalidated
//! escape hatch; the generator itself never consults the schema.

use super::getters::{NodeGetter, RelationshipGetter};
use super::PatternGraph;
use crate::graph_schema::errors::GraphSchemaError;
use crate::graph_schema::GraphSchema;

/// Builds a pattern graph, validating every slot against a schema registry.
#[derive(Debug)]
pub struct PatternBuilder<'a> {
    schema: &'a GraphSchema,
    graph: PatternGraph<NodeGetter, RelationshipGetter>,
}

impl<'a> PatternBuilder<'a> {
    pub fn new(schema: &'a GraphSchema) -> Self {
        PatternBuilder {
            schema,
            graph: PatternGraph::new(),
        }
    }

    /// Add a node slot. Fails if the getter names an undeclared label, an
    /// undeclared property, or a literal whose type contradicts the schema.
    pub fn node(
        mut self,
        name: impl Into<String>,
        getter: NodeGetter,
    ) -> Result<Self, GraphSchemaError> {
        for label in getter.labels() {
            self.schema.validate_node_label(label)?;
        }
        for (property, value) in getter.properties() {
            self.schema
                .validate_node_property(getter.labels(), property, Some(value))?;
        }
        for (property, _) in getter.parameters() {
            self.schema
                .validate_node_property(getter.labels(), property, None)?;
        }
        self.graph.insert_vertex(name, getter);
        Ok(self)
    }

    /// Add a relationship slot between two previously added node slots.
    ///
    /// Fails if either endpoint is missing from the pattern, the type or a
    /// property is undeclared, or an endpoint's labels contradict the
    /// relationship schema's declared from/to labels.
    pub fn relationship(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        getter: RelationshipGetter,
    ) -> Result<Self, GraphSchemaError> {
        let from = from.into();
        let to = to.into();
        let from_labels = self
            .graph
            .vertex(&from)
            .ok_or_else(|| GraphSchemaError::UnknownSlot { name: from.clone() })?
            .labels()
            .to_vec();
        let to_labels = self
            .graph
            .vertex(&to)
            .ok_or_else(|| GraphSchemaError::UnknownSlot { name: to.clone() })?
            .labels()
            .to_vec();

        for rel_type in getter.types() {
            self.schema.validate_relationship_type(rel_type)?;
            // The schema pins endpoint labels per type; unlabeled slots pass.
            if let Some(rel_schema) = self.schema.relationship_schema_opt(rel_type) {
                self.schema
                    .validate_endpoint_label(rel_type, &from, &rel_schema.from, &from_labels)?;
                self.schema
                    .validate_endpoint_label(rel_type, &to, &rel_schema.to, &to_labels)?;
            }
        }
        // Property checks run against the whole type list, so a typeless
        // getter with properties is rejected just like an unlabeled node.
        for (property, value) in getter.properties() {
            self.schema
                .validate_relationship_property(getter.types(), property, Some(value))?;
        }
        for (property, _) in getter.parameters() {
            self.schema
                .validate_relationship_property(getter.types(), property, None)?;
        }

        self.graph.insert_relation(from, to, getter);
        Ok(self)
    }

    /// Finish and hand over the validated pattern graph.
    pub fn build(self) -> PatternGraph<NodeGetter, RelationshipGetter> {
        self.graph
    }
}
