//! Graph schema registry
//!
//! The runtime stand-in for a compile-time capability check: before a label or
//! property can be attached to a pattern slot, the registry is consulted and
//! construction fails fast with a descriptive error if the schema does not
//! declare it. Schemas are defined in YAML:
//!
//! ```yaml
//! nodes:
//!   User:
//!     properties:
//!       name: string
//!       age: integer
//! relationships:
//!   FOLLOWS:
//!     from: User
//!     to: User
//!     properties:
//!       since: integer
//! ```

pub mod errors;

use errors::GraphSchemaError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Declared type of a node or relationship property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Integer,
    Float,
    Boolean,
    /// Untyped: any literal is accepted.
    Any,
}

impl PropertyType {
    /// Whether a literal value conforms to this declared type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            PropertyType::String => value.is_string(),
            PropertyType::Integer => value.is_i64() || value.is_u64(),
            PropertyType::Float => value.is_number(),
            PropertyType::Boolean => value.is_boolean(),
            PropertyType::Any => true,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Integer => "integer",
            PropertyType::Float => "float",
            PropertyType::Boolean => "boolean",
            PropertyType::Any => "any",
        }
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

/// Declared properties of one node label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeSchema {
    #[serde(default)]
    pub properties: HashMap<String, PropertyType>,
}

/// Declared shape of one relationship type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipSchema {
    /// Label the relationship starts from.
    pub from: String,
    /// Label the relationship points to.
    pub to: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyType>,
}

/// Registry of node labels and relationship types with their declared
/// properties. Consulted by the pattern builder; never by the generator,
/// which assumes any getter it receives already passed validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSchema {
    #[serde(default)]
    nodes: HashMap<String, NodeSchema>,
    #[serde(default)]
    relationships: HashMap<String, RelationshipSchema>,
}

impl GraphSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a schema from its YAML form.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GraphSchemaError> {
        serde_yaml::from_str(yaml).map_err(|e| GraphSchemaError::ConfigParseError {
            error: e.to_string(),
        })
    }

    /// Load a schema from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, GraphSchemaError> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            GraphSchemaError::ConfigReadError {
                error: format!("{}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn insert_node_schema(&mut self, label: impl Into<String>, schema: NodeSchema) {
        self.nodes.insert(label.into(), schema);
    }

    pub fn insert_relationship_schema(
        &mut self,
        rel_type: impl Into<String>,
        schema: RelationshipSchema,
    ) {
        self.relationships.insert(rel_type.into(), schema);
    }

    pub fn node_schema_opt(&self, label: &str) -> Option<&NodeSchema> {
        self.nodes.get(label)
    }

    pub fn relationship_schema_opt(&self, rel_type: &str) -> Option<&RelationshipSchema> {
        self.relationships.get(rel_type)
    }

    /// Check that a node label is declared.
    pub fn validate_node_label(&self, label: &str) -> Result<(), GraphSchemaError> {
        if self.nodes.contains_key(label) {
            Ok(())
        } else {
            Err(GraphSchemaError::UnknownLabel {
                label: label.to_string(),
            })
        }
    }

    /// Check that a property is declared on at least one of the slot's labels,
    /// and that the literal value (if any) conforms to the declared type.
    pub fn validate_node_property(
        &self,
        labels: &[String],
        property: &str,
        value: Option<&Value>,
    ) -> Result<(), GraphSchemaError> {
        let declared = labels.iter().find_map(|label| {
            self.nodes
                .get(label)
                .and_then(|schema| schema.properties.get(property))
                .map(|ty| (label.as_str(), *ty))
        });
        let (label, ty) = declared.ok_or_else(|| GraphSchemaError::UnknownNodeProperty {
            property: property.to_string(),
            label: labels.join(":"),
        })?;
        if let Some(value) = value {
            if !ty.matches(value) {
                return Err(GraphSchemaError::PropertyTypeMismatch {
                    property: property.to_string(),
                    slot: label.to_string(),
                    expected: ty.name().to_string(),
                    actual: value_type_name(value).to_string(),
                });
            }
        }
        Ok(())
    }

    /// Check that a relationship type is declared.
    pub fn validate_relationship_type(&self, rel_type: &str) -> Result<(), GraphSchemaError> {
        if self.relationships.contains_key(rel_type) {
            Ok(())
        } else {
            Err(GraphSchemaError::UnknownRelationshipType {
                rel_type: rel_type.to_string(),
            })
        }
    }

    /// Check that a property is declared on at least one of the slot's
    /// relationship types, with a conforming literal value (if any). A
    /// typeless slot has no schema anchor, so any property on it is rejected,
    /// mirroring the unlabeled-node rule.
    pub fn validate_relationship_property(
        &self,
        rel_types: &[String],
        property: &str,
        value: Option<&Value>,
    ) -> Result<(), GraphSchemaError> {
        let declared = rel_types.iter().find_map(|rel_type| {
            self.relationships
                .get(rel_type)
                .and_then(|schema| schema.properties.get(property))
                .map(|ty| (rel_type.as_str(), *ty))
        });
        let (rel_type, ty) =
            declared.ok_or_else(|| GraphSchemaError::UnknownRelationshipProperty {
                property: property.to_string(),
                rel_type: rel_types.join(":"),
            })?;
        if let Some(value) = value {
            if !ty.matches(value) {
                return Err(GraphSchemaError::PropertyTypeMismatch {
                    property: property.to_string(),
                    slot: rel_type.to_string(),
                    expected: ty.name().to_string(),
                    actual: value_type_name(value).to_string(),
                });
            }
        }
        Ok(())
    }

    /// Check that a relationship's endpoint slot carries the label its schema
    /// declares. Unlabeled endpoints pass: the store resolves them at match
    /// time.
    pub fn validate_endpoint_label(
        &self,
        rel_type: &str,
        slot: &str,
        expected: &str,
        actual_labels: &[String],
    ) -> Result<(), GraphSchemaError> {
        if actual_labels.is_empty() || actual_labels.iter().any(|l| l == expected) {
            Ok(())
        } else {
            Err(GraphSchemaError::EndpointLabelMismatch {
                rel_type: rel_type.to_string(),
                slot: slot.to_string(),
                expected: expected.to_string(),
                actual: actual_labels.join(":"),
            })
        }
    }
}
