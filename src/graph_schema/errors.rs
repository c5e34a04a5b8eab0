use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphSchemaError {
    #[error("No node schema found for label `{label}`")]
    UnknownLabel { label: String },
    #[error("No relationship schema found for type `{rel_type}`")]
    UnknownRelationshipType { rel_type: String },
    #[error("Property '{property}' is not declared for label `{label}` (check schema configuration)")]
    UnknownNodeProperty { property: String, label: String },
    #[error("Property '{property}' is not declared for relationship type `{rel_type}`")]
    UnknownRelationshipProperty { property: String, rel_type: String },
    #[error("Property '{property}' on `{slot}` expects {expected} but got {actual}")]
    PropertyTypeMismatch {
        property: String,
        slot: String,
        expected: String,
        actual: String,
    },
    #[error("Relationship type `{rel_type}` connects `{expected}` endpoints, but slot '{slot}' is labeled `{actual}`")]
    EndpointLabelMismatch {
        rel_type: String,
        slot: String,
        expected: String,
        actual: String,
    },
    #[error("Pattern slot '{name}' is not declared (add the vertex before relating it)")]
    UnknownSlot { name: String },
    #[error("Failed to read schema configuration file: {error}")]
    ConfigReadError { error: String },
    #[error("Failed to parse schema configuration: {error}")]
    ConfigParseError { error: String },
}
