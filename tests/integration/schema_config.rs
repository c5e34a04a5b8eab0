use rowgraph::graph_schema::errors::GraphSchemaError;
use rowgraph::graph_schema::GraphSchema;
use std::io::Write;

const SCHEMA_YAML: &str = r#"
nodes:
  User:
    properties:
      name: string
      age: integer
  Post: {}
relationships:
  AUTHORED:
    from: User
    to: Post
    properties:
      at: integer
"#;

#[test]
fn schema_loads_from_a_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCHEMA_YAML.as_bytes()).unwrap();

    let schema = GraphSchema::from_yaml_file(file.path()).unwrap();
    assert!(schema.node_schema_opt("User").is_some());
    assert!(schema.node_schema_opt("Post").is_some());
    let rel = schema.relationship_schema_opt("AUTHORED").unwrap();
    assert_eq!(rel.from, "User");
    assert_eq!(rel.to, "Post");
}

#[test]
fn file_and_string_loading_agree() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCHEMA_YAML.as_bytes()).unwrap();

    let from_file = GraphSchema::from_yaml_file(file.path()).unwrap();
    let from_str = GraphSchema::from_yaml_str(SCHEMA_YAML).unwrap();
    assert_eq!(from_file, from_str);
}

#[test]
fn missing_file_reports_a_read_error() {
    let err = GraphSchema::from_yaml_file("/nonexistent/schema.yaml").unwrap_err();
    assert!(matches!(err, GraphSchemaError::ConfigReadError { .. }));
}

#[test]
fn malformed_yaml_reports_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"nodes: [unterminated").unwrap();

    let err = GraphSchema::from_yaml_file(file.path()).unwrap_err();
    assert!(matches!(err, GraphSchemaError::ConfigParseError { .. }));
}
