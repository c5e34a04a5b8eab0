use async_trait::async_trait;
use rowgraph::client::{ClientError, ExecutionError, GraphClient, QueryExecutor};
use rowgraph::cypher_generator::Clause;
use rowgraph::graph_schema::GraphSchema;
use rowgraph::pattern_graph::builder::PatternBuilder;
use rowgraph::pattern_graph::getters::{NodeGetter, RelationshipGetter};
use rowgraph::result_assembly::{AssemblyError, Row};
use serde_json::json;

mockall::mock! {
    Executor {}

    #[async_trait]
    impl QueryExecutor for Executor {
        async fn execute(&self, query: &str) -> Result<Vec<Row>, ExecutionError>;
    }
}

fn schema() -> GraphSchema {
    GraphSchema::from_yaml_str(
        r#"
nodes:
  User:
    properties:
      name: string
  Post:
    properties:
      title: string
relationships:
  AUTHORED:
    from: User
    to: Post
  LIKED:
    from: User
    to: Post
"#,
    )
    .unwrap()
}

fn node_column(identity: i64, label: &str) -> serde_json::Value {
    json!({"identity": identity, "labels": [label]})
}

fn rel_column(identity: i64, rel_type: &str) -> serde_json::Value {
    json!({"identity": identity, "type": rel_type})
}

/// One author, two posts: the author row is denormalized into both rows and
/// must collapse back to a single vertex.
#[tokio::test]
async fn fan_out_rows_collapse_into_one_graph() {
    crate::init_logging();
    let schema = schema();
    let pattern = PatternBuilder::new(&schema)
        .node("a", NodeGetter::new().with_label("User"))
        .unwrap()
        .node("b", NodeGetter::new().with_label("Post"))
        .unwrap()
        .relationship("a", "b", RelationshipGetter::new().with_type("AUTHORED"))
        .unwrap()
        .build();

    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .withf(|query: &str| {
            query == "MATCH (a:User), (b:Post), (a)-[ab:AUTHORED]->(b)\nRETURN a, b, ab"
        })
        .returning(|_| {
            let row = |post_id: i64, rel_id: i64| {
                let mut row = Row::new();
                row.insert("a", node_column(7, "User"));
                row.insert("b", node_column(post_id, "Post"));
                row.insert("ab", rel_column(rel_id, "AUTHORED"));
                row
            };
            Ok(vec![row(20, 100), row(21, 101)])
        });

    let client = GraphClient::new(executor);
    let merged = client.run(Clause::Match, &[], &pattern).await.unwrap();

    assert_eq!(merged.vertex_names(), vec!["a7", "b20", "b21"]);
    assert_eq!(merged.relation_count(), 2);
    assert!(merged.relation("a7", "b20").is_some());
    assert!(merged.relation("a7", "b21").is_some());
    assert_eq!(merged.vertex("a7").unwrap().labels, vec!["User"]);
}

#[tokio::test]
async fn identity_filter_and_custom_condition_compose_in_the_query() {
    crate::init_logging();
    let schema = schema();
    let pattern = PatternBuilder::new(&schema)
        .node(
            "a",
            NodeGetter::new().with_label("User").with_identity(42),
        )
        .unwrap()
        .build();

    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .withf(|query: &str| {
            query == "MATCH (a:User)\nWHERE a.name <> '' AND id(a) = 42\nRETURN a"
        })
        .returning(|_| {
            let mut row = Row::new();
            row.insert("a", node_column(42, "User"));
            Ok(vec![row])
        });

    let client = GraphClient::new(executor);
    let merged = client
        .run(Clause::Match, &["a.name <> ''".to_string()], &pattern)
        .await
        .unwrap();

    assert_eq!(merged.vertex_names(), vec!["a42"]);
}

#[tokio::test]
async fn empty_row_table_yields_the_empty_graph() {
    crate::init_logging();
    let schema = schema();
    let pattern = PatternBuilder::new(&schema)
        .node("a", NodeGetter::new().with_label("User"))
        .unwrap()
        .build();

    let mut executor = MockExecutor::new();
    executor.expect_execute().returning(|_| Ok(Vec::new()));

    let client = GraphClient::new(executor);
    let merged = client.run(Clause::Match, &[], &pattern).await.unwrap();
    assert!(merged.is_empty());
}

#[tokio::test]
async fn executor_failure_propagates_without_retry() {
    crate::init_logging();
    let schema = schema();
    let pattern = PatternBuilder::new(&schema)
        .node("a", NodeGetter::new().with_label("User"))
        .unwrap()
        .build();

    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .times(1)
        .returning(|_| Err(ExecutionError("store unavailable".to_string())));

    let client = GraphClient::new(executor);
    let err = client.run(Clause::Match, &[], &pattern).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Execution(ExecutionError("store unavailable".to_string()))
    );
}

#[tokio::test]
async fn missing_relation_column_fails_the_whole_request() {
    crate::init_logging();
    let schema = schema();
    let pattern = PatternBuilder::new(&schema)
        .node("a", NodeGetter::new().with_label("User"))
        .unwrap()
        .node("b", NodeGetter::new().with_label("Post"))
        .unwrap()
        .relationship("a", "b", RelationshipGetter::new().with_type("LIKED"))
        .unwrap()
        .build();

    let mut executor = MockExecutor::new();
    executor.expect_execute().returning(|_| {
        let full = {
            let mut row = Row::new();
            row.insert("a", node_column(1, "User"));
            row.insert("b", node_column(2, "Post"));
            row.insert("ab", rel_column(9, "LIKED"));
            row
        };
        let truncated = {
            let mut row = Row::new();
            row.insert("a", node_column(1, "User"));
            row.insert("b", node_column(3, "Post"));
            row
        };
        Ok(vec![full, truncated])
    });

    let client = GraphClient::new(executor);
    let err = client.run(Clause::Match, &[], &pattern).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Assembly(AssemblyError::MissingColumn {
            row: 1,
            column: "ab".to_string()
        })
    );
}

#[tokio::test]
async fn create_clause_goes_through_the_same_pipeline() {
    crate::init_logging();
    let schema = schema();
    let pattern = PatternBuilder::new(&schema)
        .node(
            "a",
            NodeGetter::new()
                .with_label("User")
                .with_parameter("name", "user_name"),
        )
        .unwrap()
        .build();

    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .withf(|query: &str| query.starts_with("CREATE (a:User {name: $user_name})"))
        .returning(|_| {
            let mut row = Row::new();
            row.insert("a", node_column(99, "User"));
            Ok(vec![row])
        });

    let client = GraphClient::new(executor);
    let merged = client.run(Clause::Create, &[], &pattern).await.unwrap();
    assert_eq!(merged.vertex_names(), vec!["a99"]);
}
