//! Pattern-role getters
//!
//! Getters describe the constraints a query places on one pattern slot:
//! labels, literal property equality, named parameter placeholders, an
//! optional store-identity filter, and (for relationships) direction and
//! variable-length markers. They exist only to be rendered into query text by
//! the generator; they never hold fetched data.

use serde_json::Value;
use std::collections::BTreeMap;

/// Syntactic direction of a relationship pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Incoming, // `<-[..]-`
    #[default]
    Outgoing, // `-[..]->`
    Either, // `-[..]-`
}

/// Variable-length path specification: `*`, `*2`, `*1..3`, `*..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariableLengthSpec {
    pub min_hops: Option<u32>,
    pub max_hops: Option<u32>,
}

impl VariableLengthSpec {
    /// Unbounded spec: renders as bare `*`.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Fixed-length spec: `*2` becomes min=2, max=2.
    pub fn fixed(hops: u32) -> Self {
        VariableLengthSpec {
            min_hops: Some(hops),
            max_hops: Some(hops),
        }
    }

    /// Range spec: `*1..3` becomes min=1, max=3.
    pub fn range(min: u32, max: u32) -> Self {
        VariableLengthSpec {
            min_hops: Some(min),
            max_hops: Some(max),
        }
    }

    fn render(&self) -> String {
        match (self.min_hops, self.max_hops) {
            (None, None) => "*".to_string(),
            (Some(min), Some(max)) if min == max => format!("*{}", min),
            (min, max) => format!(
                "*{}..{}",
                min.map(|m| m.to_string()).unwrap_or_default(),
                max.map(|m| m.to_string()).unwrap_or_default()
            ),
        }
    }
}

/// Render a literal property value into Cypher text.
///
/// Strings are single-quoted with embedded quotes doubled; everything else
/// falls back to its JSON rendering, which matches the store's literal syntax
/// for numbers, booleans and lists.
fn render_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s.replace('\'', "\\'")),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Render a combined `{k: v, p: $param}` property map, or an empty string
/// when there is nothing to render. Literal constraints come first, then
/// parameter placeholders, each group in key order.
fn render_property_map(
    properties: &BTreeMap<String, Value>,
    parameters: &BTreeMap<String, String>,
) -> String {
    if properties.is_empty() && parameters.is_empty() {
        return String::new();
    }
    let mut entries: Vec<String> = properties
        .iter()
        .map(|(k, v)| format!("{}: {}", k, render_literal(v)))
        .collect();
    entries.extend(
        parameters
            .iter()
            .map(|(k, p)| format!("{}: ${}", k, p)),
    );
    format!(" {{{}}}", entries.join(", "))
}

/// Constraints on one node slot of a query pattern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeGetter {
    identity: Option<i64>,
    labels: Vec<String>,
    properties: BTreeMap<String, Value>,
    parameters: BTreeMap<String, String>,
}

impl NodeGetter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the slot to a store identity; compiles to `id(name) = id`.
    pub fn with_identity(mut self, identity: i64) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Literal property equality constraint, rendered into the pattern's
    /// `{k: v}` map.
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Named parameter placeholder, rendered as `{k: $param}`.
    pub fn with_parameter(
        mut self,
        key: impl Into<String>,
        parameter: impl Into<String>,
    ) -> Self {
        self.parameters.insert(key.into(), parameter.into());
        self
    }

    pub fn identity_filter(&self) -> Option<i64> {
        self.identity
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Literal property constraints in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.properties.iter()
    }

    /// Parameter placeholders in key order: `(property, parameter-name)`.
    pub fn parameters(&self) -> impl Iterator<Item = (&String, &String)> {
        self.parameters.iter()
    }

    /// The slot's syntactic pattern form, e.g. `(a:User {name: 'Alice'})`.
    pub fn request_fragment(&self, name: &str) -> String {
        let mut fragment = format!("({}", name);
        for label in &self.labels {
            fragment.push(':');
            fragment.push_str(label);
        }
        fragment.push_str(&render_property_map(&self.properties, &self.parameters));
        fragment.push(')');
        fragment
    }

    /// The slot's RETURN form: a bare reference to its name.
    pub fn return_fragment(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Constraints on one relationship slot of a query pattern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelationshipGetter {
    identity: Option<i64>,
    types: Vec<String>,
    properties: BTreeMap<String, Value>,
    parameters: BTreeMap<String, String>,
    direction: Direction,
    variable_length: Option<VariableLengthSpec>,
}

impl RelationshipGetter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(mut self, identity: i64) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn with_type(mut self, rel_type: impl Into<String>) -> Self {
        self.types.push(rel_type.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn with_parameter(
        mut self,
        key: impl Into<String>,
        parameter: impl Into<String>,
    ) -> Self {
        self.parameters.insert(key.into(), parameter.into());
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_variable_length(mut self, spec: VariableLengthSpec) -> Self {
        self.variable_length = Some(spec);
        self
    }

    pub fn identity_filter(&self) -> Option<i64> {
        self.identity
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Literal property constraints in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.properties.iter()
    }

    /// Parameter placeholders in key order: `(property, parameter-name)`.
    pub fn parameters(&self) -> impl Iterator<Item = (&String, &String)> {
        self.parameters.iter()
    }

    /// The slot's syntactic pattern form, e.g. `(a)-[ab:FOLLOWS]->(b)`.
    ///
    /// `slot` is the derived relation slot name; `from`/`to` are the endpoint
    /// vertex names as written in the pattern.
    pub fn request_fragment(&self, slot: &str, from: &str, to: &str) -> String {
        let mut inner = slot.to_string();
        for rel_type in &self.types {
            inner.push(':');
            inner.push_str(rel_type);
        }
        if let Some(spec) = &self.variable_length {
            inner.push_str(&spec.render());
        }
        inner.push_str(&render_property_map(&self.properties, &self.parameters));

        match self.direction {
            Direction::Outgoing => format!("({})-[{}]->({})", from, inner, to),
            Direction::Incoming => format!("({})<-[{}]-({})", from, inner, to),
            Direction::Either => format!("({})-[{}]-({})", from, inner, to),
        }
    }

    /// The slot's RETURN form: a bare reference to its derived slot name.
    pub fn return_fragment(&self, slot: &str) -> String {
        slot.to_string()
    }
}
