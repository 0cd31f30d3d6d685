//! Query-expression builders for the subscriber store.
//!
//! Expressions serialize straight to the store's JSON wire format:
//! `get(x)` becomes `{"get": x}`, `match_(i, t)` becomes
//! `{"match": i, "terms": t}`, and object literals are wrapped in
//! `{"object": ...}` envelopes at every nesting level.

use serde::Serialize;
use serde_json::{Value, json};

/// A composed query expression wrapping its wire-format JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Expr(Value);

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr(Value::String(value.to_string()))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr(Value::String(value))
    }
}

pub fn index(name: &str) -> Expr {
    Expr(json!({"index": name}))
}

pub fn collection(name: &str) -> Expr {
    Expr(json!({"collection": name}))
}

pub fn get(from: Expr) -> Expr {
    Expr(json!({"get": from.0}))
}

pub fn exists(target: Expr) -> Expr {
    Expr(json!({"exists": target.0}))
}

pub fn not(value: Expr) -> Expr {
    Expr(json!({"not": value.0}))
}

pub fn casefold(value: impl Into<Expr>) -> Expr {
    Expr(json!({"casefold": value.into().0}))
}

pub fn match_(index: Expr, terms: impl Into<Expr>) -> Expr {
    Expr(json!({"match": index.0, "terms": terms.into().0}))
}

pub fn select(path: impl Into<Expr>, from: Expr) -> Expr {
    Expr(json!({"select": path.into().0, "from": from.0}))
}

pub fn intersection(sets: impl IntoIterator<Item = Expr>) -> Expr {
    let sets: Vec<Value> = sets.into_iter().map(|set| set.0).collect();
    Expr(json!({"intersection": sets}))
}

pub fn if_(condition: Expr, then: Expr, otherwise: Expr) -> Expr {
    Expr(json!({"if": condition.0, "then": then.0, "else": otherwise.0}))
}

pub fn create(target: Expr, params: Expr) -> Expr {
    Expr(json!({"create": target.0, "params": params.0}))
}

/// Wraps a JSON literal in the wire format's `object` envelopes. Maps
/// are wrapped recursively; scalars pass through.
pub fn object(literal: Value) -> Expr {
    Expr(wrap(literal))
}

fn wrap(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let wrapped: serde_json::Map<String, Value> =
                map.into_iter().map(|(key, value)| (key, wrap(value))).collect();
            json!({"object": wrapped})
        }
        Value::Array(items) => Value::Array(items.into_iter().map(wrap).collect()),
        other => other,
    }
}
