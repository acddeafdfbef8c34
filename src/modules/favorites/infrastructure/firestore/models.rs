//! Firestore REST document models
//!
//! Field values stay as raw JSON (`{"stringValue": ..}`, `{"integerValue": ..}`)
//! so unknown value types in a stored document never fail a whole list.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub type FirestoreFields = BTreeMap<String, Value>;

pub fn string_value(value: &str) -> Value {
    json!({ "stringValue": value })
}

/// Firestore sends and expects 64-bit integers as decimal strings
pub fn integer_value(value: impl ToString) -> Value {
    json!({ "integerValue": value.to_string() })
}

pub fn read_string(fields: &FirestoreFields, key: &str) -> Option<String> {
    fields
        .get(key)?
        .get("stringValue")?
        .as_str()
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Integer field, also accepting a numeric `stringValue`
pub fn read_integer(fields: &FirestoreFields, key: &str) -> Option<i64> {
    let field = fields.get(key)?;
    let raw = field
        .get("integerValue")
        .or_else(|| field.get("stringValue"))?;
    match raw {
        Value::String(text) => text.trim().parse().ok(),
        Value::Number(number) => number.as_i64(),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FirestoreDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: FirestoreFields,
}

/// One row of a `runQuery` response; rows without a document carry only metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryRow {
    #[serde(default)]
    pub document: Option<FirestoreDocument>,
    #[serde(default)]
    pub read_time: Option<String>,
}
