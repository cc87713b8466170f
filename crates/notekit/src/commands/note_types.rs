//! Note type catalogue lookups.
//!
//! The catalogue is a JSON document holding an array of records under a
//! top-level field (`noteTypes` by default):
//!
//! ```json
//! { "noteTypes": [
//!     { "type": "meeting", "folder": "Meetings", "tag": "#mtg" },
//!     { "type": "project", "folder": "Projects", "tag": "#proj", "icon": "🗂" }
//! ] }
//! ```
//!
//! The catalogue is read on every call. Record order is significant: lookups
//! return the first match.

use crate::error::NotekitError;
use crate::store::DocumentReader;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteType {
    #[serde(rename = "type")]
    pub type_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Any other fields, kept for forward compatibility.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NoteType {
    /// Looks up a field by its name in the catalogue document.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "type" => Some(Value::String(self.type_key.clone())),
            "folder" => self.folder.clone().map(Value::String),
            "tag" => self.tag.clone().map(Value::String),
            other => self.extra.get(other).cloned(),
        }
    }
}

/// Field/value predicate for [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct NoteTypeQuery {
    pub field: String,
    pub value: Value,
}

impl NoteTypeQuery {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NoteTypeLookup {
    /// The catalogue is missing, unreadable or not shaped as expected.
    Unavailable(String),
    /// The catalogue loaded but no record matched.
    NoMatch,
    Found(NoteType),
    /// No query was given: the whole catalogue in document order.
    All(Vec<NoteType>),
}

/// Loads the catalogue at `path` and either filters it or lists it.
pub fn run<R: DocumentReader>(
    reader: &R,
    path: &str,
    field: &str,
    query: Option<&NoteTypeQuery>,
) -> NoteTypeLookup {
    let records = match load(reader, path, field) {
        Ok(records) => records,
        Err(reason) => {
            tracing::warn!(path, reason = %reason, "Note type catalogue unavailable");
            return NoteTypeLookup::Unavailable(reason);
        }
    };

    match query {
        None => NoteTypeLookup::All(records),
        Some(query) => records
            .into_iter()
            .find(|record| {
                record
                    .field(&query.field)
                    .is_some_and(|value| values_match(&value, &query.value))
            })
            .map_or(NoteTypeLookup::NoMatch, NoteTypeLookup::Found),
    }
}

/// Strict equality, except that numbers compare by value (`1` matches `1.0`).
fn values_match(record: &Value, query: &Value) -> bool {
    match (record, query) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => record == query,
    }
}

/// The tag of the first record filed under `folder`.
pub fn tag_for_folder<R: DocumentReader>(
    reader: &R,
    path: &str,
    field: &str,
    folder: &str,
) -> Option<String> {
    match run(reader, path, field, Some(&NoteTypeQuery::new("folder", folder))) {
        NoteTypeLookup::Found(record) => record.tag,
        _ => None,
    }
}

fn load<R: DocumentReader>(
    reader: &R,
    path: &str,
    field: &str,
) -> std::result::Result<Vec<NoteType>, String> {
    let content = reader
        .read_text(path)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("{} not found", path))?;

    let document: Value = serde_json::from_str(&content)
        .map_err(|e| NotekitError::Serialization(e).to_string())?;

    match document.get(field) {
        Some(records @ Value::Array(_)) => serde_json::from_value(records.clone())
            .map_err(|e| format!("{} is not formatted correctly: {}", path, e)),
        _ => Err(format!(
            "{} is not formatted correctly: `{}` is not an array",
            path, field
        )),
    }
}
