//! # Domain Model
//!
//! Core data types shared by the command layer and the storage capabilities:
//! [`DocumentHandle`], [`Header`], [`ReferenceInput`] and [`FormattedReference`].
//!
//! ## Document Identity
//!
//! A document is identified by its vault-relative path, always `/`-separated
//! regardless of platform (`Meetings/2024-05-01 Standup.md`). Everything else
//! a formatter needs is derived from that path:
//!
//! ```text
//! path       Meetings/2024-05-01 Standup.md
//! name       2024-05-01 Standup.md          (file name, used for attachments)
//! basename   2024-05-01 Standup             (file name without extension)
//! extension  md                             (lowercased, no dot)
//! ```
//!
//! Handles are owned by the store. Commands only read them.
//!
//! ## Headers
//!
//! The structured header (front-matter) of a document is a plain JSON object
//! map. Stores that parse YAML front-matter convert it into this shape so the
//! command layer sees a single representation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured key/value header of a document.
pub type Header = Map<String, Value>;

/// Payload carried through the template value exchange.
pub type Payload = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentHandle {
    path: String,
}

impl DocumentHandle {
    pub fn new(path: impl Into<String>) -> Self {
        let path: String = path.into();
        Self {
            path: path.trim_start_matches('/').replace('\\', "/"),
        }
    }

    /// Vault-relative path, `/`-separated.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// File name including the extension.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// File name without the extension.
    pub fn basename(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        }
    }

    /// Lowercased extension without the leading dot, empty when there is none.
    pub fn extension(&self) -> String {
        let name = self.name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => name[idx + 1..].to_lowercase(),
            _ => String::new(),
        }
    }

    /// Folder part of the path, empty for documents at the vault root.
    pub fn folder(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[..idx],
            None => "",
        }
    }
}

impl std::fmt::Display for DocumentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// A single logical name or an ordered batch of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceInput {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for ReferenceInput {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for ReferenceInput {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl<S: AsRef<str>> From<&[S]> for ReferenceInput {
    fn from(values: &[S]) -> Self {
        Self::Many(values.iter().map(|v| v.as_ref().to_string()).collect())
    }
}

impl From<Vec<String>> for ReferenceInput {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Rendered reference(s), mirroring the shape of the [`ReferenceInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormattedReference {
    Single(String),
    Many(Vec<String>),
}

impl FormattedReference {
    /// Flattens into an ordered list regardless of the input shape.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

/// The two halves of a wiki reference: `[[filename|display]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkParts {
    pub filename: String,
    pub display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContextMode {
    Header,
    Contents,
    #[default]
    Both,
}

/// A document together with whichever parts of it were requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteContext {
    pub document: DocumentHandle,
    pub header: Option<Header>,
    pub contents: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_derives_name_parts() {
        let handle = DocumentHandle::new("Meetings/2024 Standup.MD");
        assert_eq!(handle.path(), "Meetings/2024 Standup.MD");
        assert_eq!(handle.name(), "2024 Standup.MD");
        assert_eq!(handle.basename(), "2024 Standup");
        assert_eq!(handle.extension(), "md");
        assert_eq!(handle.folder(), "Meetings");
    }

    #[test]
    fn handle_at_root_without_extension() {
        let handle = DocumentHandle::new("/README");
        assert_eq!(handle.path(), "README");
        assert_eq!(handle.basename(), "README");
        assert_eq!(handle.extension(), "");
        assert_eq!(handle.folder(), "");
    }

    #[test]
    fn dotfile_has_no_extension() {
        let handle = DocumentHandle::new("notes/.hidden");
        assert_eq!(handle.basename(), ".hidden");
        assert_eq!(handle.extension(), "");
    }

    #[test]
    fn reference_input_deserializes_untagged() {
        let single: ReferenceInput = serde_json::from_str("\"Note\"").unwrap();
        assert_eq!(single, ReferenceInput::Single("Note".into()));

        let many: ReferenceInput = serde_json::from_str("[\"A\", \"B\"]").unwrap();
        assert_eq!(many, ReferenceInput::Many(vec!["A".into(), "B".into()]));
    }
}
