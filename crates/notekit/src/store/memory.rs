use super::front_matter::parse_front_matter;
use super::{
    first_linkpath_dest, normalize_extension, DocumentMover, DocumentReader, LinkResolver,
};
use crate::error::{NotekitError, Result};
use crate::model::{DocumentHandle, Header};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// In-memory vault for testing.
///
/// Uses `RefCell` for interior mutability so every capability can take `&self`,
/// the same shape a host-provided store has.
pub struct InMemoryVault {
    documents: RefCell<BTreeMap<String, String>>,
    primary_extension: String,
    simulate_rename_error: RefCell<Option<String>>,
}

impl Default for InMemoryVault {
    fn default() -> Self {
        Self {
            documents: RefCell::new(BTreeMap::new()),
            primary_extension: "md".to_string(),
            simulate_rename_error: RefCell::new(None),
        }
    }
}

impl InMemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primary_extension(mut self, ext: &str) -> Self {
        self.set_primary_extension(ext);
        self
    }

    /// Adds (or replaces) a document with the given raw text.
    pub fn insert(&self, path: &str, text: &str) -> DocumentHandle {
        let handle = DocumentHandle::new(path);
        self.documents
            .borrow_mut()
            .insert(handle.path().to_string(), text.to_string());
        handle
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_document(self, path: &str, text: &str) -> Self {
        self.insert(path, text);
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.documents
            .borrow()
            .contains_key(DocumentHandle::new(path).path())
    }

    pub fn paths(&self) -> Vec<String> {
        self.documents.borrow().keys().cloned().collect()
    }

    /// Makes every subsequent rename fail with `message`. `None` clears it.
    pub fn set_simulate_rename_error(&self, message: Option<&str>) {
        *self.simulate_rename_error.borrow_mut() = message.map(str::to_string);
    }
}

impl LinkResolver for InMemoryVault {
    fn resolve(&self, name: &str) -> Option<DocumentHandle> {
        let documents = self.documents.borrow();
        first_linkpath_dest(
            documents.keys().map(String::as_str),
            name,
            &self.primary_extension,
        )
        .map(DocumentHandle::new)
    }

    fn set_primary_extension(&mut self, extension: &str) {
        self.primary_extension = normalize_extension(extension);
    }

    fn read_header(&self, handle: &DocumentHandle) -> Header {
        let documents = self.documents.borrow();
        documents
            .get(handle.path())
            .and_then(|text| parse_front_matter(text).ok())
            .unwrap_or_default()
    }
}

impl DocumentReader for InMemoryVault {
    fn read_text(&self, path: &str) -> Result<Option<String>> {
        let documents = self.documents.borrow();
        Ok(documents.get(DocumentHandle::new(path).path()).cloned())
    }
}

impl DocumentMover for InMemoryVault {
    fn document(&self, path: &str) -> Option<DocumentHandle> {
        let handle = DocumentHandle::new(path);
        self.documents
            .borrow()
            .contains_key(handle.path())
            .then_some(handle)
    }

    fn rename(&self, handle: &DocumentHandle, new_path: &str) -> Result<()> {
        if let Some(message) = self.simulate_rename_error.borrow().as_ref() {
            return Err(NotekitError::Store(message.clone()));
        }

        let target = DocumentHandle::new(new_path);
        let mut documents = self.documents.borrow_mut();
        if documents.contains_key(target.path()) {
            return Err(NotekitError::Store(
                "Destination file already exists!".to_string(),
            ));
        }
        let text = documents
            .remove(handle.path())
            .ok_or_else(|| NotekitError::DocumentNotFound(handle.path().to_string()))?;
        documents.insert(target.path().to_string(), text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> InMemoryVault {
        InMemoryVault::new()
            .with_document("Notes/Alpha.md", "---\nTitle: The Alpha\n---\nBody")
            .with_document("Notes/Beta.md", "No header")
            .with_document("Assets/chart.png", "")
    }

    #[test]
    fn resolves_and_reads_header() {
        let vault = vault();
        let handle = vault.resolve("Alpha").unwrap();
        assert_eq!(handle.path(), "Notes/Alpha.md");
        assert_eq!(vault.read_header(&handle)["Title"], "The Alpha");
    }

    #[test]
    fn primary_extension_decides_bare_name_matches() {
        let vault = InMemoryVault::new()
            .with_primary_extension(".Markdown")
            .with_document("Plan.markdown", "")
            .with_document("Notes/Plan.md", "");
        assert_eq!(vault.resolve("Plan").unwrap().path(), "Plan.markdown");
        assert_eq!(vault.resolve("Plan.md").unwrap().path(), "Notes/Plan.md");
    }

    #[test]
    fn missing_header_is_empty() {
        let vault = vault();
        let handle = vault.resolve("Beta").unwrap();
        assert!(vault.read_header(&handle).is_empty());
    }

    #[test]
    fn read_text_missing_is_none() {
        let vault = vault();
        assert_eq!(vault.read_text("Nope.md").unwrap(), None);
        assert_eq!(
            vault.read_text("Notes/Beta.md").unwrap(),
            Some("No header".to_string())
        );
    }

    #[test]
    fn rename_moves_document() {
        let vault = vault();
        let handle = vault.document("Notes/Beta.md").unwrap();
        vault.rename(&handle, "Archive/Beta.md").unwrap();
        assert!(!vault.contains("Notes/Beta.md"));
        assert!(vault.contains("Archive/Beta.md"));
    }

    #[test]
    fn rename_refuses_existing_destination() {
        let vault = vault();
        let handle = vault.document("Notes/Beta.md").unwrap();
        let err = vault.rename(&handle, "Notes/Alpha.md").unwrap_err();
        assert!(matches!(err, NotekitError::Store(_)));
        assert!(vault.contains("Notes/Beta.md"));
    }

    #[test]
    fn simulated_rename_error_leaves_state() {
        let vault = vault();
        vault.set_simulate_rename_error(Some("disk on fire"));
        let handle = vault.document("Notes/Beta.md").unwrap();
        let err = vault.rename(&handle, "Archive/Beta.md").unwrap_err();
        assert_eq!(err.to_string(), "Store error: disk on fire");
        assert!(vault.contains("Notes/Beta.md"));
    }
}
