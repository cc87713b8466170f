use crate::error::Result;
use crate::model::{ContextMode, NoteContext};
use crate::store::{DocumentMover, DocumentReader, LinkResolver};

/// Gathers a document's header and/or contents for a template step.
///
/// `Ok(None)` when no document lives at `path`. A document without a header
/// yields an empty header, never `None`, when the header was requested.
pub fn run<V>(vault: &V, path: &str, mode: ContextMode) -> Result<Option<NoteContext>>
where
    V: LinkResolver + DocumentReader + DocumentMover,
{
    let Some(document) = vault.document(path) else {
        tracing::debug!(path, "No document for context");
        return Ok(None);
    };

    let header = match mode {
        ContextMode::Header | ContextMode::Both => Some(vault.read_header(&document)),
        ContextMode::Contents => None,
    };

    let contents = match mode {
        ContextMode::Contents | ContextMode::Both => vault.read_text(document.path())?,
        ContextMode::Header => None,
    };

    Ok(Some(NoteContext {
        document,
        header,
        contents,
    }))
}
