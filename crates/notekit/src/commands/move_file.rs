use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotekitError, Result};
use crate::sanitize::sanitize_title;
use crate::store::{is_plain_segment, DocumentMover};

/// Renames the document at `current_path` to a sanitized title inside `new_folder`.
///
/// Returns the target path. A document already at its target is left alone.
/// On failure the store is unchanged and the error carries the store's message.
pub fn run<M: DocumentMover>(
    mover: &M,
    current_path: &str,
    new_title: &str,
    new_folder: &str,
    extension: &str,
) -> Result<CmdResult> {
    let document = mover
        .document(current_path)
        .ok_or_else(|| NotekitError::DocumentNotFound(current_path.to_string()))?;

    let target = target_path(new_title, new_folder, extension)?;
    let mut result = CmdResult::default().with_target_path(target.clone());

    if document.path() == target {
        result.add_message(CmdMessage::info(format!("File already at {}", target)));
        return Ok(result);
    }

    match mover.rename(&document, &target) {
        Ok(()) => {
            tracing::info!(from = %document, to = %target, "File moved");
            result.add_message(CmdMessage::success(format!(
                "File moved successfully to {}",
                target
            )));
            Ok(result)
        }
        Err(e) => {
            tracing::warn!(from = %document, to = %target, error = %e, "File move failed");
            let message = match e {
                NotekitError::Store(message) => message,
                other => other.to_string(),
            };
            Err(NotekitError::Rename {
                from: document.path().to_string(),
                to: target,
                message,
            })
        }
    }
}

/// `{folder}/{sanitized title}.{extension}`, without the folder when it is blank.
///
/// The folder must stay inside the vault: `.`, `..` and drive segments are refused.
pub fn target_path(title: &str, folder: &str, extension: &str) -> Result<String> {
    let name = sanitize_title(title);
    if name.is_empty() {
        return Err(NotekitError::Store(format!(
            "Title {:?} is empty once sanitized",
            title
        )));
    }

    let extension = extension.trim_start_matches('.');
    let folder = folder.trim().replace('\\', "/");
    let folder = folder.trim_matches('/');
    if folder
        .split('/')
        .any(|segment| !segment.is_empty() && !is_plain_segment(segment))
    {
        return Err(NotekitError::Store(format!(
            "Folder {:?} is outside the vault",
            folder
        )));
    }
    if folder.is_empty() {
        Ok(format!("{}.{}", name, extension))
    } else {
        Ok(format!("{}/{}.{}", folder, name, extension))
    }
}
