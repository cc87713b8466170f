use super::front_matter::parse_front_matter;
use super::{
    first_linkpath_dest, is_plain_segment, normalize_extension, DocumentMover, DocumentReader,
    LinkResolver,
};
use crate::error::{NotekitError, Result};
use crate::model::{DocumentHandle, Header};
use std::fs;
use std::path::{Path, PathBuf};

/// A vault backed by a directory on disk.
///
/// Document paths are relative to `root` and `/`-separated. Dot-directories
/// (`.obsidian`, `.git`, `.trash`) are not part of the vault. Paths with `.`,
/// `..` or drive segments never reach outside `root`: reads treat them as
/// missing and renames refuse them.
pub struct FsVault {
    root: PathBuf,
    primary_extension: String,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            primary_extension: "md".to_string(),
        }
    }

    pub fn with_primary_extension(mut self, ext: &str) -> Self {
        self.set_primary_extension(ext);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &str) -> Result<PathBuf> {
        let relative = DocumentHandle::new(path);
        let mut full = self.root.clone();
        for part in relative.path().split('/').filter(|part| !part.is_empty()) {
            if !is_plain_segment(part) {
                return Err(NotekitError::Store(format!(
                    "Path {:?} is outside the vault",
                    path
                )));
            }
            full.push(part);
        }
        Ok(full)
    }

    /// All document paths in the vault, sorted.
    pub fn list_paths(&self) -> Result<Vec<String>> {
        let mut paths = Vec::new();
        collect_paths(&self.root, "", &mut paths)?;
        paths.sort();
        Ok(paths)
    }
}

fn collect_paths(dir: &Path, prefix: &str, out: &mut Vec<String>) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir).map_err(NotekitError::Io)? {
        let entry = entry.map_err(NotekitError::Io)?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let relative = if prefix.is_empty() {
            name
        } else {
            format!("{}/{}", prefix, name)
        };
        let file_type = entry.file_type().map_err(NotekitError::Io)?;
        if file_type.is_dir() {
            collect_paths(&entry.path(), &relative, out)?;
        } else if file_type.is_file() {
            out.push(relative);
        }
    }
    Ok(())
}

impl LinkResolver for FsVault {
    fn resolve(&self, name: &str) -> Option<DocumentHandle> {
        let paths = match self.list_paths() {
            Ok(paths) => paths,
            Err(e) => {
                tracing::warn!(root = %self.root.display(), error = %e, "Failed to scan vault");
                return None;
            }
        };
        first_linkpath_dest(
            paths.iter().map(String::as_str),
            name,
            &self.primary_extension,
        )
        .map(DocumentHandle::new)
    }

    fn set_primary_extension(&mut self, extension: &str) {
        self.primary_extension = normalize_extension(extension);
    }

    fn read_header(&self, handle: &DocumentHandle) -> Header {
        let text = match self.read_text(handle.path()) {
            Ok(Some(text)) => text,
            Ok(None) => return Header::new(),
            Err(e) => {
                tracing::debug!(path = %handle, error = %e, "Header unreadable");
                return Header::new();
            }
        };
        parse_front_matter(&text).unwrap_or_else(|e| {
            tracing::debug!(path = %handle, error = %e, "Header unparseable");
            Header::new()
        })
    }
}

impl DocumentReader for FsVault {
    fn read_text(&self, path: &str) -> Result<Option<String>> {
        let full = match self.full_path(path) {
            Ok(full) => full,
            Err(e) => {
                tracing::debug!(path, error = %e, "Refusing read");
                return Ok(None);
            }
        };
        if !full.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(full).map_err(NotekitError::Io)?;
        Ok(Some(content))
    }
}

impl DocumentMover for FsVault {
    fn document(&self, path: &str) -> Option<DocumentHandle> {
        self.full_path(path)
            .ok()?
            .is_file()
            .then(|| DocumentHandle::new(path))
    }

    fn rename(&self, handle: &DocumentHandle, new_path: &str) -> Result<()> {
        let from = self.full_path(handle.path())?;
        let to = self.full_path(new_path)?;

        if !from.is_file() {
            return Err(NotekitError::DocumentNotFound(handle.path().to_string()));
        }
        if to.exists() {
            return Err(NotekitError::Store(
                "Destination file already exists!".to_string(),
            ));
        }
        if let Some(parent) = to.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(NotekitError::Io)?;
            }
        }
        fs::rename(&from, &to).map_err(NotekitError::Io)?;
        Ok(())
    }
}
