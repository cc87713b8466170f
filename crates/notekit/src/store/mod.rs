//! # Storage Capabilities
//!
//! notekit never owns the document store. It consumes a handful of narrow
//! capabilities from the host, each expressed as a trait:
//!
//! - [`LinkResolver`]: logical name → document, plus header access
//! - [`DocumentReader`]: raw text by path
//! - [`DocumentMover`]: path lookup and rename/move
//! - [`Clock`]: wall-clock access for identifiers and time defaults
//!
//! [`Vault`] bundles the three document capabilities so the API facade can be
//! generic over a single type parameter.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryVault`]: in-memory documents for testing
//! - [`fs::FsVault`]: a vault rooted at a directory on disk
//!
//! ## Link Path Resolution
//!
//! Both implementations resolve names with [`first_linkpath_dest`]:
//!
//! 1. A name containing `/` matches documents whose path ends with it.
//! 2. Otherwise it matches by base name (primary documents) or by full file
//!    name (attachments, or when the name carries its extension).
//! 3. Among several matches the shortest path wins, ties broken by path order.
//!
//! Which extension counts as primary is configuration. The API facade pushes
//! the configured value into its vault with
//! [`LinkResolver::set_primary_extension`] so the two never disagree.

use crate::error::Result;
use crate::model::{DocumentHandle, Header};
use chrono::{Local, NaiveTime, Utc};
use std::path::{Component, Path};

pub mod front_matter;
pub mod fs;
pub mod memory;

/// Resolves logical names to documents.
pub trait LinkResolver {
    /// Returns the first document a logical name points at, if any.
    fn resolve(&self, name: &str) -> Option<DocumentHandle>;

    /// Structured header of a document. Missing or unparseable headers are empty.
    fn read_header(&self, handle: &DocumentHandle) -> Header;

    /// Sets the extension of primary documents (no leading dot).
    fn set_primary_extension(&mut self, extension: &str);
}

pub trait DocumentReader {
    /// Reads a document's raw text.
    /// Returns Ok(None) if the document does not exist.
    fn read_text(&self, path: &str) -> Result<Option<String>>;
}

pub trait DocumentMover {
    /// Looks up a document by its exact path.
    fn document(&self, path: &str) -> Option<DocumentHandle>;

    /// Moves a document to `new_path`, creating parent folders as needed.
    /// Fails if the destination already exists; the store is left unchanged.
    fn rename(&self, handle: &DocumentHandle, new_path: &str) -> Result<()>;
}

/// Everything a document store provides to notekit.
pub trait Vault: LinkResolver + DocumentReader + DocumentMover {}

impl<T: LinkResolver + DocumentReader + DocumentMover> Vault for T {}

pub trait Clock {
    /// Seconds since the Unix epoch.
    fn timestamp(&self) -> i64;

    /// Current wall-clock time in the host's local zone.
    fn local_time(&self) -> NaiveTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> i64 {
        Utc::now().timestamp()
    }

    fn local_time(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock frozen at a given instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub timestamp: i64,
    pub local_time: NaiveTime,
}

impl FixedClock {
    pub fn new(timestamp: i64, local_time: NaiveTime) -> Self {
        Self {
            timestamp,
            local_time,
        }
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn local_time(&self) -> NaiveTime {
        self.local_time
    }
}

/// Picks the document a link path points at out of all known paths.
pub fn first_linkpath_dest<'a, I>(paths: I, name: &str, primary_extension: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let name = name.trim().trim_start_matches('/');
    if name.is_empty() {
        return None;
    }

    let primary_suffix = format!(".{}", primary_extension);
    let with_primary = format!("{}{}", name, primary_suffix);

    let mut candidates: Vec<&str> = paths
        .into_iter()
        .filter(|path| {
            if name.contains('/') {
                return path_ends_with(path, name) || path_ends_with(path, &with_primary);
            }
            let handle = DocumentHandle::new(*path);
            handle.name() == name
                || (handle.extension() == primary_extension && handle.basename() == name)
        })
        .collect();

    candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    candidates.first().map(|p| p.to_string())
}

/// Whether `segment` names a single child entry: not `.`, `..`, a root or a drive.
pub(crate) fn is_plain_segment(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Lowercased extension without a leading dot.
pub(crate) fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_lowercase()
}

fn path_ends_with(path: &str, suffix: &str) -> bool {
    path == suffix || path.ends_with(&format!("/{}", suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[&str] = &[
        "Projects/Alpha/Plan.md",
        "Plan.md",
        "Archive/Plan.md",
        "Assets/diagram.png",
        "Assets/Plan.png",
        "Meetings/Standup.md",
    ];

    fn dest(name: &str) -> Option<String> {
        first_linkpath_dest(PATHS.iter().copied(), name, "md")
    }

    #[test]
    fn bare_name_prefers_shortest_path() {
        assert_eq!(dest("Plan"), Some("Plan.md".to_string()));
    }

    #[test]
    fn bare_name_does_not_match_attachment_basename() {
        assert_eq!(dest("diagram"), None);
    }

    #[test]
    fn name_with_extension_matches_file_name() {
        assert_eq!(dest("diagram.png"), Some("Assets/diagram.png".to_string()));
        assert_eq!(dest("Plan.png"), Some("Assets/Plan.png".to_string()));
        assert_eq!(dest("Standup.md"), Some("Meetings/Standup.md".to_string()));
    }

    #[test]
    fn path_suffix_match() {
        assert_eq!(
            dest("Alpha/Plan"),
            Some("Projects/Alpha/Plan.md".to_string())
        );
        assert_eq!(dest("Archive/Plan.md"), Some("Archive/Plan.md".to_string()));
        assert_eq!(dest("pha/Plan"), None);
    }

    #[test]
    fn blank_name_resolves_nothing() {
        assert_eq!(dest("   "), None);
    }

    #[test]
    fn primary_extension_is_a_parameter() {
        let paths = ["Plan.markdown", "Notes/Plan.md"];
        assert_eq!(
            first_linkpath_dest(paths.iter().copied(), "Plan", "markdown"),
            Some("Plan.markdown".to_string())
        );
        assert_eq!(
            first_linkpath_dest(paths.iter().copied(), "Plan", "md"),
            Some("Notes/Plan.md".to_string())
        );
    }

    #[test]
    fn plain_segments() {
        assert!(is_plain_segment("Meetings"));
        assert!(is_plain_segment("v1.2"));
        assert!(is_plain_segment("..hidden"));
        assert!(!is_plain_segment(".."));
        assert!(!is_plain_segment("."));
        assert!(!is_plain_segment("C:"));
        assert!(!is_plain_segment("c:secret"));
        assert!(!is_plain_segment(""));
    }

    #[test]
    fn fixed_clock_reports_what_it_was_given() {
        let clock = FixedClock::new(42, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(clock.timestamp(), 42);
        assert_eq!(clock.local_time().format("%H:%M").to_string(), "09:30");
    }
}
