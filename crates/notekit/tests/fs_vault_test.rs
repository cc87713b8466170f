use notekit::error::NotekitError;
use notekit::model::DocumentHandle;
use notekit::store::fs::FsVault;
use notekit::store::{DocumentMover, DocumentReader, LinkResolver};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsVault) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("Meetings")).unwrap();
    fs::create_dir_all(root.join("Assets")).unwrap();
    fs::create_dir_all(root.join(".obsidian")).unwrap();

    fs::write(
        root.join("Meetings/Standup.md"),
        "---\nTitle: Daily Standup\ntags: [team]\n---\nNotes",
    )
    .unwrap();
    fs::write(root.join("Standup.md"), "root copy").unwrap();
    fs::write(root.join("Assets/board.jpg"), [0u8, 1, 2]).unwrap();
    fs::write(root.join(".obsidian/Hidden.md"), "not part of the vault").unwrap();
    fs::write(root.join("Broken.md"), "---\n: : :\n  - [\n---\n").unwrap();

    let vault = FsVault::new(root);
    (dir, vault)
}

#[test]
fn test_fs_vault_lists_paths_without_dot_dirs() {
    let (_dir, vault) = setup();
    let paths = vault.list_paths().unwrap();
    assert_eq!(
        paths,
        vec![
            "Assets/board.jpg",
            "Broken.md",
            "Meetings/Standup.md",
            "Standup.md",
        ]
    );
}

#[test]
fn test_fs_vault_resolves_shortest_path_first() {
    let (_dir, vault) = setup();
    assert_eq!(vault.resolve("Standup").unwrap().path(), "Standup.md");
    assert_eq!(
        vault.resolve("Meetings/Standup").unwrap().path(),
        "Meetings/Standup.md"
    );
    assert_eq!(vault.resolve("board.jpg").unwrap().path(), "Assets/board.jpg");
    assert!(vault.resolve("Hidden").is_none());
}

#[test]
fn test_fs_vault_reads_header() {
    let (_dir, vault) = setup();
    let header = vault.read_header(&DocumentHandle::new("Meetings/Standup.md"));
    assert_eq!(header["Title"], "Daily Standup");
    assert_eq!(header["tags"][0], "team");
}

#[test]
fn test_fs_vault_broken_header_is_empty() {
    let (_dir, vault) = setup();
    let header = vault.read_header(&DocumentHandle::new("Broken.md"));
    assert!(header.is_empty());
}

#[test]
fn test_fs_vault_read_text() {
    let (_dir, vault) = setup();
    assert_eq!(
        vault.read_text("Standup.md").unwrap(),
        Some("root copy".to_string())
    );
    assert_eq!(vault.read_text("Missing.md").unwrap(), None);
    assert_eq!(vault.read_text("Meetings").unwrap(), None);
}

#[test]
fn test_fs_vault_rename_creates_folders() {
    let (dir, vault) = setup();
    let handle = vault.document("Standup.md").unwrap();

    vault.rename(&handle, "Archive/2024/Standup.md").unwrap();

    assert!(!dir.path().join("Standup.md").exists());
    let moved = dir.path().join("Archive").join("2024").join("Standup.md");
    assert_eq!(fs::read_to_string(moved).unwrap(), "root copy");
}

#[test]
fn test_fs_vault_rename_refuses_existing_destination() {
    let (dir, vault) = setup();
    let handle = vault.document("Standup.md").unwrap();

    let err = vault.rename(&handle, "Meetings/Standup.md").unwrap_err();
    assert!(matches!(err, NotekitError::Store(_)));
    assert!(dir.path().join("Standup.md").exists());
}

#[test]
fn test_fs_vault_document_lookup() {
    let (_dir, vault) = setup();
    assert!(vault.document("Meetings/Standup.md").is_some());
    assert!(vault.document("Meetings").is_none());
    assert!(vault.document("Nope.md").is_none());
}

#[test]
fn test_fs_vault_stays_inside_root() {
    let outer = TempDir::new().unwrap();
    let root = outer.path().join("vault");
    fs::create_dir_all(root.join("Inbox")).unwrap();
    fs::write(root.join("Inbox/Untitled.md"), "draft").unwrap();
    fs::write(outer.path().join("secret.txt"), "SECRET").unwrap();
    let vault = FsVault::new(root.clone());

    assert_eq!(vault.read_text("../secret.txt").unwrap(), None);
    assert_eq!(vault.read_text("Inbox/../../secret.txt").unwrap(), None);
    assert!(vault.document("../secret.txt").is_none());

    let handle = vault.document("Inbox/Untitled.md").unwrap();
    let err = vault.rename(&handle, "../outside/Escaped.md").unwrap_err();
    assert!(matches!(err, NotekitError::Store(_)));
    assert!(!outer.path().join("outside").exists());
    assert!(root.join("Inbox/Untitled.md").exists());
}

#[test]
fn test_fs_vault_custom_primary_extension() {
    let (dir, _) = setup();
    fs::write(dir.path().join("Plan.markdown"), "---\nTitle: The Plan\n---\n").unwrap();
    let vault = FsVault::new(dir.path()).with_primary_extension("markdown");

    assert_eq!(vault.resolve("Plan").unwrap().path(), "Plan.markdown");
    assert!(vault.resolve("Standup").is_none());
    assert_eq!(vault.resolve("Standup.md").unwrap().path(), "Standup.md");
}
