//! Integration tests for `ConfigStore` against real files.
//!
//! Every test works inside its own directory under the system temp dir so the
//! user's actual `~/.zd_hire` is never touched.

use std::path::{Path, PathBuf};

use uuid::Uuid;
use zd_hire_core::{ConfigError, ConfigRecord, ConfigStore, Field};

/// Creates an empty scratch directory and returns the config path inside it.
fn scratch_config_path() -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("zd_hire_test_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    let path = dir.join(".zd_hire");
    (dir, path)
}

fn cleanup(dir: &Path) {
    std::fs::remove_dir_all(dir).ok();
}

fn assert_empty(store: &ConfigStore) {
    for field in Field::ALL {
        assert_eq!(store.get(field), None, "{field} must be unset");
    }
    assert!(!store.is_valid());
}

// ── Fresh store ───────────────────────────────────────────────────────────────

#[test]
fn test_open_without_file_yields_empty_invalid_record() {
    // Arrange
    let (dir, path) = scratch_config_path();

    // Act
    let store = ConfigStore::open_at(&path).expect("open");

    // Assert
    assert_empty(&store);
    assert_eq!(store.path(), path.as_path());
    assert!(!path.exists(), "opening must not create the file");

    cleanup(&dir);
}

// ── Round trip ────────────────────────────────────────────────────────────────

#[test]
fn test_save_then_reopen_restores_all_fields() {
    let samples = [
        ("tok1", "me/repo", "/tmp/x", "main"),
        ("ghp_0123456789abcdef", "org/some-exercise", "/home/a b/c", "feature/x-1"),
        ("null", "~", "true", "42"),
        ("", " padded ", "C:\\Users\\me", "branch: with colon"),
        ("ünïcödé", "#hash", "- dash", "'quoted'"),
    ];

    for (token, repo, local, branch) in samples {
        // Arrange
        let (dir, path) = scratch_config_path();
        let mut store = ConfigStore::open_at(&path).expect("open");
        store.set_github_token(token.to_string());
        store.set_origin_repo(repo.to_string());
        store.set_local_path(local.to_string());
        store.set_branch(branch.to_string());

        // Act
        store.save().expect("save");
        let reloaded = ConfigStore::open_at(&path).expect("reopen");

        // Assert
        assert_eq!(reloaded.github_token(), Some(token));
        assert_eq!(reloaded.origin_repo(), Some(repo));
        assert_eq!(reloaded.local_path(), Some(local));
        assert_eq!(reloaded.branch(), Some(branch));
        assert!(reloaded.is_valid());

        cleanup(&dir);
    }
}

#[test]
fn test_save_then_reopen_keeps_unset_fields_unset() {
    // Arrange
    let (dir, path) = scratch_config_path();
    let mut store = ConfigStore::open_at(&path).expect("open");
    store.set_origin_repo("me/repo".to_string());

    // Act
    store.save().expect("save");
    let reloaded = ConfigStore::open_at(&path).expect("reopen");

    // Assert
    assert_eq!(reloaded.record(), store.record());
    assert_eq!(reloaded.github_token(), None);
    assert!(!reloaded.is_valid());

    cleanup(&dir);
}

#[test]
fn test_saved_file_names_all_four_keys() {
    let (dir, path) = scratch_config_path();
    let store = ConfigStore::open_at(&path).expect("open");

    store.save().expect("save");
    let content = std::fs::read_to_string(&path).expect("read back");

    for field in Field::ALL {
        assert!(content.contains(field.key()), "{field} missing from {content}");
    }

    cleanup(&dir);
}

// ── Validity ──────────────────────────────────────────────────────────────────

#[test]
fn test_is_valid_only_when_every_field_is_set_for_all_subsets() {
    let (dir, path) = scratch_config_path();

    for mask in 0u8..16 {
        // Arrange
        let mut store = ConfigStore::open_at(&path).expect("open");
        for (bit, field) in Field::ALL.into_iter().enumerate() {
            if mask & (1 << bit) != 0 {
                store.set(field, format!("value-{bit}"));
            }
        }

        // Act
        let valid = store.is_valid();

        // Assert
        assert_eq!(valid, mask == 0b1111, "mask {mask:04b}");
        assert_eq!(
            store.missing_fields().len(),
            4 - mask.count_ones() as usize,
            "mask {mask:04b}"
        );
    }

    assert!(!path.exists(), "validity checks must not touch the disk");
    cleanup(&dir);
}

// ── Corruption recovery ───────────────────────────────────────────────────────

#[test]
fn test_malformed_file_is_deleted_and_store_starts_empty() {
    // Arrange
    let (dir, path) = scratch_config_path();
    std::fs::write(&path, "not: [valid, yaml: structure").unwrap();

    // Act
    let store = ConfigStore::open_at(&path).expect("open must not fail");

    // Assert
    assert_empty(&store);
    assert!(!path.exists(), "corrupt file must be removed");

    cleanup(&dir);
}

#[test]
fn test_wrongly_shaped_files_are_deleted() {
    let bodies = ["", "- one\n- two\n", "plain scalar", "branch: [a, b]\n"];

    for body in bodies {
        let (dir, path) = scratch_config_path();
        std::fs::write(&path, body).unwrap();

        let store = ConfigStore::open_at(&path).expect("open must not fail");

        assert_empty(&store);
        assert!(!path.exists(), "file with body {body:?} must be removed");
        cleanup(&dir);
    }
}

#[test]
fn test_non_utf8_file_is_deleted() {
    let (dir, path) = scratch_config_path();
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

    let store = ConfigStore::open_at(&path).expect("open must not fail");

    assert_empty(&store);
    assert!(!path.exists());
    cleanup(&dir);
}

#[test]
fn test_corrupt_file_can_be_replaced_by_save() {
    // Arrange
    let (dir, path) = scratch_config_path();
    std::fs::write(&path, "{{{{").unwrap();
    let mut store = ConfigStore::open_at(&path).expect("open");

    // Act
    store.set_branch("main".to_string());
    store.save().expect("save");

    // Assert
    let reloaded = ConfigStore::open_at(&path).expect("reopen");
    assert_eq!(reloaded.branch(), Some("main"));

    cleanup(&dir);
}

#[test]
fn test_undeletable_unusable_path_is_reported() {
    // Arrange: a directory at the config path can be neither read as a file
    // nor removed with remove_file.
    let (dir, path) = scratch_config_path();
    std::fs::create_dir_all(&path).unwrap();

    // Act
    let result = ConfigStore::open_at(&path);

    // Assert
    match result {
        Err(ConfigError::Discard { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Discard error, got {other:?}"),
    }
    assert!(path.is_dir(), "directory must be left in place");

    cleanup(&dir);
}

// ── Overwrite ─────────────────────────────────────────────────────────────────

#[test]
fn test_second_save_overwrites_changed_field_only() {
    // Arrange
    let (dir, path) = scratch_config_path();
    let mut store = ConfigStore::open_at(&path).expect("open");
    store.set_github_token("tok1".to_string());
    store.set_origin_repo("me/repo".to_string());
    store.set_local_path("/tmp/x".to_string());
    store.set_branch("main".to_string());
    store.save().expect("first save");

    // Act
    store.set_branch("dev".to_string());
    store.save().expect("second save");
    let reloaded = ConfigStore::open_at(&path).expect("reopen");

    // Assert
    assert_eq!(reloaded.branch(), Some("dev"));
    assert_eq!(reloaded.github_token(), Some("tok1"));
    assert_eq!(reloaded.origin_repo(), Some("me/repo"));
    assert_eq!(reloaded.local_path(), Some("/tmp/x"));

    cleanup(&dir);
}

#[test]
fn test_save_drops_unknown_keys_from_previous_file() {
    let (dir, path) = scratch_config_path();
    std::fs::write(&path, "branch: main\nextra: keep-me?\n").unwrap();

    let store = ConfigStore::open_at(&path).expect("open");
    store.save().expect("save");
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(!content.contains("extra"), "save is a full overwrite: {content}");
    assert!(content.contains("branch: main"));
    cleanup(&dir);
}

// ── Partial keys ──────────────────────────────────────────────────────────────

#[test]
fn test_file_with_only_some_keys_loads_those_fields() {
    // Arrange
    let (dir, path) = scratch_config_path();
    std::fs::write(&path, "origin_repo: me/repo\nbranch: main\n").unwrap();

    // Act
    let store = ConfigStore::open_at(&path).expect("open");

    // Assert
    assert_eq!(store.origin_repo(), Some("me/repo"));
    assert_eq!(store.branch(), Some("main"));
    assert_eq!(store.github_token(), None);
    assert_eq!(store.local_path(), None);
    assert!(!store.is_valid());
    assert_eq!(
        store.missing_fields(),
        vec![Field::GithubToken, Field::LocalPath]
    );
    assert!(path.exists(), "a well-formed file must be kept");

    cleanup(&dir);
}

#[test]
fn test_record_mut_edits_are_saved() {
    let (dir, path) = scratch_config_path();
    let mut store = ConfigStore::open_at(&path).expect("open");

    *store.record_mut() = ConfigRecord {
        github_token: Some("t".to_string()),
        origin_repo: Some("o/r".to_string()),
        local_path: Some("/l".to_string()),
        branch: Some("b".to_string()),
    };
    store.save().expect("save");

    let reloaded = ConfigStore::open_at(&path).expect("reopen");
    assert_eq!(reloaded.record(), store.record());
    cleanup(&dir);
}

// ── Write failures ────────────────────────────────────────────────────────────

#[test]
fn test_save_into_unwritable_location_returns_io_error() {
    // Arrange: after opening, the parent directory is replaced by a file.
    let (dir, path) = scratch_config_path();
    let mut store = ConfigStore::open_at(&path).expect("open");
    store.set_branch("main".to_string());
    std::fs::remove_dir_all(&dir).unwrap();
    std::fs::write(&dir, "x").unwrap();

    // Act
    let result = store.save();

    // Assert
    assert!(matches!(result, Err(ConfigError::Io { .. })), "got {result:?}");

    std::fs::remove_file(&dir).ok();
}
