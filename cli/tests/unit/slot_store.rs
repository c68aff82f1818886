//! Tests for the YAML slot store.
//!
//! Every test binds the store to a file inside a fresh temp dir.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use deskcloud_cli::application::ports::SlotStore;
use deskcloud_cli::application::services::config_service;
use deskcloud_cli::infra::config::YamlSlotStore;
use deskcloud_common::{CloudConfig, PostBuildBehavior};
use tempfile::TempDir;

/// Returns a `TempDir` and a store for a not-yet-existing file inside it.
fn temp_store() -> (TempDir, std::path::PathBuf, YamlSlotStore) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("slots.yaml");
    let store = YamlSlotStore::at(&path);
    (dir, path, store)
}

#[test]
fn load_missing_file_is_empty() {
    let (_dir, _path, store) = temp_store();
    let cfg = store.load().unwrap();
    assert_eq!(cfg, CloudConfig::default());
}

#[test]
fn path_is_the_bound_file() {
    let (_dir, path, store) = temp_store();
    assert_eq!(store.path().unwrap(), path);
}

#[test]
fn save_then_load_pool() {
    let (_dir, path, store) = temp_store();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        "slots:\n  - vm_id: macos-builder\n    labels: macos\n    post_build_behavior: Bogus\n",
    )
    .unwrap();

    let pool = config_service::load_pool(&store).unwrap();
    config_service::save_config(&store, &pool.to_config()).unwrap();

    let reloaded = config_service::load_config(&store).unwrap();
    assert_eq!(
        reloaded.slots[0].post_build_behavior.as_deref(),
        Some(PostBuildBehavior::Suspend.name())
    );
    assert_eq!(reloaded.slots[0].labels, "macos");
}

#[test]
fn save_creates_parent_directories() {
    let (_dir, path, store) = temp_store();
    store.save(&CloudConfig::default()).unwrap();
    assert!(path.exists());
}

#[cfg(unix)]
#[test]
fn save_restricts_permissions() {
    use std::os::unix::fs::PermissionsExt;
    let (_dir, path, store) = temp_store();
    store.save(&CloudConfig::default()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn load_rejects_malformed_yaml() {
    let (_dir, path, store) = temp_store();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "slots: [unterminated\n").unwrap();

    let err = store.load().unwrap_err();
    assert!(err.to_string().contains("cannot parse"));
}

#[test]
fn load_pool_rejects_duplicates() {
    let (_dir, path, store) = temp_store();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "slots:\n  - vm_id: a\n  - vm_id: a\n").unwrap();

    let err = config_service::load_pool(&store).unwrap_err();
    assert!(format!("{err:#}").contains("VM 'a' is configured more than once"));
}

#[test]
fn invalid_behaviors_lists_only_bad_values() {
    let cfg: CloudConfig = serde_yaml::from_str(
        "slots:\n  - vm_id: a\n    post_build_behavior: Stop\n  - vm_id: b\n    post_build_behavior: stop\n  - vm_id: c\n",
    )
    .unwrap();
    assert_eq!(
        config_service::invalid_behaviors(&cfg),
        [("b".to_string(), "stop".to_string())]
    );
}
