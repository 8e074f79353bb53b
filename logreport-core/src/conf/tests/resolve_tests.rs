use crate::conf::{ConfigError, InputSelection, resolve_input};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn missing_selection_is_a_config_error() {
    let err = resolve_input(None).unwrap_err();

    assert!(matches!(err, ConfigError::NoInput));
}

#[test]
fn file_with_log_extension_resolves_to_itself() {
    // Arrange
    let selection = InputSelection::File(PathBuf::from("access.log"));

    // Act
    let input = resolve_input(Some(&selection)).unwrap();

    // Assert
    assert_eq!(input.paths(), &[PathBuf::from("access.log")]);
}

#[test]
fn file_without_log_extension_is_rejected() {
    // Arrange
    let selection = InputSelection::File(PathBuf::from("access.txt"));

    // Act
    let err = resolve_input(Some(&selection)).unwrap_err();

    // Assert
    match err {
        ConfigError::InvalidExtension { path } => assert_eq!(path, PathBuf::from("access.txt")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn file_named_like_extension_is_rejected() {
    let selection = InputSelection::File(PathBuf::from("catalog"));

    let err = resolve_input(Some(&selection)).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidExtension { .. }));
}

#[test]
fn folder_resolves_to_sorted_log_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("b.log"), "").unwrap();
    fs::write(root.join("a.log"), "").unwrap();
    fs::write(root.join("notes.txt"), "").unwrap();

    // Act
    let input = resolve_input(Some(&InputSelection::Folder(root.to_path_buf()))).unwrap();

    // Assert
    assert_eq!(input.paths(), &[root.join("a.log"), root.join("b.log")]);
}

#[test]
fn folder_without_log_files_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    // Act
    let err = resolve_input(Some(&InputSelection::Folder(dir.path().to_path_buf()))).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::NoLogFiles { .. }));
}

#[test]
fn missing_folder_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    // Act
    let err = resolve_input(Some(&InputSelection::Folder(missing.clone()))).unwrap_err();

    // Assert
    match err {
        ConfigError::NotADirectory { dir } => assert_eq!(dir, missing),
        other => panic!("unexpected error: {:?}", other),
    }
}
