use nb_fs::{Error, WriteMode, io};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[rstest]
#[case::direct(WriteMode::Direct)]
#[case::atomic(WriteMode::Atomic)]
fn test_write_text_creates_parent_directories(#[case] mode: WriteMode) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("team/q3/report.ipynb");

    io::write_text(&path, "{}", mode).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[rstest]
#[case::direct(WriteMode::Direct)]
#[case::atomic(WriteMode::Atomic)]
fn test_write_text_overwrites_existing(#[case] mode: WriteMode) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.ipynb");
    fs::write(&path, "original").unwrap();

    io::write_text(&path, "updated", mode).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.ipynb");

    io::write_atomic(&path, b"content").unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["notes.ipynb".to_string()]);
}

#[test]
fn test_read_text_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.ipynb");
    fs::write(&path, "hello").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "hello");
}

#[test]
fn test_read_text_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let result = io::read_text(&temp.path().join("missing.ipynb"));
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_read_text_directory_is_io_error() {
    let temp = TempDir::new().unwrap();
    let result = io::read_text(temp.path());
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_rename_creates_destination_parent() {
    let temp = TempDir::new().unwrap();
    let from = temp.path().join("a.ipynb");
    let to = temp.path().join("archive/2024/a.ipynb");
    fs::write(&from, "x").unwrap();

    io::rename(&from, &to).unwrap();

    assert!(!from.exists());
    assert_eq!(fs::read_to_string(&to).unwrap(), "x");
}

#[test]
fn test_remove_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let result = io::remove_file(&temp.path().join("gone.ipynb"));
    assert!(result.unwrap_err().is_not_found());
}
