use std::fs;

use tempfile::TempDir;
use vitae::output::{ensure_output_file, write_output};

#[test]
fn test_ensure_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("resume.html");

    // Non-existent file
    assert!(ensure_output_file(&target, false).is_ok());

    fs::write(&target, "old").unwrap();
    // Existing file without force
    assert!(ensure_output_file(&target, false).is_err());
    // Existing file with force
    assert_eq!(ensure_output_file(&target, true).unwrap(), target);
}

#[test]
fn test_write_output_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("out").join("nested").join("resume.html");

    write_output("<div class=\"resume\"></div>", &target).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "<div class=\"resume\"></div>");
}
