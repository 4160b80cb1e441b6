use pyprep::{FALLBACK_VERSION, extract_version, read_version};
use std::fs;
use tempfile::TempDir;

#[test]
fn extracts_version_from_text() {
    let manifest = "[package]\nname = \"bc4py_extension\"\nversion = \"1.2.3\"\nedition = \"2024\"\n";
    assert_eq!(extract_version(manifest), "1.2.3");
}

#[test]
fn no_version_line_yields_sentinel() {
    let manifest = "[package]\nname = \"bc4py_extension\"\n";
    assert_eq!(extract_version(manifest), FALLBACK_VERSION);
    assert_eq!(FALLBACK_VERSION, "0.1.0-unknown");
}

#[test]
fn value_is_trimmed_before_stripping_quotes() {
    assert_eq!(extract_version("version =   \"2.0.0\"   \n"), "2.0.0");
}

#[test]
fn reads_version_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Cargo.toml");
    fs::write(&path, "version = \"0.7.2\"\n").unwrap();

    assert_eq!(read_version(&path).unwrap(), "0.7.2");
}

#[test]
fn file_without_version_yields_sentinel() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Cargo.toml");
    fs::write(&path, "[package]\nname = \"x\"\n").unwrap();

    assert_eq!(read_version(&path).unwrap(), FALLBACK_VERSION);
}

#[test]
fn missing_manifest_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Cargo.toml");

    let err = read_version(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read manifest"));
}
