use pyprep::{MIN_DEPENDENCY_LEN, filter_requirements, read_requirements};
use std::fs;
use tempfile::TempDir;

#[test]
fn filters_short_and_blank_lines() {
    let deps = filter_requirements("numpy>=1.16\nsix\n\n");
    assert_eq!(deps, ["numpy>=1.16"]);
}

#[test]
fn threshold_is_five_characters() {
    assert_eq!(MIN_DEPENDENCY_LEN, 5);

    // Exactly at the threshold is dropped; one past it is kept.
    let deps = filter_requirements("abcde\nabcdef\n");
    assert_eq!(deps, ["abcdef"]);
}

#[test]
fn order_is_preserved() {
    let deps = filter_requirements("zlib-ng>=2\naiohttp>=3.8\nnumpy>=1.16\n");
    assert_eq!(deps, ["zlib-ng>=2", "aiohttp>=3.8", "numpy>=1.16"]);
}

#[test]
fn reads_listing_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("requirements.txt");
    fs::write(&path, "numpy>=1.16\nsix\n").unwrap();

    assert_eq!(read_requirements(&path), ["numpy>=1.16"]);
}

#[test]
fn missing_listing_yields_empty_list() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("requirements.txt");

    assert!(read_requirements(&path).is_empty());
}

#[test]
fn empty_listing_yields_empty_list() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("requirements.txt");
    fs::write(&path, "").unwrap();

    assert!(read_requirements(&path).is_empty());
}
