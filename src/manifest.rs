//! Cargo.toml version extraction
//!
//! The packaging orchestrator wants the package version that the Rust
//! manifest declares. This is a best-effort textual scan, not a TOML parse:
//! the first line starting with the literal token `version` wins.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Sentinel version used when the manifest declares none
pub const FALLBACK_VERSION: &str = "0.1.0-unknown";

/// Extract the package version from manifest text.
///
/// Scans lines in order for the first one beginning with `version`, splits it
/// on the first `=`, trims the value, and strips the surrounding quote
/// delimiters. Returns [`FALLBACK_VERSION`] when no such line exists.
///
/// The quote stripping assumes the value is wrapped in exactly one quote
/// character per side; unquoted values or trailing comments are mangled
/// silently. No semver validation is performed.
///
/// # Examples
///
/// ```
/// use pyprep::manifest::extract_version;
///
/// assert_eq!(extract_version("[package]\nversion = \"1.2.3\"\n"), "1.2.3");
/// assert_eq!(extract_version("[package]\nname = \"x\"\n"), "0.1.0-unknown");
/// ```
#[must_use]
pub fn extract_version(manifest: &str) -> String {
    for line in manifest.split('\n') {
        if !line.starts_with("version") {
            continue;
        }

        // A `version` line without `=` (or without room for both quote
        // delimiters) carries no usable value; fall back to the sentinel.
        let Some((_, value)) = line.split_once('=') else {
            break;
        };

        let trimmed = value.trim();
        if trimmed.len() < 2 {
            break;
        }

        let mut chars = trimmed.chars();
        chars.next();
        chars.next_back();
        return chars.as_str().to_string();
    }

    FALLBACK_VERSION.to_string()
}

/// Read the manifest at `path` and extract the package version.
///
/// A manifest that exists but declares no version yields the sentinel; a
/// manifest that cannot be read at all is an error.
pub fn read_version(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest at {}", path.display()))?;

    Ok(extract_version(&text))
}
