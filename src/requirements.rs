//! Requirements listing filter
//!
//! The Python side of the package declares its own dependencies in a
//! newline-delimited requirements listing. Lines at or below the length
//! threshold are dropped, which discards blanks and stray fragments.

use std::fs;
use std::path::Path;

/// A line must be strictly longer than this to count as a dependency.
///
/// Inherited policy threshold: it also drops legitimately short requirement
/// names (`six` never survives), so it lives here as a named constant rather
/// than buried in a conditional.
pub const MIN_DEPENDENCY_LEN: usize = 5;

/// Filter requirements text into the retained dependency lines.
///
/// Order is preserved; there is no deduplication and no syntax validation.
///
/// # Examples
///
/// ```
/// use pyprep::requirements::filter_requirements;
///
/// let deps = filter_requirements("numpy>=1.16\nsix\n\n");
/// assert_eq!(deps, ["numpy>=1.16"]);
/// ```
#[must_use]
pub fn filter_requirements(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| line.len() > MIN_DEPENDENCY_LEN)
        .map(str::to_string)
        .collect()
}

/// Read and filter the requirements listing at `path`.
///
/// A missing or unreadable listing is not an error; it just means the
/// package has no Python-side dependencies.
#[must_use]
pub fn read_requirements(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(text) => filter_requirements(&text),
        Err(err) => {
            crate::debug!("no requirements at {}: {err}", path.display());
            Vec::new()
        }
    }
}
