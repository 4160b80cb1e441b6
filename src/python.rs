//! Host Python detection and compatibility cfg generation
//!
//! The extension is compiled against whatever CPython is running the build,
//! so the compiler needs one `Py_3_N` cfg per minor-version threshold the
//! host meets. Each cfg means "at least 3.N", not "exactly 3.N": a 3.8 host
//! gets `Py_3_5` through `Py_3_8` cumulatively.

use anyhow::{Context, Result};
use std::process::Command;
use thiserror::Error;

/// Oldest Python 3 minor version the extension supports
pub const MIN_PY3_MINOR: u32 = 5;

/// Errors from host runtime version handling
#[derive(Debug, Error)]
pub enum PythonError {
    /// Python 2 (and anything older) cannot load the extension at all.
    #[error("Python {major}.{minor} is not supported; the extension requires Python 3")]
    UnsupportedRuntime { major: u32, minor: u32 },

    /// A hypothetical Python 4+ host: refuse rather than guess a cfg set
    /// for an interpreter line the extension has never been built against.
    #[error("Python {major}.{minor} is untested; only Python 3 hosts are handled")]
    UntestedRuntime { major: u32, minor: u32 },

    /// Interpreter output that does not look like `major.minor`
    #[error("Could not parse Python version from {0:?}")]
    UnparsableVersion(String),
}

/// Host interpreter version as a (major, minor) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl PythonVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl std::str::FromStr for PythonVersion {
    type Err = PythonError;

    /// Parse a `major.minor` pair; a micro component is tolerated and dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pyprep::python::PythonVersion;
    /// use std::str::FromStr;
    ///
    /// assert_eq!(PythonVersion::from_str("3.8").unwrap(), PythonVersion::new(3, 8));
    /// assert_eq!(PythonVersion::from_str("3.11.4").unwrap(), PythonVersion::new(3, 11));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparsable = || PythonError::UnparsableVersion(s.to_string());

        let mut parts = s.trim().splitn(3, '.');
        let major = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(unparsable)?;
        let minor = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(unparsable)?;

        Ok(Self { major, minor })
    }
}

/// Generate the ordered compatibility cfg set for a host version.
///
/// For a Python 3 host, returns `Py_3_5` through `Py_3_<minor>` ascending.
/// A 3.x host below the minimum yields an empty set. Anything other than
/// major version 3 is a fatal error, never a degraded flag set.
///
/// # Examples
///
/// ```
/// use pyprep::python::{PythonVersion, version_cfgs};
///
/// let cfgs = version_cfgs(PythonVersion::new(3, 7)).unwrap();
/// assert_eq!(cfgs, ["Py_3_5", "Py_3_6", "Py_3_7"]);
/// ```
pub fn version_cfgs(version: PythonVersion) -> Result<Vec<String>, PythonError> {
    let PythonVersion { major, minor } = version;

    if major < 3 {
        return Err(PythonError::UnsupportedRuntime { major, minor });
    }
    if major > 3 {
        return Err(PythonError::UntestedRuntime { major, minor });
    }

    Ok((MIN_PY3_MINOR..=minor)
        .map(|threshold| format!("Py_3_{threshold}"))
        .collect())
}

/// Detect the host interpreter version by asking the interpreter itself.
///
/// Candidate order: `PYPREP_PYTHON`, `PYTHON`, `python3`, `python`. The first
/// candidate that runs and reports a parsable `major.minor` wins.
pub fn detect_version() -> Result<PythonVersion> {
    let candidates = crate::env_vars::python()
        .map_or_else(|| vec!["python3".to_string(), "python".to_string()], |p| vec![p]);

    for candidate in &candidates {
        if let Some(version) = query_interpreter(candidate) {
            crate::debug!("detected Python {version} via {candidate}");
            return Ok(version);
        }
    }

    anyhow::bail!(
        "No working Python interpreter found (tried {}); set PYPREP_PYTHON to override",
        candidates.join(", ")
    )
}

/// Ask one interpreter for `sys.version_info[:2]`; None if it fails to run
fn query_interpreter(python: &str) -> Option<PythonVersion> {
    let output = Command::new(python)
        .args(["-c", "import sys; print('%d.%d' % sys.version_info[:2])"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    String::from_utf8_lossy(&output.stdout).trim().parse().ok()
}

/// Resolve the version to build against: explicit override or host detection.
pub fn resolve_version(explicit: Option<PythonVersion>) -> Result<PythonVersion> {
    explicit.map_or_else(
        || detect_version().context("Failed to detect the host Python version"),
        Ok,
    )
}
