//! Pyprep CLI internal library code

/// Python package name handed to the packaging orchestrator
pub const PACKAGE_NAME: &str = "bc4py_extension";

/// Compiled extension module name (matches the cdylib the manifest produces)
pub const MODULE_NAME: &str = "bc4py_extension";

/// Manifest path recorded in the extension descriptor
pub const MANIFEST_PATH: &str = "Cargo.toml";

/// Default requirements listing path
pub const REQUIREMENTS_PATH: &str = "requirements.txt";

/// Trove classifiers published with the package
pub const CLASSIFIERS: [&str; 3] = [
    "License :: OSI Approved :: MIT License",
    "Programming Language :: Python",
    "Programming Language :: Rust",
];

pub mod debug;
pub mod descriptor;
pub mod env_vars;
pub mod manifest;
pub mod packager;
pub mod python;
pub mod requirements;

// Re-export common types for convenience
pub use descriptor::{BuildDescriptor, RustExtension};
pub use manifest::{FALLBACK_VERSION, extract_version, read_version};
pub use packager::{PackageResult, Packager};
pub use python::{MIN_PY3_MINOR, PythonError, PythonVersion, detect_version, version_cfgs};
pub use requirements::{MIN_DEPENDENCY_LEN, filter_requirements, read_requirements};
