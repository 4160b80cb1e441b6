//! Build descriptor assembly
//!
//! The descriptor is the single aggregate the packaging orchestrator consumes:
//! package identity, the Rust extension to compile, Python-side dependencies,
//! and the packaging switches. Assembly is a pure composition step over plain
//! values, so identical inputs always produce an identical descriptor.

use crate::manifest::extract_version;
use crate::python::{PythonError, PythonVersion, version_cfgs};
use crate::requirements::filter_requirements;
use serde::Serialize;

/// The Rust extension the orchestrator must compile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RustExtension {
    /// Importable module name the compiled cdylib provides
    pub module: String,

    /// Path to the Cargo manifest driving the compilation
    pub manifest_path: String,

    /// Host compatibility cfgs, ascending (e.g. `["Py_3_5", "Py_3_6"]`)
    pub version_cfgs: Vec<String>,
}

impl RustExtension {
    /// Render the compatibility cfgs as rustc flags (`--cfg=Py_3_N`).
    #[must_use]
    pub fn rustc_flags(&self) -> Vec<String> {
        self.version_cfgs
            .iter()
            .map(|cfg| format!("--cfg={cfg}"))
            .collect()
    }
}

/// Aggregate metadata handed to the packaging orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDescriptor {
    /// Python package name
    pub name: String,

    /// Version extracted from the Rust manifest (sentinel when absent)
    pub version: String,

    /// Trove classifiers, in publication order
    pub classifiers: Vec<String>,

    /// The extension to compile
    pub extension: RustExtension,

    /// Filtered Python-side dependencies, source order
    pub dependencies: Vec<String>,

    /// Ship ancillary data files with the package
    pub include_package_data: bool,

    /// Whether the package may be installed zipped (never, for a cdylib)
    pub zip_safe: bool,
}

impl BuildDescriptor {
    /// Assemble the descriptor from the two input texts and the host version.
    ///
    /// This is the whole derivation pipeline: version extraction, cfg
    /// generation, and dependency filtering, composed with the fixed package
    /// metadata. Pure and deterministic; the only failure is an unsupported
    /// host runtime, which aborts before anything is handed downstream.
    pub fn assemble(
        manifest: &str,
        requirements: &str,
        python: PythonVersion,
    ) -> Result<Self, PythonError> {
        let cfgs = version_cfgs(python)?;

        Ok(Self {
            name: crate::PACKAGE_NAME.to_string(),
            version: extract_version(manifest),
            classifiers: crate::CLASSIFIERS.iter().map(ToString::to_string).collect(),
            extension: RustExtension {
                module: crate::MODULE_NAME.to_string(),
                manifest_path: crate::MANIFEST_PATH.to_string(),
                version_cfgs: cfgs,
            },
            dependencies: filter_requirements(requirements),
            include_package_data: true,
            zip_safe: false,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;

    const MANIFEST: &str = "[package]\nname = \"bc4py_extension\"\nversion = \"0.2.1\"\n";
    const REQUIREMENTS: &str = "numpy>=1.16\nsix\n";

    #[test]
    fn assembles_all_parts() {
        let descriptor =
            BuildDescriptor::assemble(MANIFEST, REQUIREMENTS, PythonVersion::new(3, 6)).unwrap();

        assert_eq!(descriptor.name, "bc4py_extension");
        assert_eq!(descriptor.version, "0.2.1");
        assert_eq!(descriptor.classifiers.len(), 3);
        assert_eq!(descriptor.extension.module, "bc4py_extension");
        assert_eq!(descriptor.extension.manifest_path, "Cargo.toml");
        assert_eq!(descriptor.extension.version_cfgs, ["Py_3_5", "Py_3_6"]);
        assert_eq!(descriptor.dependencies, ["numpy>=1.16"]);
        assert!(descriptor.include_package_data);
        assert!(!descriptor.zip_safe);
    }

    #[test]
    fn assembly_is_idempotent() {
        let python = PythonVersion::new(3, 9);
        let first = BuildDescriptor::assemble(MANIFEST, REQUIREMENTS, python).unwrap();
        let second = BuildDescriptor::assemble(MANIFEST, REQUIREMENTS, python).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unsupported_runtime_aborts_assembly() {
        let result = BuildDescriptor::assemble(MANIFEST, REQUIREMENTS, PythonVersion::new(2, 7));
        assert!(result.is_err());
    }

    #[test]
    fn rustc_flags_carry_cfg_prefix() {
        let extension = RustExtension {
            module: "bc4py_extension".to_string(),
            manifest_path: "Cargo.toml".to_string(),
            version_cfgs: vec!["Py_3_5".to_string(), "Py_3_6".to_string()],
        };
        assert_eq!(extension.rustc_flags(), ["--cfg=Py_3_5", "--cfg=Py_3_6"]);
    }

    #[test]
    fn empty_inputs_use_fallbacks() {
        let descriptor = BuildDescriptor::assemble("", "", PythonVersion::new(3, 5)).unwrap();
        assert_eq!(descriptor.version, crate::manifest::FALLBACK_VERSION);
        assert!(descriptor.dependencies.is_empty());
    }
}
