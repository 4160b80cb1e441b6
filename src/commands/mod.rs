//! Command implementations for the pyprep CLI

pub(crate) mod build;
pub(crate) mod completion;
pub(crate) mod describe;
pub(crate) mod env;

use crate::InputArgs;
use anyhow::{Context, Result};
use pyprep::{BuildDescriptor, python};
use std::fs;

/// Read the inputs and assemble the build descriptor.
///
/// The manifest must be readable; a missing requirements listing is treated
/// as an empty one. The host interpreter is only consulted when no explicit
/// `--python` override was given.
pub(crate) fn load_descriptor(inputs: &InputArgs) -> Result<BuildDescriptor> {
    let manifest = fs::read_to_string(&inputs.manifest)
        .with_context(|| format!("Failed to read manifest at {}", inputs.manifest))?;

    let requirements = fs::read_to_string(&inputs.requirements).unwrap_or_else(|err| {
        pyprep::debug!("no requirements at {}: {err}", inputs.requirements);
        String::new()
    });

    let python = python::resolve_version(inputs.python)?;
    pyprep::debug!("assembling descriptor for Python {python}");

    BuildDescriptor::assemble(&manifest, &requirements, python)
        .with_context(|| format!("Cannot build against Python {python}"))
}
