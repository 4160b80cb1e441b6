//! Pyprep environment variable handling.

use std::env;

/// Get the Python interpreter override (checks `PYPREP_PYTHON` then `PYTHON`).
pub fn python() -> Option<String> {
    env::var("PYPREP_PYTHON")
        .or_else(|_| env::var("PYTHON"))
        .ok()
        .filter(|value| !value.is_empty())
}

/// Get the orchestrator module override (`PYPREP_ORCHESTRATOR`).
pub fn orchestrator() -> Option<String> {
    env::var("PYPREP_ORCHESTRATOR")
        .ok()
        .filter(|value| !value.is_empty())
}
