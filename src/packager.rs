//! Packaging orchestrator invocation
//!
//! Compilation and packaging are delegated to a Python-side orchestrator
//! reached as `python -m <module> <command>`. The assembled descriptor is
//! serialized to JSON and piped on stdin; the orchestrator owns everything
//! from there (build and install command semantics included).

use crate::descriptor::BuildDescriptor;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Default orchestrator module invoked via `python -m`
pub const DEFAULT_ORCHESTRATOR: &str = "pyprep_setup";

/// Outcome of one orchestrator invocation
#[derive(Debug)]
pub struct PackageResult {
    /// Orchestrator subcommand that ran (e.g. "build")
    pub command: String,

    /// Whether the orchestrator exited successfully
    pub success: bool,

    /// Invocation duration
    pub duration: Duration,

    /// Combined stdout + stderr from the orchestrator
    pub output: String,
}

/// Handle to the external packaging orchestrator
#[derive(Debug)]
pub struct Packager {
    /// Path to the Python interpreter
    python_path: PathBuf,

    /// Orchestrator module name passed to `python -m`
    orchestrator: String,

    /// Echo orchestrator output as it completes
    verbose: bool,
}

impl Packager {
    /// Create a packager, locating the Python interpreter.
    ///
    /// Priority order:
    /// 1. `PYPREP_PYTHON` / `PYTHON` environment variables
    /// 2. `python3` in PATH
    /// 3. `python` in PATH
    /// 4. Error if none found
    pub fn new(verbose: bool) -> Result<Self> {
        let python_path = Self::find_python_executable()
            .context("Python interpreter not found. Packaging requires Python to be installed.")?;

        Ok(Self {
            python_path,
            orchestrator: crate::env_vars::orchestrator()
                .unwrap_or_else(|| DEFAULT_ORCHESTRATOR.to_string()),
            verbose,
        })
    }

    /// Find a Python executable on the system
    fn find_python_executable() -> Result<PathBuf> {
        if let Some(python_env) = crate::env_vars::python() {
            let path = PathBuf::from(&python_env);
            if path.exists() || !python_env.contains('/') {
                return Ok(path);
            }
        }

        for candidate in ["python3", "python"] {
            if let Ok(output) = Command::new("which").arg(candidate).output()
                && output.status.success()
            {
                let path_str = String::from_utf8_lossy(&output.stdout);
                let path = PathBuf::from(path_str.trim());
                if path.exists() {
                    return Ok(path);
                }
            }
        }

        anyhow::bail!("Python interpreter not found; set PYPREP_PYTHON to point at one")
    }

    /// Invoke the orchestrator with the assembled descriptor.
    ///
    /// The descriptor is serialized once and written to the orchestrator's
    /// stdin; a failed orchestrator exit is reported in the result, not as an
    /// error, so the caller can surface the captured output.
    pub fn invoke(&self, descriptor: &BuildDescriptor, command: &str) -> Result<PackageResult> {
        let start_time = Instant::now();
        let payload = serde_json::to_string(descriptor)
            .context("Failed to serialize the build descriptor")?;

        crate::debug!(
            "invoking {} -m {} {command}",
            self.python_path.display(),
            self.orchestrator
        );

        let mut child = Command::new(&self.python_path)
            .args(["-m", &self.orchestrator, command])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| {
                format!("Failed to launch orchestrator {}", self.orchestrator)
            })?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(payload.as_bytes())
                .context("Failed to hand the descriptor to the orchestrator")?;
        }

        let output = child
            .wait_with_output()
            .context("Failed to wait for the orchestrator")?;

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if self.verbose && !combined.is_empty() {
            print!("{combined}");
        }

        Ok(PackageResult {
            command: command.to_string(),
            success: output.status.success(),
            duration: start_time.elapsed(),
            output: combined,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;

    #[test]
    fn find_python() {
        // Passes wherever some Python is installed; otherwise the error
        // message should point at the override.
        match Packager::find_python_executable() {
            Ok(path) => assert!(!path.as_os_str().is_empty()),
            Err(e) => assert!(e.to_string().contains("PYPREP_PYTHON")),
        }
    }
}
