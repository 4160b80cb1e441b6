//! Describe command
//!
//! Print the assembled build descriptor as pretty JSON without touching the
//! orchestrator. Useful for inspecting exactly what a build would hand over.

use crate::InputArgs;
use anyhow::Result;

pub(crate) fn run(inputs: &InputArgs) -> Result<()> {
    let descriptor = super::load_descriptor(inputs)?;
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}
