//! Build and install commands
//!
//! The full pipeline: assemble the build descriptor from the inputs, then
//! delegate the requested orchestrator command. `--dry-run` stops after
//! assembly and prints what would have been handed over.

use crate::InputArgs;
use anyhow::Result;
use pyprep::Packager;

pub(crate) fn run(command: &str, inputs: &InputArgs, dry_run: bool, verbose: bool) -> Result<()> {
    let descriptor = super::load_descriptor(inputs)?;

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        println!();
        println!("Dry run: skipped orchestrator command `{command}`");
        return Ok(());
    }

    let packager = Packager::new(verbose)?;
    let result = packager.invoke(&descriptor, command)?;

    if !result.success {
        if !verbose {
            eprint!("{}", result.output);
        }
        anyhow::bail!(
            "Orchestrator command `{}` failed after {:.1?}",
            result.command,
            result.duration
        );
    }

    println!(
        "Packaged {} {} ({} in {:.1?})",
        descriptor.name, descriptor.version, result.command, result.duration
    );

    Ok(())
}
