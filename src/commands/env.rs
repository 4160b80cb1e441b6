//! Env command
//!
//! Display the detected Python interpreter, the compatibility cfgs it earns,
//! and host system information.

use anyhow::Result;
use pyprep::{manifest, python};
use std::path::Path;

pub(crate) fn run() -> Result<()> {
    println!("Python Information:");
    println!();

    match python::detect_version() {
        Ok(version) => {
            println!("  Version:      {version}");
            match python::version_cfgs(version) {
                Ok(cfgs) if cfgs.is_empty() => {
                    println!("  Cfg flags:    (none; {version} is below 3.{})", pyprep::MIN_PY3_MINOR);
                }
                Ok(cfgs) => println!("  Cfg flags:    {}", cfgs.join(" ")),
                Err(err) => println!("  Cfg flags:    unavailable ({err})"),
            }
        }
        Err(_) => {
            println!("  Version:      (not detected - Python not available)");
        }
    }

    let manifest_path = Path::new(pyprep::MANIFEST_PATH);
    if manifest_path.exists() {
        let version = manifest::read_version(manifest_path)?;
        println!("  Pkg version:  {version}");
    }

    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    let family = std::env::consts::FAMILY;

    println!();
    println!("System Information:");
    println!("  OS:           {os}");
    println!("  Architecture: {arch}");
    println!("  Family:       {family}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_command() {
        let result = run();
        assert!(result.is_ok());
    }
}
