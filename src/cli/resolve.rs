use anyhow::Result;
use log::info;

use chromasm::naming::PeakNameResolver;

/// Resolve one peak name and print the result
pub fn run(name: &str, resolver: Box<dyn PeakNameResolver>) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Peak name must not be empty");
    }

    let resolved = resolver.resolve(name);
    info!("{} -> {} via {}", name, resolved, resolver.describe());
    println!("{}", resolved);

    Ok(())
}
