use crate::config::CommonConfig;
use crate::error::Result;
use crate::models::module_ref::partition_modules;
use crate::utils::copy_tree_staged;
use std::path::PathBuf;
use tracing::{debug, info};

/// Copy every non-empty `--modules` entry to `<out>/<module path without target suffix>`.
///
/// Returns the destinations in input order and the number of skipped empty entries.
/// The target is checked before anything is copied.
pub fn copy_modules(config: &CommonConfig) -> Result<(Vec<PathBuf>, usize)> {
    let (modules, skipped) = partition_modules(&config.modules);
    if skipped > 0 {
        debug!("Skipping {} empty module reference(s)", skipped);
    }
    if modules.is_empty() {
        return Ok((Vec::new(), skipped));
    }

    let suffix = config.require_target()?;
    let destinations = modules
        .iter()
        .map(|module| module.destination(&config.out, suffix))
        .collect::<Result<Vec<_>>>()?;

    for (module, destination) in modules.iter().zip(&destinations) {
        info!(
            "Copying module {} to {}",
            module.source().display(),
            destination.display()
        );
        copy_tree_staged(module.source(), destination)?;
    }

    Ok((destinations, skipped))
}
