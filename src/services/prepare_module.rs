use crate::config::ModuleConfig;
use crate::error::Result;
use crate::services::{copy_modules, PrepareReport};
use crate::utils::move_dir;
use tracing::info;

/// Move the prepared module to the output directory, then copy its dependency modules under it
pub fn prepare_module(config: &ModuleConfig) -> Result<PrepareReport> {
    let out = &config.common.out;

    // Fail on a missing target before the move so a bad invocation leaves the sandbox untouched
    if config.common.modules.iter().any(|m| !m.is_empty()) {
        config.common.require_target()?;
    }

    info!(
        "Moving module {} to {}",
        config.module_dir.display(),
        out.display()
    );
    move_dir(&config.module_dir, out)?;

    let (copied_modules, skipped_modules) = copy_modules(&config.common)?;

    Ok(PrepareReport {
        moved_dirs: vec![out.clone()],
        copied_modules,
        skipped_modules,
        ..Default::default()
    })
}
