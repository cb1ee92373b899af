use std::path::PathBuf;
use tracing::info;

/// Outcome of a successful preparation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrepareReport {
    pub moved_dirs: Vec<PathBuf>,
    pub copied_modules: Vec<PathBuf>,
    pub copied_sources: Vec<PathBuf>,
    pub skipped_modules: usize,
}

impl PrepareReport {
    pub fn total_operations(&self) -> usize {
        self.moved_dirs.len() + self.copied_modules.len() + self.copied_sources.len()
    }

    pub fn log_summary(&self) {
        info!("=== PREPARE REPORT ===");
        info!("Directories moved: {}", self.moved_dirs.len());
        info!("Modules copied: {}", self.copied_modules.len());
        info!("Source files copied: {}", self.copied_sources.len());
        info!("Empty module references skipped: {}", self.skipped_modules);
    }
}
