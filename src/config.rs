use crate::error::{PrepareError, Result};
use crate::models::TargetSuffix;
use std::path::PathBuf;
use tracing::Level;

/// Environment variable naming the current build target
pub const TARGET_ENV: &str = "TERRAFORM_TARGET";

/// Target used when neither `--target` nor `TERRAFORM_TARGET` is given
pub const DEFAULT_TARGET: &str = "terraform";

/// Settings shared by both preparers
#[derive(Debug, Clone, Default)]
pub struct CommonConfig {
    /// Suffix stripped from dependency module paths; `None` when the target was set to an empty value
    pub target: Option<TargetSuffix>,
    /// Raw `--modules` values, empty entries included
    pub modules: Vec<String>,
    pub out: PathBuf,
}

impl CommonConfig {
    pub fn new(out: impl Into<PathBuf>, target: Option<&str>, modules: Vec<String>) -> Self {
        Self {
            target: target.and_then(TargetSuffix::from_target),
            modules,
            out: out.into(),
        }
    }

    /// Target suffix, required as soon as a module has to be copied
    pub fn require_target(&self) -> Result<&TargetSuffix> {
        self.target.as_ref().ok_or(PrepareError::MissingTarget)
    }
}

/// Configuration for the module preparer
#[derive(Debug, Clone)]
pub struct ModuleConfig {
    pub common: CommonConfig,
    pub module_dir: PathBuf,
}

/// Configuration for the workspace preparer
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    pub common: CommonConfig,
    pub pkg_dir: PathBuf,
    /// Raw `--srcs` value in `[a b/c]` form
    pub srcs: String,
}

/// Map a `--log-level` value to a tracing level, defaulting to INFO
pub fn parse_log_level(value: &str) -> Level {
    match value.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
