pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::{CommonConfig, ModuleConfig, WorkspaceConfig, DEFAULT_TARGET, TARGET_ENV};
pub use error::PrepareError;
pub use models::{ModuleRef, SourceList, TargetSuffix};
pub use services::{prepare_module, prepare_workspace, PrepareReport};
