pub mod module_copy;
pub mod prepare_module;
pub mod prepare_workspace;
pub mod report;

pub use module_copy::copy_modules;
pub use prepare_module::prepare_module;
pub use prepare_workspace::prepare_workspace;
pub use report::PrepareReport;
