pub mod module_ref;
pub mod source_list;

pub use module_ref::{ModuleRef, TargetSuffix};
pub use source_list::SourceList;
