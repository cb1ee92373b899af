pub mod file_operations;

pub use file_operations::{copy_dir_all, copy_file_into, copy_tree_staged, move_dir};
