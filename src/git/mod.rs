// ABOUTME: Git integration module for repository discovery and hook/data locations

pub mod repository;

pub use repository::{data_dir, is_inside_work_tree, RepoPaths, DATA_DIR_NAME};
