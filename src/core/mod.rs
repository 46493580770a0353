pub mod error;
pub mod git;
pub mod hook_name;
pub mod hooks_dir;
