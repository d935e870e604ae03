//! Cross-platform utility functions.

pub mod fs;

pub use fs::{atomic_write, ensure_dir, is_writable};
