//! Shared helpers for file system work and external processes.

pub mod fs;
pub mod process;
