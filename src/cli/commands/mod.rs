//! Command execution functions for staging operations.
//!
//! One function per subcommand. Each returns the process exit code.

mod persistent;
mod staging;

pub use persistent::open_persistent;
pub use staging::{build, copy_to_streaming, manifest, stage, verify};
