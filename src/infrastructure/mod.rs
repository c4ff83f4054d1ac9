//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - Command runners (Local)

pub mod process;

// Re-export for convenience
pub use process::LocalCommandRunner;
