//! Domain Services
//!
//! Stateless domain logic.

pub mod path_resolver;

pub use path_resolver::{build_local_path, last_segment, LocalFileRequest};
