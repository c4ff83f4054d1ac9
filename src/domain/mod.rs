//! Domain Layer
//!
//! Pure logic for staging job files, without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (EntityKind, FileCategory, CommandSpec)
//! - `services/` - Stateless services (path resolution)
//! - `ports/` - Interface definitions for infrastructure (CommandRunner)

pub mod ports;
pub mod services;
pub mod value_objects;
