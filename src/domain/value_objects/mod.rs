//! Domain Value Objects
//!
//! Immutable value types used to describe staged files and commands.

mod command_spec;
mod entity_kind;
mod file_category;

pub use command_spec::CommandSpec;
pub use entity_kind::EntityKind;
pub use file_category::FileCategory;
