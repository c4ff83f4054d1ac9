//! Application Layer
//!
//! What concrete workflow tasks build on. Depends on the domain layer and
//! is generic over its ports, so any `CommandRunner` can be plugged in.

pub mod task_support;

pub use task_support::TaskSupport;
