//! Process execution adapters

mod local;

pub use local::LocalCommandRunner;
