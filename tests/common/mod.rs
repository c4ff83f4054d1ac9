//! Common test utilities for jobstage contract and scenario tests.
//!
//! This module provides:
//! - `TestWorkspace`: Isolated job workspace in a temp directory
//! - Assertion macros: `assert_staged!`, `assert_execution_failure!`
//! - Fixtures: Reusable references and scripts

#![allow(dead_code, unused_imports)]

pub mod env;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
