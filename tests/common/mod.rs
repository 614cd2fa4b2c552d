//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Word list fixtures
//! - Custom assertions on match results

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
