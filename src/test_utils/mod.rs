//! Common test utilities for pk tests
//!
//! This module provides shared input fixtures and custom assertions that can
//! be used across unit and integration tests.

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
