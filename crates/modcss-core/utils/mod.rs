//! Utility functions and shared types
//!
//! Common functionality used across the tree, resolution, and declaration
//! modules: the unified error type, CSS value text helpers, and hashing
//! utilities for registries and the render cache.

pub mod css;
pub mod errors;
pub mod hashers;

pub use errors::{CoreError, Result};
