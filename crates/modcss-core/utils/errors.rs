//! Core error types and cross-module error handling
//!
//! One unified `CoreError` for the crate, built on `thiserror`. Absent
//! values and malformed tree shapes degrade to no-ops at resolution time,
//! so the variants here cover configuration and registry misuse plus
//! genuine internal defects.

use std::fmt;
use thiserror::Error;

/// Main error type for engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Attribute tree construction or conversion errors.
    #[error("attribute tree error: {0}")]
    Tree(String),

    /// Registry misuse (duplicate or missing function/map names).
    #[error("registry error: {0}")]
    Registry(String),

    /// Breakpoint order and settings errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// A value that should have carried a parsable CSS length did not.
    #[error("invalid length value: '{0}'")]
    InvalidLength(String),

    /// Internal consistency error (should not happen).
    #[error("internal error: {0} (this is a bug, please report)")]
    Internal(String),
}

impl CoreError {
    /// Create a tree error from a message.
    pub fn tree<T: fmt::Display>(message: T) -> Self {
        Self::Tree(message.to_string())
    }

    /// Create a registry error from a message.
    pub fn registry<T: fmt::Display>(message: T) -> Self {
        Self::Registry(message.to_string())
    }

    /// Create a configuration error from a message.
    pub fn config<T: fmt::Display>(message: T) -> Self {
        Self::Config(message.to_string())
    }

    /// Create an invalid-length error from the offending raw value.
    pub fn invalid_length<T: fmt::Display>(raw: T) -> Self {
        Self::InvalidLength(raw.to_string())
    }

    /// Create an internal error (indicates a bug).
    pub fn internal<T: fmt::Display>(message: T) -> Self {
        Self::Internal(message.to_string())
    }

    /// Check if the error indicates a bug in the library.
    #[must_use]
    pub const fn is_internal_bug(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

/// Result type alias for convenience.
pub type Result<T> = core::result::Result<T, CoreError>;
