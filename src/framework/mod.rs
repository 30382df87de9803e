//! Generic single-owner resource handles.
//!
//! This module provides the building blocks for holding externally managed resources
//! (descriptors, opaque C handles, integer ids) with automatic, exactly-once release.
//!
//! # Main Components
//!
//! - [`HandleTraits`] - Capability a resource kind implements (sentinel + release)
//! - [`UniqueHandle`] - Generic owner that releases its resource on drop
//! - [`HandleError`] - Errors from the checked operations
//! - [`unique_handle!`](crate::unique_handle) - Defines a resource kind in one line
//!
//! # Testing
//!
//! See [`mock`] module for a recording resource kind and its release ledger.

pub mod error;
pub mod handle;
pub mod macros;
pub mod mock;

// Re-export core types for convenience
pub use error::{HandleError, Result};
pub use handle::*;
