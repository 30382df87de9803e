//! # Handle Errors
//!
//! The handle itself never fails: an empty handle is how a failed acquisition is
//! represented. These errors come from the opt-in checked operations and from
//! constructors that acquire OS resources.

/// Result type for handle operations.
pub type Result<T> = std::result::Result<T, HandleError>;

/// Errors reported by checked handle operations.
#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    /// A resource was required but the handle holds the sentinel.
    #[error("No {resource} resource is held")]
    Invalid {
        /// Name of the resource kind.
        resource: &'static str,
    },

    /// A handle was reset with the value it already holds.
    #[error("Reset of {resource} handle with its own value {value}")]
    SelfReset {
        /// Name of the resource kind.
        resource: &'static str,
        /// The offending value, rendered with `Debug`.
        value: String,
    },

    /// Acquiring the underlying OS resource failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
