//! Process-level setup shared by binaries and tests embedding the handles.

pub mod tracing;

pub use self::tracing::*;
