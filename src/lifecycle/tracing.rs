//! # Observability & Tracing
//!
//! Handles report their ownership changes through the `tracing` crate. Nothing is
//! printed unless a subscriber is installed; [`setup_tracing`] installs one.
//!
//! ## What Gets Traced
//!
//! Every event carries a `resource` field (the [`HandleTraits::name`] of the resource
//! kind) and the `value` involved.
//!
//! - **TRACE `Destroy`**: a held value is released, on drop or on reset
//! - **DEBUG `Released`**: ownership handed to the caller (`release`, `into_raw`, `take`)
//! - **DEBUG `Opened` / `Created`**: a descriptor acquired by [`UniqueFd`]
//! - **WARN `close failed`**: the OS refused to close a descriptor
//!
//! ## Usage Examples
//!
//! ```bash
//! # Ownership hand-offs only
//! RUST_LOG=unique_handle=debug cargo test
//!
//! # Every release as well
//! RUST_LOG=trace cargo test
//! ```
//!
//! Running with `RUST_LOG=trace` shows:
//!
//! ```text
//! DEBUG Opened path="/tmp/.tmpQ1x/data.txt" fd=3
//! TRACE Destroy resource="fd" value=3
//! ```
//!
//! [`HandleTraits::name`]: crate::HandleTraits::name
//! [`UniqueFd`]: crate::fd_handle::UniqueFd

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Panics if a global subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // `resource` field already names the handle kind
        .compact()
        .init();
}

/// Same format as [`setup_tracing`], written through the test harness.
///
/// Safe to call from every test; only the first call installs the subscriber.
pub fn setup_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init();
}
