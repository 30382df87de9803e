#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Unique Handle
//!
//! > **Single-owner, automatically released handles for externally managed resources.**
//!
//! File descriptors, opaque C handles and plain integer ids all share one shape: a scalar
//! value that names a resource, a sentinel that means "nothing", and a function that
//! gives the resource back. This crate wraps that shape once, generically, instead of
//! writing a bespoke wrapper per resource kind.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Traits: the resource kind as a type
//! You'll see `UniqueHandle<T: HandleTraits>` everywhere. `T` is a zero-sized type with
//! two associated functions, `invalid()` and `destroy()`.
//! -   **Benefit**: The ownership rules are written **once** and every resource kind gets them.
//! -   **Cost**: None at runtime. The resource kind is picked at compile time; there is no `dyn`.
//!
//! ### Ownership: moves, never copies
//! A handle cannot be cloned. Moving it (`let b = a;`) makes the old binding unusable, so
//! at most one live handle is ever responsible for a value. Dropping the owner releases
//! the value exactly once, whichever way the scope is left: return, `?`, or panic.
//!
//! ### Failure is a value, not an error
//! An empty handle is how "acquisition failed" is represented. The core never fails; the
//! opt-in checked operations ([`UniqueHandle::checked`], [`UniqueHandle::try_reset_to`])
//! report misuse through [`HandleError`].
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use unique_handle::{HandleTraits, UniqueHandle};
//!
//! struct TimerTraits;
//!
//! impl HandleTraits for TimerTraits {
//!     type Value = i64;
//!     fn invalid() -> i64 { -1 }
//!     fn destroy(_timer: i64) { /* cancel the timer */ }
//! }
//!
//! fn arm() -> UniqueHandle<TimerTraits> {
//!     UniqueHandle::new(4)
//! }
//!
//! let timer = arm();
//! if !timer.is_valid() {
//!     return;
//! }
//! assert_eq!(timer.get(), 4);
//! // cancelled here
//! ```
//!
//! Or let [`unique_handle!`] write the traits type:
//!
//! ```rust
//! unique_handle::unique_handle!(pub Timer: i64 = -1, |_timer| {});
//!
//! let timer = UniqueTimer::new(4);
//! assert!(timer.is_valid());
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The capability trait, the owning handle, and the checked-operation errors.
//! - **Key items**: [`HandleTraits`], [`UniqueHandle`], [`HandleError`].
//!
//! ### 2. Descriptors (`fd_handle`, unix only)
//! - **Role**: A ready-made resource kind for file descriptors, closed with `close(2)`.
//! - **Key items**: `UniqueFd`, `FdTraits`.
//!
//! ### 3. Testing ([`framework::mock`])
//! - **Role**: A resource kind that records every release in a per-thread ledger.
//!
//! ### 4. Observability ([`lifecycle`])
//! - **Role**: `tracing` subscriber setup. See [`lifecycle::tracing`] for the events emitted.
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=trace cargo test
//! ```

pub mod framework;
pub mod lifecycle;

#[cfg(unix)]
pub mod fd_handle;

pub use framework::{equals, swap, HandleError, HandleTraits, Result, UniqueHandle};
pub use framework::mock;

#[doc(hidden)]
pub use paste as __paste;
