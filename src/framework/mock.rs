//! # Mock Resources & Testing Guide
//!
//! [`UniqueToken`] is a handle over plain `i32` tokens whose release is recorded in a
//! per-thread ledger instead of touching any real resource. It lets tests assert exactly
//! which values were destroyed, and how often, without opening files or sockets.
//!
//! ## The Ledger
//!
//! | Call | Effect |
//! |------|--------|
//! | [`acquire`] | Marks a token live and returns a handle owning it |
//! | [`destroyed`] | Every release on this thread, in order |
//! | [`destroy_count`] | How many times one value was released |
//! | [`live`] | Acquired tokens not yet released (leaks, at scope end) |
//! | [`reset_ledger`] | Forgets everything recorded on this thread |
//!
//! The ledger panics when the sentinel is released, or when a token is released
//! twice without being acquired again in between.
//!
//! The ledger is thread-local. Each `#[test]` runs on its own thread, so tests never
//! see each other's releases. A handle dropped on another thread is recorded in *that*
//! thread's ledger; read it there.
//!
//! ```rust
//! use unique_handle::mock;
//!
//! {
//!     let _token = mock::acquire(42);
//!     assert_eq!(mock::live(), vec![42]);
//! }
//! assert_eq!(mock::destroyed(), vec![42]);
//! assert!(mock::live().is_empty());
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use tracing::debug;

/// Sentinel of [`TokenTraits`].
pub const INVALID_TOKEN: i32 = -1;

crate::unique_handle!(
    /// Recording traits over `i32` tokens, sentinel [`INVALID_TOKEN`].
    pub Token: i32 = INVALID_TOKEN,
    |value| { record_destroy(value) }
);

#[derive(Debug, Default)]
struct Ledger {
    live: HashSet<i32>,
    destroyed: Vec<i32>,
}

thread_local! {
    static LEDGER: RefCell<Ledger> = RefCell::new(Ledger::default());
}

fn record_destroy(value: i32) {
    assert_ne!(value, INVALID_TOKEN, "destroy called with the sentinel");
    LEDGER.with(|ledger| {
        let mut ledger = ledger.borrow_mut();
        let owned = ledger.live.remove(&value);
        assert!(
            owned || !ledger.destroyed.contains(&value),
            "token {value} released twice"
        );
        ledger.destroyed.push(value);
    });
    debug!(value, "Token destroyed");
}

/// Registers `value` as a live token and returns the handle that owns it.
///
/// Panics if `value` is the sentinel or is already live on this thread.
pub fn acquire(value: i32) -> UniqueToken {
    assert_ne!(value, INVALID_TOKEN, "cannot acquire the sentinel");
    LEDGER.with(|ledger| {
        let inserted = ledger.borrow_mut().live.insert(value);
        assert!(inserted, "token {value} is already owned");
    });
    UniqueToken::new(value)
}

/// All releases recorded on this thread, oldest first.
pub fn destroyed() -> Vec<i32> {
    LEDGER.with(|ledger| ledger.borrow().destroyed.clone())
}

/// Number of times `value` was released on this thread.
pub fn destroy_count(value: i32) -> usize {
    LEDGER.with(|ledger| {
        ledger
            .borrow()
            .destroyed
            .iter()
            .filter(|&&destroyed| destroyed == value)
            .count()
    })
}

/// Acquired tokens that have not been released yet, sorted.
pub fn live() -> Vec<i32> {
    LEDGER.with(|ledger| {
        let mut live: Vec<i32> = ledger.borrow().live.iter().copied().collect();
        live.sort_unstable();
        live
    })
}

/// Clears this thread's ledger.
pub fn reset_ledger() {
    LEDGER.with(|ledger| *ledger.borrow_mut() = Ledger::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandleTraits;

    #[test]
    fn traits_use_declared_sentinel_and_name() {
        assert_eq!(TokenTraits::invalid(), INVALID_TOKEN);
        assert_eq!(TokenTraits::name(), "Token");
    }

    #[test]
    fn reacquired_value_may_be_released_again() {
        drop(acquire(1));
        drop(acquire(1));
        assert_eq!(destroy_count(1), 2);
    }

    #[test]
    #[should_panic(expected = "released twice")]
    fn double_release_panics() {
        TokenTraits::destroy(2);
        TokenTraits::destroy(2);
    }

    #[test]
    #[should_panic(expected = "already owned")]
    fn double_acquire_panics() {
        let _first = acquire(3);
        let _second = acquire(3);
    }

    #[test]
    fn reset_ledger_forgets_history() {
        drop(acquire(4));
        let _kept = acquire(5);
        reset_ledger();
        assert!(destroyed().is_empty());
        assert!(live().is_empty());
    }
}
