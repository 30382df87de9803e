//! # Unique Handle
//!
//! This module defines the generic building blocks for exclusive resource ownership.
//!
//! ## Key Types
//!
//! - [`HandleTraits`]: The capability every resource kind implements (sentinel + release).
//! - [`UniqueHandle`]: The single-owner wrapper that releases its resource on drop.
//! - [`swap`] / [`equals`]: Free-function forms of the handle's swap and equality.

use crate::framework::error::{HandleError, Result};
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;
use tracing::{debug, trace};

// =============================================================================
// 1. THE ABSTRACTION (the resource capability)
// =============================================================================

/// Describes how to recognise "no resource" and how to release a held resource.
///
/// # Architecture Note
/// `UniqueHandle` is written *once* against this trait and reused for every resource
/// kind (descriptors, opaque C pointers, plain integer ids). The trait carries no state:
/// both operations are associated functions, so the choice of resource kind is fixed
/// at compile time and costs nothing at runtime.
///
/// # Contract
/// - [`invalid`](HandleTraits::invalid) returns the same sentinel on every call.
/// - [`destroy`](HandleTraits::destroy) is never called by the handle with the sentinel,
///   and never twice for the same acquired value.
/// - `destroy` must not panic. A failed release is the implementation's business:
///   log it and move on.
///
/// # Example
///
/// ```rust
/// use unique_handle::{HandleTraits, UniqueHandle};
///
/// struct SocketTraits;
///
/// impl HandleTraits for SocketTraits {
///     type Value = u64;
///
///     fn invalid() -> u64 {
///         0
///     }
///
///     fn destroy(_socket: u64) {
///         // hand the id back to the socket layer
///     }
/// }
///
/// let socket = UniqueHandle::<SocketTraits>::new(17);
/// assert!(socket.is_valid());
/// ```
pub trait HandleTraits {
    /// The resource identifier (descriptor, pointer-sized token, integer id).
    type Value: Copy + PartialEq + Debug;

    /// The sentinel meaning "no resource held".
    fn invalid() -> Self::Value;

    /// Releases a non-sentinel resource.
    fn destroy(value: Self::Value);

    /// Name recorded as the `resource` field of log events.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

// =============================================================================
// 2. THE OWNER
// =============================================================================

/// Exclusive, automatically released ownership of one resource identifier.
///
/// A `UniqueHandle` holds either a value it owns or `T::invalid()`. When it goes out of
/// scope (normal return, `?`, or unwinding panic) a held value is passed to
/// `T::destroy` exactly once.
///
/// ## Ownership rules
///
/// * **No copies** – neither `Clone` nor `Copy` is implemented, so two handles can never
///   own the same value through this type.
/// * **Moves** – `let b = a;` transfers ownership and makes `a` unusable. Where a value
///   cannot be moved out of (a struct field, a `&mut` borrow) use [`take`](Self::take),
///   which leaves the sentinel behind.
/// * **Assignment** – `a = b;` drops the old `a` first, releasing its resource.
///   [`assign`](Self::assign) does the same through a `&mut` reference.
///
/// ```rust
/// use unique_handle::mock::{self, UniqueToken};
///
/// let h1 = mock::acquire(42);
/// let h2 = h1; // h1 is statically unusable from here on
/// assert_eq!(h2.get(), 42);
///
/// let mut h3: UniqueToken = mock::acquire(7);
/// assert_eq!(h3.get(), 7);
/// h3 = h2; // 7 is released here
/// assert_eq!(mock::destroy_count(7), 1);
/// assert_eq!(h3.get(), 42);
///
/// h3.reset();
/// assert_eq!(mock::destroy_count(42), 1);
/// assert!(!h3.is_valid());
/// ```
///
/// Copying is a compile error:
///
/// ```compile_fail
/// use unique_handle::mock;
///
/// fn duplicate<C: Clone>(value: &C) -> C {
///     value.clone()
/// }
///
/// let handle = mock::acquire(1);
/// let _second_owner = duplicate(&handle);
/// ```
pub struct UniqueHandle<T: HandleTraits> {
    value: T::Value,
    // `fn() -> T` keeps the auto traits tied to `T::Value` only.
    _traits: PhantomData<fn() -> T>,
}

impl<T: HandleTraits> UniqueHandle<T> {
    /// Wraps `value` as the owned resource.
    ///
    /// The caller asserts `value` is either freshly acquired and owned by nobody else, or
    /// the sentinel (acquisition failed upstream). No validation is performed.
    pub fn new(value: T::Value) -> Self {
        Self {
            value,
            _traits: PhantomData,
        }
    }

    /// Creates a handle that owns nothing.
    pub fn empty() -> Self {
        Self::new(T::invalid())
    }

    /// Wraps `value`, turning the sentinel into [`HandleError::Invalid`].
    ///
    /// Convenient when an upstream acquisition reports failure through the sentinel and
    /// the caller wants to bail out with `?`.
    pub fn checked(value: T::Value) -> Result<Self> {
        if value == T::invalid() {
            return Err(HandleError::Invalid { resource: T::name() });
        }
        Ok(Self::new(value))
    }

    /// Returns `true` when a resource is held.
    pub fn is_valid(&self) -> bool {
        self.value != T::invalid()
    }

    /// Returns `true` when no resource is held.
    pub fn is_empty(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the held value without transferring ownership.
    ///
    /// The result is a point-in-time snapshot. It does not make the caller an owner.
    pub fn get(&self) -> T::Value {
        self.value
    }

    /// Gives up ownership without calling `destroy`.
    ///
    /// The handle is left empty and the caller becomes responsible for the returned value.
    pub fn release(&mut self) -> T::Value {
        let value = std::mem::replace(&mut self.value, T::invalid());
        if value != T::invalid() {
            debug!(resource = T::name(), ?value, "Released");
        }
        value
    }

    /// Consuming form of [`release`](Self::release).
    pub fn into_raw(mut self) -> T::Value {
        self.release()
    }

    /// Moves the resource into a new handle, leaving this one empty.
    pub fn take(&mut self) -> Self {
        Self::new(self.release())
    }

    /// Replaces the held resource with the one owned by `other`.
    ///
    /// Whatever `self` held is released (no-op if empty). The incoming handle is swapped
    /// into place and the displaced value is destroyed when the temporary drops, so the
    /// transferred value is never destroyed along the way.
    pub fn assign(&mut self, other: Self) {
        let mut incoming = other;
        incoming.swap(self);
    }

    /// Releases the held resource and leaves the handle empty.
    pub fn reset(&mut self) {
        self.reset_to(T::invalid());
    }

    /// Releases the held resource (if any) and takes ownership of `value`.
    ///
    /// `value` must not be the non-sentinel value this handle already holds: that would
    /// destroy the resource and keep its now-dangling identifier. This is checked with
    /// `debug_assert!` only; release builds do not check it. Values owned by *other*
    /// handles are not detected in any build. See [`try_reset_to`](Self::try_reset_to)
    /// for a check that runs in every build.
    pub fn reset_to(&mut self, value: T::Value) {
        debug_assert!(
            value == T::invalid() || value != self.value,
            "reset with the value already held by this handle"
        );
        let old = std::mem::replace(&mut self.value, value);
        Self::destroy_held(old);
    }

    /// Like [`reset_to`](Self::reset_to), but reports the self-reset misuse as
    /// [`HandleError::SelfReset`] and leaves the handle untouched.
    pub fn try_reset_to(&mut self, value: T::Value) -> Result<()> {
        if value != T::invalid() && value == self.value {
            return Err(HandleError::SelfReset {
                resource: T::name(),
                value: format!("{value:?}"),
            });
        }
        self.reset_to(value);
        Ok(())
    }

    /// Exchanges the held values. Nothing is acquired or released.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.value, &mut other.value);
    }

    fn destroy_held(value: T::Value) {
        if value != T::invalid() {
            trace!(resource = T::name(), ?value, "Destroy");
            T::destroy(value);
        }
    }
}

impl<T: HandleTraits> Drop for UniqueHandle<T> {
    fn drop(&mut self) {
        Self::destroy_held(self.value);
    }
}

impl<T: HandleTraits> Default for UniqueHandle<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: HandleTraits> Deref for UniqueHandle<T> {
    type Target = T::Value;

    fn deref(&self) -> &T::Value {
        &self.value
    }
}

/// Identifier equality: two empty handles compare equal.
impl<T: HandleTraits> PartialEq for UniqueHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: HandleTraits> Eq for UniqueHandle<T> where T::Value: Eq {}

impl<T: HandleTraits> Hash for UniqueHandle<T>
where
    T::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: HandleTraits> Debug for UniqueHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueHandle")
            .field("resource", &T::name())
            .field("value", &self.value)
            .finish()
    }
}

// =============================================================================
// 3. FREE FUNCTIONS
// =============================================================================

/// Exchanges the values of two handles.
pub fn swap<T: HandleTraits>(lhs: &mut UniqueHandle<T>, rhs: &mut UniqueHandle<T>) {
    lhs.swap(rhs);
}

/// Identifier equality of two handles.
pub fn equals<T: HandleTraits>(lhs: &UniqueHandle<T>, rhs: &UniqueHandle<T>) -> bool {
    lhs == rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{self, TokenTraits, UniqueToken, INVALID_TOKEN};
    use std::collections::HashSet;

    #[test]
    fn empty_handle_is_invalid_and_never_destroyed() {
        {
            let handle = UniqueToken::new(INVALID_TOKEN);
            assert!(!handle.is_valid());
            assert!(handle.is_empty());
            assert_eq!(handle.get(), INVALID_TOKEN);
        }
        {
            let handle = UniqueToken::default();
            assert_eq!(handle.get(), INVALID_TOKEN);
        }
        assert!(mock::destroyed().is_empty());
    }

    #[test]
    fn drop_destroys_exactly_once() {
        {
            let handle = mock::acquire(5);
            assert!(handle.is_valid());
            assert_eq!(*handle, 5);
        }
        assert_eq!(mock::destroyed(), vec![5]);
        assert!(mock::live().is_empty());
    }

    #[test]
    fn release_hands_ownership_to_caller() {
        let mut handle = mock::acquire(9);
        let raw = handle.release();
        assert_eq!(raw, 9);
        assert!(!handle.is_valid());
        drop(handle);
        assert_eq!(mock::destroy_count(9), 0);

        // Re-adopt the released value so the ledger balances.
        drop(UniqueToken::new(raw));
        assert_eq!(mock::destroy_count(9), 1);
    }

    #[test]
    fn into_raw_does_not_destroy() {
        let handle = mock::acquire(3);
        assert_eq!(handle.into_raw(), 3);
        assert_eq!(mock::destroy_count(3), 0);
        assert_eq!(mock::live(), vec![3]);
    }

    #[test]
    fn take_empties_the_source() {
        let mut source = mock::acquire(11);
        let target = source.take();
        assert!(!source.is_valid());
        assert_eq!(target.get(), 11);
        assert!(mock::destroyed().is_empty());

        let mut via_mem = mock::acquire(12);
        let moved = std::mem::take(&mut via_mem);
        assert_eq!(via_mem.get(), INVALID_TOKEN);
        assert_eq!(moved.get(), 12);
    }

    #[test]
    fn assign_releases_previous_value() {
        let mut target = mock::acquire(7);
        target.assign(mock::acquire(42));
        assert_eq!(mock::destroyed(), vec![7]);
        assert_eq!(target.get(), 42);

        let mut empty = UniqueToken::empty();
        empty.assign(mock::acquire(8));
        assert_eq!(mock::destroyed(), vec![7]);
        assert_eq!(empty.get(), 8);
    }

    #[test]
    fn reset_to_replaces_value() {
        let mut handle = mock::acquire(1);
        handle.reset_to(2);
        assert_eq!(mock::destroyed(), vec![1]);
        assert_eq!(handle.get(), 2);

        handle.reset();
        assert_eq!(mock::destroyed(), vec![1, 2]);
        assert!(!handle.is_valid());

        // Resetting an empty handle releases nothing.
        handle.reset();
        assert_eq!(mock::destroyed(), vec![1, 2]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "reset with the value already held")]
    fn reset_to_held_value_panics_in_debug() {
        let mut handle = mock::acquire(4);
        handle.reset_to(4);
    }

    #[test]
    fn try_reset_to_rejects_held_value() {
        let mut handle = mock::acquire(4);
        let err = handle.try_reset_to(4).unwrap_err();
        assert!(matches!(err, HandleError::SelfReset { .. }));
        assert_eq!(handle.get(), 4);
        assert!(mock::destroyed().is_empty());

        handle.try_reset_to(5).expect("different value is accepted");
        assert_eq!(mock::destroyed(), vec![4]);
        assert_eq!(handle.get(), 5);
    }

    #[test]
    fn checked_rejects_sentinel() {
        let err = UniqueToken::checked(INVALID_TOKEN).unwrap_err();
        assert!(matches!(err, HandleError::Invalid { .. }));

        let handle = UniqueToken::checked(6).expect("non-sentinel is accepted");
        assert_eq!(handle.get(), 6);
    }

    #[test]
    fn swap_exchanges_without_release() {
        let mut a = mock::acquire(1);
        let mut b = UniqueToken::empty();
        swap(&mut a, &mut b);
        assert!(!a.is_valid());
        assert_eq!(b.get(), 1);
        assert!(mock::destroyed().is_empty());
    }

    #[test]
    fn equality_compares_identifiers() {
        assert!(equals(&UniqueToken::empty(), &UniqueToken::empty()));

        let a = mock::acquire(21);
        let b = UniqueToken::empty();
        assert_ne!(a, b);

        let mut seen = HashSet::new();
        seen.insert(UniqueToken::empty());
        assert!(seen.contains(&UniqueToken::empty()));
    }

    #[test]
    fn debug_names_the_resource() {
        let handle = mock::acquire(30);
        let rendered = format!("{handle:?}");
        assert!(rendered.contains(TokenTraits::name()));
        assert!(rendered.contains("30"));
    }
}
