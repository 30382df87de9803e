//! Declarative definition of resource kinds.

/// Defines a [`HandleTraits`](crate::HandleTraits) type and its handle alias in one go.
///
/// `unique_handle!(pub Name: Value = sentinel, |value| { release })` expands to a
/// zero-sized `NameTraits` implementing the capability, plus
/// `type UniqueName = UniqueHandle<NameTraits>`.
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use unique_handle::unique_handle;
///
/// static CLOSED: AtomicUsize = AtomicUsize::new(0);
///
/// unique_handle!(
///     /// Window ids handed out by a toolkit.
///     pub Window: u32 = 0,
///     |_id| { CLOSED.fetch_add(1, Ordering::SeqCst); }
/// );
///
/// {
///     let window = UniqueWindow::new(12);
///     assert!(window.is_valid());
/// }
/// assert_eq!(CLOSED.load(Ordering::SeqCst), 1);
/// ```
#[macro_export]
macro_rules! unique_handle {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : $value:ty = $invalid:expr,
        |$arg:ident| $destroy:block
    ) => {
        $crate::__paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            $vis struct [<$name Traits>];

            impl $crate::HandleTraits for [<$name Traits>] {
                type Value = $value;

                fn invalid() -> Self::Value {
                    $invalid
                }

                fn destroy($arg: Self::Value) $destroy

                fn name() -> &'static str {
                    stringify!($name)
                }
            }

            #[doc = "Owning handle for `" $name "` resources."]
            $vis type [<Unique $name>] = $crate::UniqueHandle<[<$name Traits>]>;
        }
    };
}
