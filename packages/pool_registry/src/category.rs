use std::fmt::Debug;
use std::hash::Hash;

/// Identifies which pool a caller wants from a [`PoolRegistry`][crate::PoolRegistry].
///
/// Implement this for a fieldless enum that lists every pool the application uses. Adding a pool
/// means adding a variant. Each category maps to at most one pool.
///
/// # Example
///
/// ```rust
/// use pool_registry::Category;
///
/// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
/// enum PoolNames {
///     Bubble,
///     Splash,
/// }
///
/// impl Category for PoolNames {}
///
/// assert_eq!(PoolNames::Splash.scope_name(), "Pool_Splash");
/// ```
pub trait Category: Copy + Eq + Hash + Debug + 'static {
    /// Name of the scope that instances of this category's pool are attached to.
    ///
    /// The default is the `Debug` representation prefixed with `Pool_`. The name must be
    /// non-empty and must not contain the scope separator.
    fn scope_name(self) -> String {
        format!("Pool_{self:?}")
    }
}
