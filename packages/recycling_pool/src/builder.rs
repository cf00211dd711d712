use std::any::type_name;
use std::fmt;

use crate::error::Result;
use crate::{GrowthPolicy, Poolable, RecyclingPool, Scope};

/// Number of instances a pool is filled with when no initial size is specified.
pub const DEFAULT_INITIAL_SIZE: usize = 2;

/// Name of the scope a pool attaches its instances to when no scope is specified.
pub const DEFAULT_SCOPE_NAME: &str = "Pool";

/// Builder for creating an instance of [`RecyclingPool`].
///
/// The template is mandatory, whereas other settings are optional. By default the pool grows on
/// demand, starts with [`DEFAULT_INITIAL_SIZE`] idle instances and attaches them to a root scope
/// named [`DEFAULT_SCOPE_NAME`].
///
/// # Examples
///
/// ```
/// use recycling_pool::{GrowthPolicy, Handle, RecyclingPool, Scope};
///
/// // Default configuration.
/// let pool = RecyclingPool::builder(Handle::template("ember")).build().unwrap();
/// assert_eq!(pool.idle_count(), 2);
///
/// // Fully customized.
/// let pool = RecyclingPool::builder(Handle::template("ember"))
///     .scope(Scope::root("Fire"))
///     .growth_policy(GrowthPolicy::Fixed)
///     .initial_size(16)
///     .build()
///     .unwrap();
/// assert_eq!(pool.idle_count(), 16);
/// ```
#[must_use]
pub struct RecyclingPoolBuilder<T> {
    template: T,
    scope: Option<Scope>,
    growth_policy: GrowthPolicy,
    initial_size: usize,
}

impl<T> fmt::Debug for RecyclingPoolBuilder<T> {
    #[cfg_attr(test, mutants::skip)] // Debug output is not part of any contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclingPoolBuilder")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("scope", &self.scope)
            .field("growth_policy", &self.growth_policy)
            .field("initial_size", &self.initial_size)
            .finish_non_exhaustive()
    }
}

impl<T: Poolable> RecyclingPoolBuilder<T> {
    pub(crate) fn new(template: T) -> Self {
        Self {
            template,
            scope: None,
            growth_policy: GrowthPolicy::default(),
            initial_size: DEFAULT_INITIAL_SIZE,
        }
    }

    /// Sets the scope that instances created by the pool are attached to.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycling_pool::{Handle, RecyclingPool, Scope};
    ///
    /// let pool = RecyclingPool::builder(Handle::template("leaf"))
    ///     .scope(Scope::root("Forest"))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(pool.scope().path(), "Forest");
    /// ```
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Sets the [growth policy][GrowthPolicy] for the pool. This governs what happens
    /// when an instance is requested and none is idle.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycling_pool::{GrowthPolicy, Handle, RecyclingPool};
    ///
    /// let pool = RecyclingPool::builder(Handle::template("leaf"))
    ///     .growth_policy(GrowthPolicy::Fixed)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(pool.growth_policy(), GrowthPolicy::Fixed);
    /// ```
    pub fn growth_policy(mut self, policy: GrowthPolicy) -> Self {
        self.growth_policy = policy;
        self
    }

    /// Sets how many idle instances the pool is filled with when it is built.
    ///
    /// For a pool with [`GrowthPolicy::Fixed`] this is also its capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycling_pool::{Handle, RecyclingPool};
    ///
    /// let pool = RecyclingPool::builder(Handle::template("leaf"))
    ///     .initial_size(0)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(pool.idle_count(), 0);
    /// ```
    pub fn initial_size(mut self, initial_size: usize) -> Self {
        self.initial_size = initial_size;
        self
    }

    /// Builds the pool, deriving its initial instances from the template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Instantiate`][crate::Error::Instantiate] if any of the initial instances
    /// cannot be derived from the template.
    pub fn build(self) -> Result<RecyclingPool<T>> {
        let scope = self
            .scope
            .unwrap_or_else(|| Scope::root(DEFAULT_SCOPE_NAME));

        RecyclingPool::new(self.template, scope, self.growth_policy, self.initial_size)
    }
}
