use std::any::type_name;
use std::collections::hash_map::Entry;
use std::fmt;

use foldhash::{HashMap, HashMapExt};
use recycling_pool::{GrowthPolicy, Instance, Poolable, RecyclingPool, Scope};
use tracing::{debug, trace};

use crate::erased::{ErasedPool, downcast_mut, downcast_ref};
use crate::error::Result;
use crate::{Category, Error, PoolStats};

/// Name of the scope that owns the per-category scopes of a registry created via
/// [`PoolRegistry::new()`].
pub const ROOT_SCOPE_NAME: &str = "PoolManager";

/// A directory that associates each category with at most one [`RecyclingPool`].
///
/// Pools are created lazily by [`create_or_get()`][1] and live as long as the registry. Once a
/// category has a pool, that pool is never replaced and its item type is fixed. Every typed
/// operation names the item type it expects and panics if the category's pool was created for a
/// different one.
///
/// Each category's pool attaches its instances to its own child scope under the registry's root
/// scope, named by [`Category::scope_name()`].
///
/// The registry is an ordinary value. Create one at startup and pass it to whatever needs pooled
/// instances.
///
/// [1]: Self::create_or_get
///
/// # Example
///
/// ```rust
/// use pool_registry::{Category, Error, PoolRegistry};
/// use recycling_pool::{GrowthPolicy, Handle};
///
/// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
/// enum Pools {
///     Bubble,
///     Splash,
/// }
///
/// impl Category for Pools {}
///
/// let mut registry = PoolRegistry::new();
///
/// let pool = registry
///     .create_or_get(Pools::Bubble, Handle::template("bubble"), GrowthPolicy::Grow, 4)
///     .unwrap();
/// assert_eq!(pool.scope().path(), "PoolManager/Pool_Bubble");
///
/// // Nothing has been registered for this category.
/// assert!(matches!(
///     registry.try_get_item::<Handle>(Pools::Splash),
///     Err(Error::UnregisteredCategory { .. })
/// ));
/// ```
///
/// # Thread safety
///
/// The registry is designed for use from a single control loop and is neither [`Send`] nor
/// [`Sync`].
pub struct PoolRegistry<C> {
    root: Scope,

    pools: HashMap<C, Box<dyn ErasedPool>>,
}

impl<C: Category> PoolRegistry<C> {
    /// Creates an empty registry whose root scope is named [`ROOT_SCOPE_NAME`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_root_scope(Scope::root(ROOT_SCOPE_NAME))
    }

    /// Creates an empty registry that nests the per-category scopes under `root`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pool_registry::{Category, PoolRegistry};
    /// use recycling_pool::Scope;
    ///
    /// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    /// enum Pools {
    ///     Enemy,
    /// }
    ///
    /// impl Category for Pools {}
    ///
    /// let registry = PoolRegistry::<Pools>::with_root_scope(Scope::root("Level1"));
    /// assert_eq!(registry.root_scope().path(), "Level1");
    /// ```
    #[must_use]
    pub fn with_root_scope(root: Scope) -> Self {
        Self {
            root,
            pools: HashMap::new(),
        }
    }

    /// The scope that owns the scopes of every category's pool.
    #[must_use]
    pub fn root_scope(&self) -> &Scope {
        &self.root
    }

    /// Returns the pool for `category`, creating it first if the category has none.
    ///
    /// If the category already has a pool, it is returned unchanged and the remaining arguments
    /// are ignored. Otherwise a new pool is filled with `initial_size` instances derived from
    /// `template` and attached to a new scope under the [root scope][Self::root_scope].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pool`] if the new pool's initial instances cannot be derived from the
    /// template. The category stays unregistered in that case.
    ///
    /// # Panics
    ///
    /// Panics if the category already has a pool with an item type other than `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pool_registry::{Category, PoolRegistry};
    /// use recycling_pool::{GrowthPolicy, Handle};
    ///
    /// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    /// enum Pools {
    ///     Coin,
    /// }
    ///
    /// impl Category for Pools {}
    ///
    /// let mut registry = PoolRegistry::new();
    ///
    /// registry
    ///     .create_or_get(Pools::Coin, Handle::template("coin"), GrowthPolicy::Fixed, 3)
    ///     .unwrap();
    ///
    /// // The second call finds the existing pool and ignores its arguments.
    /// let pool = registry
    ///     .create_or_get(Pools::Coin, Handle::template("other"), GrowthPolicy::Grow, 99)
    ///     .unwrap();
    ///
    /// assert_eq!(pool.idle_count(), 3);
    /// assert_eq!(pool.template().name(), "coin");
    /// ```
    pub fn create_or_get<T>(
        &mut self,
        category: C,
        template: T,
        growth_policy: GrowthPolicy,
        initial_size: usize,
    ) -> Result<&mut RecyclingPool<T>>
    where
        T: Poolable + 'static,
    {
        match self.pools.entry(category) {
            Entry::Occupied(entry) => Ok(downcast_mut(entry.into_mut().as_mut(), category)),
            Entry::Vacant(entry) => {
                let scope = self.root.child(&category.scope_name());

                let pool = RecyclingPool::builder(template)
                    .scope(scope)
                    .growth_policy(growth_policy)
                    .initial_size(initial_size)
                    .build()?;

                debug!(
                    ?category,
                    item_type = type_name::<T>(),
                    scope = %pool.scope(),
                    "registered pool"
                );

                Ok(downcast_mut(entry.insert(Box::new(pool)).as_mut(), category))
            }
        }
    }

    /// Returns the pool registered for `category`, or `None` if the category has no pool.
    ///
    /// # Panics
    ///
    /// Panics if the category's pool was created with an item type other than `T`.
    pub fn try_get_pool<T>(&mut self, category: C) -> Option<&mut RecyclingPool<T>>
    where
        T: Poolable + 'static,
    {
        self.pools
            .get_mut(&category)
            .map(|pool| downcast_mut(pool.as_mut(), category))
    }

    /// Shared-reference counterpart of [`try_get_pool()`][Self::try_get_pool].
    ///
    /// # Panics
    ///
    /// Panics if the category's pool was created with an item type other than `T`.
    #[must_use]
    pub fn pool<T>(&self, category: C) -> Option<&RecyclingPool<T>>
    where
        T: Poolable + 'static,
    {
        self.pools
            .get(&category)
            .map(|pool| downcast_ref(pool.as_ref(), category))
    }

    /// Takes an instance from the pool registered for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnregisteredCategory`] if the category has no pool, and [`Error::Pool`]
    /// if the pool is exhausted or fails to grow.
    ///
    /// # Panics
    ///
    /// Panics if the category's pool was created with an item type other than `T`.
    pub fn try_get_item<T>(&mut self, category: C) -> Result<Instance<T>>
    where
        T: Poolable + 'static,
    {
        let Some(pool) = self.try_get_pool::<T>(category) else {
            trace!(?category, "instance requested from unregistered category");

            return Err(Error::UnregisteredCategory {
                category: format!("{category:?}"),
            });
        };

        Ok(pool.try_get()?)
    }

    /// Returns an instance to the pool registered for `category`.
    ///
    /// Returns `false` without doing anything if the category has no pool or `instance` is
    /// `None`. Otherwise the instance is deactivated, put back into the pool and `true` is
    /// returned.
    ///
    /// An instance returned to an unregistered category is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the category's pool was created with an item type other than `T`.
    pub fn try_return_item<T>(
        &mut self,
        category: C,
        instance: impl Into<Option<Instance<T>>>,
    ) -> bool
    where
        T: Poolable + 'static,
    {
        match self.try_get_pool::<T>(category) {
            Some(pool) => pool.try_return(instance),
            None => {
                trace!(?category, "instance returned to unregistered category");
                false
            }
        }
    }

    /// Whether a pool has been created for `category`.
    #[must_use]
    pub fn contains(&self, category: C) -> bool {
        self.pools.contains_key(&category)
    }

    /// Number of categories that have a pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether no category has a pool yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// The categories that have a pool, in no particular order.
    pub fn categories(&self) -> impl Iterator<Item = C> + '_ {
        self.pools.keys().copied()
    }

    /// A snapshot of the state of the pool registered for `category`, without requiring its
    /// item type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pool_registry::{Category, PoolRegistry};
    /// use recycling_pool::{GrowthPolicy, Handle};
    ///
    /// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    /// enum Pools {
    ///     Coin,
    /// }
    ///
    /// impl Category for Pools {}
    ///
    /// let mut registry = PoolRegistry::new();
    /// assert!(registry.stats(Pools::Coin).is_none());
    ///
    /// registry
    ///     .create_or_get(Pools::Coin, Handle::template("coin"), GrowthPolicy::Fixed, 3)
    ///     .unwrap();
    ///
    /// let stats = registry.stats(Pools::Coin).unwrap();
    /// assert_eq!(stats.idle_count(), 3);
    /// assert_eq!(stats.growth_policy(), GrowthPolicy::Fixed);
    /// ```
    #[must_use]
    pub fn stats(&self, category: C) -> Option<PoolStats> {
        self.pools.get(&category).map(|pool| pool.stats())
    }
}

impl<C: Category> Default for PoolRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Category> fmt::Debug for PoolRegistry<C> {
    #[cfg_attr(test, mutants::skip)] // Debug output is not part of any contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pools: HashMap<C, &'static str> = self
            .pools
            .iter()
            .map(|(category, pool)| (*category, pool.item_type_name()))
            .collect();

        f.debug_struct(type_name::<Self>())
            .field("root", &self.root)
            .field("pools", &pools)
            .finish()
    }
}
