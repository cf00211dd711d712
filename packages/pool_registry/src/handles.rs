//! Handle-typed counterparts of the generic registry operations, for callers that pool plain
//! [`Handle`] values and do not want to spell out the item type.

use recycling_pool::{GrowthPolicy, Handle, HandlePool, Instance};

use crate::error::Result;
use crate::{Category, PoolRegistry};

impl<C: Category> PoolRegistry<C> {
    /// Returns the handle pool for `category`, creating it first if the category has none.
    ///
    /// Equivalent to [`create_or_get()`][Self::create_or_get] with a [`Handle`] template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pool`][crate::Error::Pool] if the new pool cannot be filled.
    ///
    /// # Panics
    ///
    /// Panics if the category already has a pool of items other than [`Handle`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use pool_registry::{Category, PoolRegistry};
    /// use recycling_pool::{GrowthPolicy, Handle};
    ///
    /// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    /// enum Pools {
    ///     Marker,
    /// }
    ///
    /// impl Category for Pools {}
    ///
    /// let mut registry = PoolRegistry::new();
    /// registry
    ///     .create_or_get_handle_pool(Pools::Marker, Handle::template("marker"), GrowthPolicy::Grow, 1)
    ///     .unwrap();
    ///
    /// let marker = registry.try_get_handle(Pools::Marker).unwrap();
    /// assert!(registry.try_return_handle(Pools::Marker, marker));
    /// ```
    pub fn create_or_get_handle_pool(
        &mut self,
        category: C,
        template: Handle,
        growth_policy: GrowthPolicy,
        initial_size: usize,
    ) -> Result<&mut HandlePool> {
        self.create_or_get(category, template, growth_policy, initial_size)
    }

    /// Returns the handle pool registered for `category`, or `None` if the category has no pool.
    ///
    /// # Panics
    ///
    /// Panics if the category's pool holds items other than [`Handle`].
    pub fn try_get_handle_pool(&mut self, category: C) -> Option<&mut HandlePool> {
        self.try_get_pool(category)
    }

    /// Takes a handle from the pool registered for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnregisteredCategory`][crate::Error::UnregisteredCategory] if the category
    /// has no pool, and [`Error::Pool`][crate::Error::Pool] if the pool is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the category's pool holds items other than [`Handle`].
    pub fn try_get_handle(&mut self, category: C) -> Result<Instance<Handle>> {
        self.try_get_item(category)
    }

    /// Returns a handle to the pool registered for `category`.
    ///
    /// Returns `false` without doing anything if the category has no pool or `handle` is `None`.
    ///
    /// # Panics
    ///
    /// Panics if the category's pool holds items other than [`Handle`].
    pub fn try_return_handle(
        &mut self,
        category: C,
        handle: impl Into<Option<Instance<Handle>>>,
    ) -> bool {
        self.try_return_item(category, handle)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    enum Pools {
        Marker,
        Unused,
    }

    impl Category for Pools {}

    #[test]
    fn handle_surface_shares_generic_storage() {
        let mut registry = PoolRegistry::new();

        registry
            .create_or_get_handle_pool(Pools::Marker, Handle::template("marker"), GrowthPolicy::Fixed, 1)
            .unwrap();

        // The same pool is reachable through the generic surface.
        assert_eq!(
            registry.pool::<Handle>(Pools::Marker).map(HandlePool::idle_count),
            Some(1)
        );

        let marker = registry.try_get_handle(Pools::Marker).unwrap();
        assert_eq!(marker.name(), "marker");
        assert_eq!(
            marker.scope().map(|scope| scope.path().to_owned()),
            Some("PoolManager/Pool_Marker".to_owned())
        );

        assert!(matches!(
            registry.try_get_handle(Pools::Marker),
            Err(Error::Pool(_))
        ));

        assert!(registry.try_return_handle(Pools::Marker, marker));
        assert_eq!(registry.try_get_handle_pool(Pools::Marker).unwrap().idle_count(), 1);
    }

    #[test]
    fn handle_surface_on_unregistered_category() {
        let mut registry = PoolRegistry::<Pools>::new();

        assert!(registry.try_get_handle_pool(Pools::Unused).is_none());
        assert!(matches!(
            registry.try_get_handle(Pools::Unused),
            Err(Error::UnregisteredCategory { .. })
        ));
        assert!(!registry.try_return_handle(Pools::Unused, None));
    }
}
