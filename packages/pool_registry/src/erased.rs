use std::any::{Any, type_name};

use recycling_pool::{Poolable, RecyclingPool};

use crate::{Category, PoolStats};

/// The type-erased view of a [`RecyclingPool`] that the registry stores.
///
/// Everything here works without knowing the item type. Typed access goes through
/// [`downcast_mut()`], which recovers the concrete pool.
pub(crate) trait ErasedPool {
    fn item_type_name(&self) -> &'static str;

    fn stats(&self) -> PoolStats;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Poolable + 'static> ErasedPool for RecyclingPool<T> {
    fn item_type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn stats(&self) -> PoolStats {
        PoolStats::new(
            type_name::<T>(),
            self.idle_count(),
            self.created_count(),
            self.growth_policy(),
            self.scope().clone(),
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Recovers the typed pool stored for `category`.
///
/// # Panics
///
/// Panics if the stored pool holds items of a type other than `T`.
pub(crate) fn downcast_mut<C, T>(pool: &mut dyn ErasedPool, category: C) -> &mut RecyclingPool<T>
where
    C: Category,
    T: Poolable + 'static,
{
    let stored = pool.item_type_name();

    match pool.as_any_mut().downcast_mut::<RecyclingPool<T>>() {
        Some(pool) => pool,
        None => type_mismatch::<C, T>(category, stored),
    }
}

/// Shared-reference counterpart of [`downcast_mut()`].
///
/// # Panics
///
/// Panics if the stored pool holds items of a type other than `T`.
pub(crate) fn downcast_ref<C, T>(pool: &dyn ErasedPool, category: C) -> &RecyclingPool<T>
where
    C: Category,
    T: Poolable + 'static,
{
    match pool.as_any().downcast_ref::<RecyclingPool<T>>() {
        Some(typed) => typed,
        None => type_mismatch::<C, T>(category, pool.item_type_name()),
    }
}

#[cold]
fn type_mismatch<C: Category, T>(category: C, stored: &str) -> ! {
    panic!(
        "pool for category {category:?} holds items of type {stored} but was accessed as a pool of {}",
        type_name::<T>()
    )
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use recycling_pool::{Handle, InstantiateError, Scope};

    use super::*;

    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    enum Slot {
        Only,
    }

    impl Category for Slot {}

    fn erased() -> Box<dyn ErasedPool> {
        Box::new(
            RecyclingPool::builder(Handle::template("erased"))
                .initial_size(3)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn reports_item_type_and_stats() {
        let pool = erased();

        assert_eq!(pool.item_type_name(), type_name::<Handle>());

        let stats = pool.stats();
        assert_eq!(stats.idle_count(), 3);
        assert_eq!(stats.created_count(), 3);
    }

    #[test]
    fn downcast_to_stored_type() {
        let mut pool = erased();

        let typed = downcast_mut::<_, Handle>(pool.as_mut(), Slot::Only);
        let handle = typed.try_get().unwrap();
        typed.try_return(handle);

        assert_eq!(downcast_ref::<_, Handle>(pool.as_ref(), Slot::Only).idle_count(), 3);
    }

    #[derive(Debug)]
    struct Other;

    impl Poolable for Other {
        fn instantiate(&self, _scope: &Scope) -> Result<Self, InstantiateError> {
            Ok(Self)
        }
    }

    #[test]
    #[should_panic(expected = "was accessed as a pool of")]
    fn downcast_to_other_type_panics() {
        let mut pool = erased();

        let _typed = downcast_mut::<_, Other>(pool.as_mut(), Slot::Only);
    }
}
