use std::any::type_name;
use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::error::Result;
use crate::{Error, GrowthPolicy, Instance, Poolable, RecyclingPoolBuilder, Scope};

/// An object pool that recycles instances derived from a template.
///
/// The pool holds a queue of idle instances. [`try_get()`][1] hands out the instance that has been
/// idle the longest and [`try_return()`][2] puts an instance at the back of the queue. When the
/// queue is empty, the [growth policy][GrowthPolicy] decides whether a new instance is derived
/// from the template or the request is refused.
///
/// Instances are created when the pool is built and, for growable pools, on demand. They are
/// only dropped when the pool itself is dropped.
///
/// # Ownership
///
/// The pool owns its idle instances. An active instance is owned by the caller that took it, until
/// the caller moves it back into the pool. The pool does not verify where a returned instance came
/// from: an instance taken from another pool of the same item type is accepted and recycled like
/// any other.
///
/// [1]: Self::try_get
/// [2]: Self::try_return
///
/// # Example
///
/// ```rust
/// use recycling_pool::{Handle, RecyclingPool};
///
/// let mut pool = RecyclingPool::builder(Handle::template("wave"))
///     .initial_size(0)
///     .build()
///     .unwrap();
///
/// // The pool is empty but may grow, so the request succeeds.
/// let wave = pool.try_get().unwrap();
/// assert_eq!(pool.created_count(), 1);
///
/// pool.try_return(wave);
/// assert_eq!(pool.idle_count(), 1);
/// ```
///
/// # Thread safety
///
/// The pool is thread-mobile ([`Send`]) if the item type is, but offers no synchronization of its
/// own. Callers that share a pool between threads must guard it with a lock.
pub struct RecyclingPool<T> {
    /// Idle instances, oldest-returned at the front.
    available: VecDeque<Instance<T>>,

    template: T,

    /// Every instance the pool creates is attached to this scope.
    scope: Scope,

    growth_policy: GrowthPolicy,

    /// Number of instances derived from the template over the lifetime of the pool.
    created: usize,
}

impl<T: Poolable> RecyclingPool<T> {
    /// Creates a pool filled with `initial_size` idle instances derived from `template` and
    /// attached to `scope`.
    ///
    /// Use [`builder()`][Self::builder] to rely on defaults for some of the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Instantiate`] if any of the initial instances cannot be derived from the
    /// template.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{GrowthPolicy, Handle, RecyclingPool, Scope};
    ///
    /// let pool = RecyclingPool::new(
    ///     Handle::template("tile"),
    ///     Scope::root("Board"),
    ///     GrowthPolicy::Fixed,
    ///     64,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(pool.idle_count(), 64);
    /// ```
    pub fn new(
        template: T,
        scope: Scope,
        growth_policy: GrowthPolicy,
        initial_size: usize,
    ) -> Result<Self> {
        let mut pool = Self {
            available: VecDeque::with_capacity(initial_size),
            template,
            scope,
            growth_policy,
            created: 0,
        };

        for _ in 0..initial_size {
            let instance = pool.instantiate()?;
            pool.available.push_back(instance);
        }

        debug!(
            item_type = type_name::<T>(),
            scope = %pool.scope,
            ?growth_policy,
            initial_size,
            "filled pool"
        );

        Ok(pool)
    }

    /// Returns a builder for creating a pool with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{GrowthPolicy, Handle, RecyclingPool};
    ///
    /// let pool = RecyclingPool::builder(Handle::template("tile"))
    ///     .growth_policy(GrowthPolicy::Fixed)
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder(template: T) -> RecyclingPoolBuilder<T> {
        RecyclingPoolBuilder::new(template)
    }

    /// Takes an instance from the pool and activates it.
    ///
    /// If no instance is idle and the pool may grow, a new instance is derived from the template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] if no instance is idle and the pool may not grow. The pool is
    /// left unchanged and the caller may retry once an instance has been returned.
    ///
    /// Returns [`Error::Instantiate`] if the pool tried to grow but the template failed to
    /// produce a new instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{Error, GrowthPolicy, Handle, RecyclingPool};
    ///
    /// let mut pool = RecyclingPool::builder(Handle::template("slot"))
    ///     .growth_policy(GrowthPolicy::Fixed)
    ///     .initial_size(1)
    ///     .build()
    ///     .unwrap();
    ///
    /// let slot = pool.try_get().unwrap();
    /// assert!(matches!(pool.try_get(), Err(Error::Exhausted { .. })));
    /// # pool.try_return(slot);
    /// ```
    pub fn try_get(&mut self) -> Result<Instance<T>> {
        let mut instance = match self.available.pop_front() {
            Some(instance) => instance,
            None => match self.growth_policy {
                GrowthPolicy::Grow => {
                    let instance = self.instantiate()?;

                    debug!(
                        item_type = type_name::<T>(),
                        scope = %self.scope,
                        created = self.created,
                        "grew pool"
                    );

                    instance
                }
                GrowthPolicy::Fixed => {
                    trace!(
                        item_type = type_name::<T>(),
                        scope = %self.scope,
                        capacity = self.created,
                        "pool exhausted"
                    );

                    return Err(Error::Exhausted {
                        item_type: type_name::<T>(),
                        capacity: self.created,
                    });
                }
            },
        };

        instance.activate();

        trace!(
            item_type = type_name::<T>(),
            idle = self.available.len(),
            "instance taken"
        );

        Ok(instance)
    }

    /// Deactivates an instance and puts it back into the pool.
    ///
    /// Returns `false` without doing anything if `instance` is `None`. Otherwise returns `true`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{Handle, Instance, RecyclingPool};
    ///
    /// let mut pool = RecyclingPool::builder(Handle::template("note")).build().unwrap();
    ///
    /// let note = pool.try_get().unwrap();
    /// assert!(pool.try_return(note));
    ///
    /// let nothing: Option<Instance<Handle>> = None;
    /// assert!(!pool.try_return(nothing));
    /// ```
    pub fn try_return(&mut self, instance: impl Into<Option<Instance<T>>>) -> bool {
        let Some(mut instance) = instance.into() else {
            return false;
        };

        instance.deactivate();
        self.available.push_back(instance);

        trace!(
            item_type = type_name::<T>(),
            idle = self.available.len(),
            "instance returned"
        );

        true
    }

    fn instantiate(&mut self) -> Result<Instance<T>> {
        let item = self
            .template
            .instantiate(&self.scope)
            .map_err(|source| Error::Instantiate {
                item_type: type_name::<T>(),
                scope: self.scope.clone(),
                source,
            })?;

        self.created = self
            .created
            .checked_add(1)
            .expect("instance count cannot realistically exceed usize::MAX");

        Ok(Instance::new_idle(item))
    }
}

impl<T> RecyclingPool<T> {
    /// Number of instances currently idle in the pool.
    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.available.len()
    }

    /// Number of instances the pool has derived from its template since it was created.
    ///
    /// For a pool with [`GrowthPolicy::Fixed`] this is also its capacity.
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Number of instances the pool has created that are not currently idle in it.
    ///
    /// Returning instances that came from elsewhere can make the idle count exceed the created
    /// count, in which case this reports zero.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.created.saturating_sub(self.available.len())
    }

    /// The growth policy the pool was created with.
    #[must_use]
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth_policy
    }

    /// Whether the pool may create instances beyond its initial fill.
    #[must_use]
    pub fn can_grow(&self) -> bool {
        self.growth_policy.can_grow()
    }

    /// The scope every instance created by this pool is attached to.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The template new instances are derived from.
    #[must_use]
    pub fn template(&self) -> &T {
        &self.template
    }
}

impl<T> fmt::Debug for RecyclingPool<T> {
    #[cfg_attr(test, mutants::skip)] // Debug output is not part of any contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("scope", &self.scope)
            .field("growth_policy", &self.growth_policy)
            .field("idle", &self.available.len())
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}
