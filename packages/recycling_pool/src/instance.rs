use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::Poolable;

/// The lifecycle state of a pooled [`Instance`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ItemState {
    /// The instance is held by the pool and is inert.
    Idle,

    /// The instance has been handed out and is owned by a caller.
    Active,
}

/// An item that belongs to a [`RecyclingPool`][crate::RecyclingPool].
///
/// The wrapped item is reachable through [`Deref`] and [`DerefMut`]. The lifecycle state is not:
/// only the pool moves an instance between [`ItemState::Idle`] and [`ItemState::Active`], invoking
/// the [`Poolable`] activation hooks as it does so.
///
/// An active instance is owned by value by whoever took it from the pool. Returning it moves it
/// back into the pool, so a caller cannot keep using an instance after returning it and cannot
/// return the same instance twice.
///
/// # Example
///
/// ```rust
/// use recycling_pool::{Handle, ItemState, RecyclingPool};
///
/// let mut pool = RecyclingPool::builder(Handle::template("spark")).build().unwrap();
///
/// let spark = pool.try_get().unwrap();
/// assert_eq!(spark.state(), ItemState::Active);
/// assert_eq!(spark.name(), "spark");
///
/// pool.try_return(spark);
/// ```
pub struct Instance<T> {
    item: T,
    state: ItemState,
}

impl<T: Poolable> Instance<T> {
    /// Wraps a freshly created item, deactivating it.
    pub(crate) fn new_idle(item: T) -> Self {
        let mut instance = Self {
            item,
            state: ItemState::Active,
        };

        instance.deactivate();
        instance
    }

    pub(crate) fn activate(&mut self) {
        self.state = ItemState::Active;
        self.item.on_activate();
    }

    pub(crate) fn deactivate(&mut self) {
        self.state = ItemState::Idle;
        self.item.on_deactivate();
    }
}

impl<T> Instance<T> {
    /// The current lifecycle state of the instance.
    #[must_use]
    pub fn state(&self) -> ItemState {
        self.state
    }

    /// Whether the instance is currently handed out to a caller.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == ItemState::Active
    }
}

impl<T> Deref for Instance<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.item
    }
}

impl<T> DerefMut for Instance<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.item
    }
}

impl<T: fmt::Debug> fmt::Debug for Instance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("item", &self.item)
            .field("state", &self.state)
            .finish()
    }
}
