use thiserror::Error;

use crate::{InstantiateError, Scope};

/// Errors that can occur when taking instances from a [`RecyclingPool`][crate::RecyclingPool].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The pool has no idle instance and its growth policy forbids creating another one.
    ///
    /// This is an expected condition for fixed-capacity pools. The caller may retry after an
    /// instance has been returned or skip the request entirely.
    #[error("pool of {item_type} is exhausted: all {capacity} instances are in use")]
    Exhausted {
        /// Name of the pooled item type.
        item_type: &'static str,

        /// Number of instances the pool has created, all of which are currently active.
        capacity: usize,
    },

    /// Deriving a new instance from the template failed.
    #[error("failed to instantiate {item_type} in scope '{scope}'")]
    Instantiate {
        /// Name of the pooled item type.
        item_type: &'static str,

        /// The scope the new instance would have been attached to.
        scope: Scope,

        /// The error reported by [`Poolable::instantiate()`][crate::Poolable::instantiate].
        #[source]
        source: InstantiateError,
    },
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
