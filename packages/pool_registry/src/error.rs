use thiserror::Error;

/// Errors that can occur when working with pools through a [`PoolRegistry`][crate::PoolRegistry].
///
/// Accessing a category's pool with the wrong item type is not represented here. That is a
/// programming error and panics instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// No pool has been created for the category yet. Register it with
    /// [`create_or_get()`][crate::PoolRegistry::create_or_get] first.
    #[error("no pool is registered for category {category}")]
    UnregisteredCategory {
        /// `Debug` representation of the category that was looked up.
        category: String,
    },

    /// The category's pool could not satisfy the request.
    #[error(transparent)]
    Pool(#[from] recycling_pool::Error),
}

/// A specialized `Result` type for registry operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
