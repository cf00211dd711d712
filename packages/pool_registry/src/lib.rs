#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This package provides [`PoolRegistry`], a directory that maps a small set of named pool
//! categories to lazily created [`RecyclingPool`] instances, at most one per category.
//!
//! Each category's pool is created on first request and reused thereafter. The registry stores
//! pools of different item types side by side and recovers the strongly-typed pool at the call
//! site through a checked downcast. Asking for a category's pool with an item type other than the
//! one it was created with is a programming error and panics.
//!
//! Categories are a closed enumeration owned by the application, marked with the [`Category`]
//! trait.
//!
//! # Example
//!
//! ```rust
//! use pool_registry::{Category, PoolRegistry};
//! use recycling_pool::{GrowthPolicy, Handle};
//!
//! #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
//! enum Pools {
//!     Bubble,
//! }
//!
//! impl Category for Pools {}
//!
//! let mut registry = PoolRegistry::new();
//!
//! registry
//!     .create_or_get(Pools::Bubble, Handle::template("bubble"), GrowthPolicy::Fixed, 2)
//!     .unwrap();
//!
//! let bubble = registry.try_get_item::<Handle>(Pools::Bubble).unwrap();
//! assert_eq!(bubble.name(), "bubble");
//!
//! assert!(registry.try_return_item(Pools::Bubble, bubble));
//! ```
//!
//! [`RecyclingPool`]: recycling_pool::RecyclingPool

mod category;
mod erased;
mod error;
mod handles;
mod registry;
mod stats;

pub use category::*;
pub use error::Error;
pub use registry::*;
pub use stats::*;
