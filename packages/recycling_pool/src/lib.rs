#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This package provides [`RecyclingPool`], an object pool that recycles instances which are
//! expensive to create instead of repeatedly creating and destroying them.
//!
//! Every instance in the pool is derived from a template item via the [`Poolable`] trait and
//! attached to a logical owner [`Scope`]. Instances are either idle (held by the pool) or active
//! (owned by a caller). The pool is the only party that moves an instance between these states.
//!
//! # Features
//!
//! - **Template-derived instances**: New instances are derived from a template on demand.
//! - **Explicit lifecycle**: Each [`Instance`] carries an [`ItemState`] that only the pool changes.
//! - **Growth policy**: A pool either grows on demand or enforces a hard capacity ceiling equal
//!   to its initial fill size, see [`GrowthPolicy`].
//! - **Ownership-checked returns**: Instances are owned by value while active and moved back into
//!   the pool on return, so the same instance cannot be returned twice.
//! - **Opaque handles**: [`HandlePool`] pools plain [`Handle`] values that carry no behavior of
//!   their own.
//!
//! # Example
//!
//! ```rust
//! use recycling_pool::{GrowthPolicy, Handle, RecyclingPool};
//!
//! let mut pool = RecyclingPool::builder(Handle::template("bullet"))
//!     .growth_policy(GrowthPolicy::Fixed)
//!     .initial_size(2)
//!     .build()
//!     .unwrap();
//!
//! let first = pool.try_get().unwrap();
//! let second = pool.try_get().unwrap();
//!
//! // The pool cannot grow, so the third request is refused.
//! assert!(pool.try_get().is_err());
//!
//! assert!(pool.try_return(first));
//! assert_eq!(pool.idle_count(), 1);
//!
//! // The returned instance is recycled.
//! let third = pool.try_get().unwrap();
//! assert!(third.is_active());
//! # pool.try_return(second);
//! # pool.try_return(third);
//! ```

mod builder;
mod error;
mod growth_policy;
mod handle;
mod instance;
mod pool;
mod poolable;
mod scope;

pub use builder::*;
pub use error::Error;
pub use growth_policy::*;
pub use handle::*;
pub use instance::*;
pub use pool::*;
pub use poolable::*;
pub use scope::*;
