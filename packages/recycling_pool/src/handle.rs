use std::sync::atomic::{AtomicU64, Ordering};

use crate::{InstantiateError, Poolable, RecyclingPool, Scope};

/// Source of process-unique handle identifiers. Zero is reserved for templates.
static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// A pool of plain [`Handle`] values.
///
/// This is the general-purpose [`RecyclingPool`] instantiated at the handle type, for callers that
/// need a recyclable engine-level object without richer behavior of its own.
pub type HandlePool = RecyclingPool<Handle>;

/// An opaque engine-level object that carries only its identity and placement.
///
/// Use [`Handle::template()`] to create the prototype a [`HandlePool`] derives its instances from.
/// Every derived handle receives a new process-unique [`id()`][Self::id], keeps the template's
/// name and records the scope it was attached to.
///
/// # Example
///
/// ```rust
/// use recycling_pool::{Handle, HandlePool, Scope};
///
/// let scope = Scope::root("Effects");
/// let mut pool: HandlePool = HandlePool::builder(Handle::template("smoke"))
///     .scope(scope.clone())
///     .build()
///     .unwrap();
///
/// let smoke = pool.try_get().unwrap();
/// assert_eq!(smoke.name(), "smoke");
/// assert_eq!(smoke.scope(), Some(&scope));
/// assert!(!smoke.is_template());
/// # pool.try_return(smoke);
/// ```
#[derive(Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    id: u64,
    name: String,
    scope: Option<Scope>,
}

impl Handle {
    /// Creates a prototype handle from which pooled handles are derived.
    #[must_use]
    pub fn template(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            scope: None,
        }
    }

    /// The process-unique identifier of this handle. Templates have the identifier zero.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The name shared by the template and every handle derived from it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scope the handle is attached to. Templates are not attached to any scope.
    #[must_use]
    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }

    /// Whether this handle is a template rather than a pooled instance.
    #[must_use]
    pub fn is_template(&self) -> bool {
        self.id == 0
    }
}

impl Poolable for Handle {
    fn instantiate(&self, scope: &Scope) -> Result<Self, InstantiateError> {
        // Relaxed is enough, we only need uniqueness and not ordering with other memory.
        let id = NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed);

        Ok(Self {
            id,
            name: self.name.clone(),
            scope: Some(scope.clone()),
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Handle: Send, Sync, Debug);
    assert_impl_all!(HandlePool: Send);

    #[test]
    fn template_is_detached() {
        let template = Handle::template("coin");

        assert!(template.is_template());
        assert_eq!(template.id(), 0);
        assert_eq!(template.name(), "coin");
        assert_eq!(template.scope(), None);
    }

    #[test]
    fn instantiate_issues_unique_ids() {
        let template = Handle::template("coin");
        let scope = Scope::root("Loot");

        let a = template.instantiate(&scope).unwrap();
        let b = template.instantiate(&scope).unwrap();

        assert_ne!(a.id(), b.id());
        assert!(!a.is_template());
        assert_eq!(a.name(), "coin");
        assert_eq!(a.scope(), Some(&scope));
    }
}
