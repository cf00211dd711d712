use recycling_pool::{GrowthPolicy, Scope};

/// A snapshot of a registered pool's state, available without knowing its item type.
///
/// Obtained from [`PoolRegistry::stats()`][crate::PoolRegistry::stats].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolStats {
    item_type: &'static str,
    idle_count: usize,
    created_count: usize,
    growth_policy: GrowthPolicy,
    scope: Scope,
}

impl PoolStats {
    pub(crate) fn new(
        item_type: &'static str,
        idle_count: usize,
        created_count: usize,
        growth_policy: GrowthPolicy,
        scope: Scope,
    ) -> Self {
        Self {
            item_type,
            idle_count,
            created_count,
            growth_policy,
            scope,
        }
    }

    /// Name of the item type the pool was created with.
    #[must_use]
    pub fn item_type(&self) -> &'static str {
        self.item_type
    }

    /// Number of instances idle in the pool.
    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.idle_count
    }

    /// Number of instances the pool has derived from its template.
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.created_count
    }

    /// The growth policy of the pool.
    #[must_use]
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth_policy
    }

    /// The scope the pool attaches its instances to.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}
