/// Determines what a pool does when a caller asks for an instance and none is idle.
///
/// By default, the pool grows.
///
/// # Examples
///
/// ```
/// use recycling_pool::{GrowthPolicy, Handle, RecyclingPool};
///
/// // The growth policy is set at pool creation time.
/// let pool = RecyclingPool::builder(Handle::template("arena_slot"))
///     .growth_policy(GrowthPolicy::Fixed)
///     .initial_size(8)
///     .build()
///     .unwrap();
///
/// assert!(!pool.can_grow());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GrowthPolicy {
    /// The pool derives a new instance from its template whenever it runs out of idle ones.
    /// This is the default.
    ///
    /// Callers are never refused, at the cost of unbounded peak instance count.
    #[default]
    Grow,

    /// The pool never creates instances beyond its initial fill. Requests made while every
    /// instance is active fail with [`Error::Exhausted`][crate::Error::Exhausted].
    ///
    /// This models a hard-capacity resource such as a fixed arena.
    Fixed,
}

impl GrowthPolicy {
    /// Whether this policy permits creating instances beyond the initial fill.
    #[must_use]
    pub fn can_grow(self) -> bool {
        matches!(self, Self::Grow)
    }
}

impl From<bool> for GrowthPolicy {
    /// Converts a "can grow" flag into the equivalent policy.
    fn from(can_grow: bool) -> Self {
        if can_grow { Self::Grow } else { Self::Fixed }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_grows() {
        assert_eq!(GrowthPolicy::default(), GrowthPolicy::Grow);
        assert!(GrowthPolicy::default().can_grow());
    }

    #[test]
    fn from_flag() {
        assert_eq!(GrowthPolicy::from(true), GrowthPolicy::Grow);
        assert_eq!(GrowthPolicy::from(false), GrowthPolicy::Fixed);
        assert!(!GrowthPolicy::Fixed.can_grow());
    }
}
