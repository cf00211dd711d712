use std::fmt;

/// A named logical owner that pooled instances are attached to when they are created.
///
/// Scopes form a tree addressed by `/`-separated paths, e.g. `PoolManager/Pool_Bubble`. They exist
/// purely to group instances for lifecycle and visibility purposes and carry no pooling behavior.
///
/// # Example
///
/// ```rust
/// use recycling_pool::Scope;
///
/// let root = Scope::root("PoolManager");
/// let bubbles = root.child("Pool_Bubble");
///
/// assert_eq!(bubbles.path(), "PoolManager/Pool_Bubble");
/// assert_eq!(bubbles.name(), "Pool_Bubble");
/// assert_eq!(bubbles.parent(), Some(root.clone()));
/// assert!(root.contains(&bubbles));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Scope {
    path: String,
}

impl Scope {
    /// Separates the names of nested scopes in a scope path.
    pub const SEPARATOR: char = '/';

    /// Creates a top-level scope with the given name.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty or contains [`Scope::SEPARATOR`].
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        let name = name.into();
        assert_valid_name(&name);

        Self { path: name }
    }

    /// Creates a scope nested directly under this one.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty or contains [`Scope::SEPARATOR`].
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        assert_valid_name(name);

        Self {
            path: format!("{}{}{name}", self.path, Self::SEPARATOR),
        }
    }

    /// The name of this scope, without the names of its ancestors.
    #[must_use]
    pub fn name(&self) -> &str {
        self.path
            .rsplit_once(Self::SEPARATOR)
            .map_or(self.path.as_str(), |(_, name)| name)
    }

    /// The full path of this scope, starting from its root.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The scope this one is nested under, or `None` for a root scope.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.path
            .rsplit_once(Self::SEPARATOR)
            .map(|(parent, _)| Self {
                path: parent.to_owned(),
            })
    }

    /// Whether `other` is this scope or is nested anywhere below it.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other
            .path
            .strip_prefix(self.path.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(Self::SEPARATOR))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

fn assert_valid_name(name: &str) {
    assert!(!name.is_empty(), "scope name must not be empty");
    assert!(
        !name.contains(Scope::SEPARATOR),
        "scope name '{name}' must not contain '{}'",
        Scope::SEPARATOR
    );
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent() {
        let root = Scope::root("PoolManager");

        assert_eq!(root.name(), "PoolManager");
        assert_eq!(root.path(), "PoolManager");
        assert_eq!(root.parent(), None);
    }

    #[test]
    fn nested_paths() {
        let leaf = Scope::root("a").child("b").child("c");

        assert_eq!(leaf.path(), "a/b/c");
        assert_eq!(leaf.name(), "c");
        assert_eq!(leaf.to_string(), "a/b/c");
        assert_eq!(leaf.parent().map(|p| p.path().to_owned()), Some("a/b".to_owned()));
    }

    #[test]
    fn contains_respects_name_boundaries() {
        let root = Scope::root("pool");
        let child = root.child("x");
        let lookalike = Scope::root("pools");

        assert!(root.contains(&root));
        assert!(root.contains(&child));
        assert!(!child.contains(&root));
        assert!(!root.contains(&lookalike));
    }

    #[test]
    #[should_panic]
    fn empty_name_panics() {
        let _scope = Scope::root("");
    }

    #[test]
    #[should_panic]
    fn separator_in_child_name_panics() {
        let _scope = Scope::root("a").child("b/c");
    }
}
