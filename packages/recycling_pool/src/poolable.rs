use std::error::Error as StdError;

use crate::Scope;

/// The error type returned by [`Poolable::instantiate()`] when a new instance cannot be derived.
pub type InstantiateError = Box<dyn StdError + Send + Sync + 'static>;

/// An item type that can be stored in a [`RecyclingPool`][crate::RecyclingPool].
///
/// The pool keeps one item of this type as a template and derives every instance it hands out
/// from that template. Instances are created when the pool is first filled and whenever a growable
/// pool runs out of idle instances. They are never destroyed individually; they live as long as
/// the pool does.
///
/// The activation hooks let an item reflect its lifecycle state, for example by showing or hiding
/// itself. The pool invokes them when it moves an instance between the idle and active states.
///
/// # Example
///
/// ```rust
/// use recycling_pool::{InstantiateError, Poolable, Scope};
///
/// struct Sprite {
///     texture: String,
///     owner: Option<Scope>,
///     visible: bool,
/// }
///
/// impl Poolable for Sprite {
///     fn instantiate(&self, scope: &Scope) -> Result<Self, InstantiateError> {
///         Ok(Self {
///             texture: self.texture.clone(),
///             owner: Some(scope.clone()),
///             visible: self.visible,
///         })
///     }
///
///     fn on_activate(&mut self) {
///         self.visible = true;
///     }
///
///     fn on_deactivate(&mut self) {
///         self.visible = false;
///     }
/// }
/// ```
pub trait Poolable: Sized {
    /// Derives a new instance from `self`, which acts as the template, and attaches it to `scope`.
    ///
    /// # Errors
    ///
    /// Returns an error if the new instance cannot be created. The pool propagates this error to
    /// whoever requested the instance.
    fn instantiate(&self, scope: &Scope) -> Result<Self, InstantiateError>;

    /// Called when the instance is handed out to a caller.
    fn on_activate(&mut self) {}

    /// Called when the instance is created and whenever it is returned to the pool.
    fn on_deactivate(&mut self) {}
}
