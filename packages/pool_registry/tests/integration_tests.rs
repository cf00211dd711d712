//! Integration tests for the `pool_registry` package.
//!
//! These tests drive the registry the way gameplay code does: register a category once, then take
//! and return instances through the category alone.

use std::cell::Cell;
use std::rc::Rc;

use pool_registry::{Category, Error, PoolRegistry};
use recycling_pool::{GrowthPolicy, Handle, InstantiateError, Poolable, RecyclingPool, Scope};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum PoolNames {
    Foo,
    Bar,
    Bubble,
    Popped,
}

impl Category for PoolNames {}

/// A renderable bubble. Visibility follows the lifecycle state of its pooled instance.
#[derive(Debug)]
struct Bubble {
    serial: u32,
    radius: f32,
    visible: bool,
    owner: Option<Scope>,
    serials: Rc<Cell<u32>>,
}

impl Bubble {
    fn template(radius: f32) -> Self {
        Self {
            serial: 0,
            radius,
            visible: true,
            owner: None,
            serials: Rc::new(Cell::new(0)),
        }
    }
}

impl Poolable for Bubble {
    fn instantiate(&self, scope: &Scope) -> Result<Self, InstantiateError> {
        let serial = self.serials.get() + 1;
        self.serials.set(serial);

        Ok(Self {
            serial,
            radius: self.radius,
            visible: self.visible,
            owner: Some(scope.clone()),
            serials: Rc::clone(&self.serials),
        })
    }

    fn on_activate(&mut self) {
        self.visible = true;
    }

    fn on_deactivate(&mut self) {
        self.visible = false;
    }
}

fn idle_count(registry: &PoolRegistry<PoolNames>, category: PoolNames) -> usize {
    registry.stats(category).map_or(0, |stats| stats.idle_count())
}

#[test]
fn fixed_category_scenario() {
    let mut registry = PoolRegistry::new();
    registry
        .create_or_get(PoolNames::Foo, Bubble::template(1.0), GrowthPolicy::Fixed, 2)
        .unwrap();

    let first = registry.try_get_item::<Bubble>(PoolNames::Foo).unwrap();
    let second = registry.try_get_item::<Bubble>(PoolNames::Foo).unwrap();

    assert_ne!(first.serial, second.serial);
    assert!(first.is_active() && second.is_active());
    assert!(first.visible && second.visible);
    assert_eq!(idle_count(&registry, PoolNames::Foo), 0);

    assert!(matches!(
        registry.try_get_item::<Bubble>(PoolNames::Foo),
        Err(Error::Pool(recycling_pool::Error::Exhausted { .. }))
    ));

    let returned_serial = first.serial;
    assert!(registry.try_return_item(PoolNames::Foo, first));
    assert_eq!(idle_count(&registry, PoolNames::Foo), 1);

    let third = registry.try_get_item::<Bubble>(PoolNames::Foo).unwrap();
    assert_eq!(third.serial, returned_serial);

    registry.try_return_item(PoolNames::Foo, second);
    registry.try_return_item(PoolNames::Foo, third);
}

#[test]
fn growable_category_grows_from_empty() {
    let mut registry = PoolRegistry::new();
    registry
        .create_or_get(PoolNames::Bar, Bubble::template(2.0), GrowthPolicy::Grow, 0)
        .unwrap();

    let bubble = registry.try_get_item::<Bubble>(PoolNames::Bar).unwrap();

    assert_eq!(bubble.serial, 1);
    assert!(bubble.visible);
    assert!((bubble.radius - 2.0).abs() < f32::EPSILON);
    assert_eq!(
        bubble.owner.as_ref().map(Scope::path),
        Some("PoolManager/Pool_Bar")
    );

    registry.try_return_item(PoolNames::Bar, bubble);
}

#[test]
fn registration_is_idempotent() {
    let mut registry = PoolRegistry::new();

    let first: *const RecyclingPool<Bubble> = registry
        .create_or_get(PoolNames::Bubble, Bubble::template(1.0), GrowthPolicy::Fixed, 3)
        .unwrap();
    let second: *const RecyclingPool<Bubble> = registry
        .create_or_get(PoolNames::Bubble, Bubble::template(9.0), GrowthPolicy::Grow, 0)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(registry.len(), 1);

    let stats = registry.stats(PoolNames::Bubble).unwrap();
    assert_eq!(stats.idle_count(), 3);
    assert_eq!(stats.growth_policy(), GrowthPolicy::Fixed);
}

#[test]
fn unregistered_categories_fail_without_panicking() {
    let mut registry = PoolRegistry::<PoolNames>::new();

    assert!(matches!(
        registry.try_get_item::<Bubble>(PoolNames::Popped),
        Err(Error::UnregisteredCategory { .. })
    ));
    assert!(!registry.try_return_item::<Bubble>(PoolNames::Popped, None));
    assert!(registry.try_get_pool::<Bubble>(PoolNames::Popped).is_none());
}

#[test]
fn returning_none_never_changes_idle_count() {
    let mut registry = PoolRegistry::new();
    registry
        .create_or_get(PoolNames::Bubble, Bubble::template(1.0), GrowthPolicy::Grow, 2)
        .unwrap();

    assert!(!registry.try_return_item::<Bubble>(PoolNames::Bubble, None));
    assert_eq!(idle_count(&registry, PoolNames::Bubble), 2);
}

#[test]
fn categories_hold_pools_of_different_types() {
    let mut registry = PoolRegistry::new();

    registry
        .create_or_get(PoolNames::Bubble, Bubble::template(1.0), GrowthPolicy::Grow, 1)
        .unwrap();
    registry
        .create_or_get_handle_pool(PoolNames::Popped, Handle::template("pop"), GrowthPolicy::Grow, 1)
        .unwrap();

    let bubble = registry.try_get_item::<Bubble>(PoolNames::Bubble).unwrap();
    let pop = registry.try_get_handle(PoolNames::Popped).unwrap();

    assert_eq!(pop.name(), "pop");
    assert!(bubble.visible);

    let mut categories: Vec<_> = registry.categories().collect();
    categories.sort_by_key(|category| format!("{category:?}"));
    assert_eq!(categories, vec![PoolNames::Bubble, PoolNames::Popped]);

    assert!(registry.try_return_item(PoolNames::Bubble, bubble));
    assert!(registry.try_return_handle(PoolNames::Popped, pop));
}

#[test]
#[should_panic(expected = "was accessed as a pool of")]
fn type_mismatch_is_fatal() {
    let mut registry = PoolRegistry::new();
    registry
        .create_or_get(PoolNames::Bubble, Bubble::template(1.0), GrowthPolicy::Grow, 1)
        .unwrap();

    let _handle = registry.try_get_handle(PoolNames::Bubble);
}

#[test]
#[should_panic(expected = "was accessed as a pool of")]
fn type_mismatch_on_return_is_fatal() {
    let mut registry = PoolRegistry::new();
    registry
        .create_or_get_handle_pool(PoolNames::Popped, Handle::template("pop"), GrowthPolicy::Grow, 0)
        .unwrap();
    registry
        .create_or_get(PoolNames::Bubble, Bubble::template(1.0), GrowthPolicy::Grow, 0)
        .unwrap();

    let bubble = registry.try_get_item::<Bubble>(PoolNames::Bubble).unwrap();
    registry.try_return_item(PoolNames::Popped, bubble);
}
