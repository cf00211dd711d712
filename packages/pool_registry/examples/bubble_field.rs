//! A field of bubbles that spawn and pop over a number of frames, recycling every bubble through a
//! `PoolRegistry` instead of creating a new one per spawn.

use pool_registry::{Category, Error, PoolRegistry};
use recycling_pool::{GrowthPolicy, Handle, Instance, InstantiateError, Poolable, Scope};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum PoolNames {
    Bubble,
    PopEffect,
}

impl Category for PoolNames {}

#[derive(Debug)]
struct Bubble {
    size: f32,
    height: f32,
    visible: bool,
}

impl Poolable for Bubble {
    fn instantiate(&self, _scope: &Scope) -> Result<Self, InstantiateError> {
        Ok(Self {
            size: self.size,
            height: 0.0,
            visible: self.visible,
        })
    }

    fn on_activate(&mut self) {
        self.visible = true;
        self.height = 0.0;
    }

    fn on_deactivate(&mut self) {
        self.visible = false;
    }
}

const FRAMES: u32 = 12;
const RISE_PER_FRAME: f32 = 0.5;
const POP_HEIGHT: f32 = 2.0;

fn main() {
    let mut registry = PoolRegistry::new();

    registry
        .create_or_get(
            PoolNames::Bubble,
            Bubble {
                size: 1.0,
                height: 0.0,
                visible: true,
            },
            GrowthPolicy::Fixed,
            3,
        )
        .expect("bubbles can always be instantiated");

    registry
        .create_or_get_handle_pool(PoolNames::PopEffect, Handle::template("pop"), GrowthPolicy::Grow, 1)
        .expect("handles can always be instantiated");

    let mut bubbles: Vec<Instance<Bubble>> = Vec::new();
    let mut effects: Vec<Instance<Handle>> = Vec::new();

    for frame in 0..FRAMES {
        // Effects only last a single frame.
        for effect in effects.drain(..) {
            registry.try_return_handle(PoolNames::PopEffect, effect);
        }

        match registry.try_get_item::<Bubble>(PoolNames::Bubble) {
            Ok(bubble) => bubbles.push(bubble),
            Err(Error::Pool(recycling_pool::Error::Exhausted { .. })) => {
                println!("frame {frame}: no bubble free, trying again next frame");
            }
            Err(error) => panic!("unexpected pool failure: {error}"),
        }

        for bubble in &mut bubbles {
            bubble.height += RISE_PER_FRAME;
        }

        let (popped, rising): (Vec<_>, Vec<_>) = bubbles
            .drain(..)
            .partition(|bubble| bubble.height >= POP_HEIGHT);
        bubbles = rising;

        for bubble in popped {
            let effect = registry
                .try_get_handle(PoolNames::PopEffect)
                .expect("effect pool grows on demand");
            println!(
                "frame {frame}: bubble of size {} popped, effect #{}",
                bubble.size,
                effect.id()
            );

            effects.push(effect);
            registry.try_return_item(PoolNames::Bubble, bubble);
        }
    }

    for category in [PoolNames::Bubble, PoolNames::PopEffect] {
        if let Some(stats) = registry.stats(category) {
            println!(
                "{category:?}: {} idle of {} created in {}",
                stats.idle_count(),
                stats.created_count(),
                stats.scope()
            );
        }
    }
}
