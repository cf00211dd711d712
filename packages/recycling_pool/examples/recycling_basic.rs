//! Basic usage of `RecyclingPool` with a custom item type.

use recycling_pool::{Error, GrowthPolicy, InstantiateError, Poolable, RecyclingPool, Scope};

/// A particle that is expensive to set up and therefore recycled.
#[derive(Debug)]
struct Particle {
    texture: &'static str,
    owner: Option<Scope>,
    visible: bool,
}

impl Poolable for Particle {
    fn instantiate(&self, scope: &Scope) -> Result<Self, InstantiateError> {
        Ok(Self {
            texture: self.texture,
            owner: Some(scope.clone()),
            visible: self.visible,
        })
    }

    fn on_activate(&mut self) {
        self.visible = true;
    }

    fn on_deactivate(&mut self) {
        self.visible = false;
    }
}

fn main() {
    let template = Particle {
        texture: "spark.png",
        owner: None,
        visible: true,
    };

    let mut pool = RecyclingPool::builder(template)
        .scope(Scope::root("Particles"))
        .growth_policy(GrowthPolicy::Fixed)
        .initial_size(3)
        .build()
        .expect("a particle can always be instantiated");

    let mut burst = Vec::new();

    loop {
        match pool.try_get() {
            Ok(particle) => burst.push(particle),
            Err(Error::Exhausted { capacity, .. }) => {
                println!("All {capacity} particles are in flight, skipping the rest of the burst");
                break;
            }
            Err(error) => panic!("unexpected pool failure: {error}"),
        }
    }

    for particle in &burst {
        println!(
            "{} in {:?} visible={}",
            particle.texture,
            particle.owner.as_ref().map(Scope::path),
            particle.visible
        );
    }

    for particle in burst {
        pool.try_return(particle);
    }

    println!("{} particles idle again", pool.idle_count());
}
