//! Shared simulation context: the entity registry plus the state every
//! system may touch.

use hecs::{DynamicBundle, Entity, World};
use rand_chacha::ChaCha8Rng;

use outpost_core::types::{Rect, SimTime};

/// The mutable state threaded through every system each tick. The world
/// is the live entity registry; there is no other shared state and no
/// parallelism, so ordering discipline replaces locking.
pub struct SimContext {
    pub world: World,
    /// Seeded RNG; the only source of randomness in the simulation.
    pub rng: ChaCha8Rng,
    pub time: SimTime,
    /// Fixed world rectangle entities wrap around or clamp against.
    pub bounds: Rect,
}

impl SimContext {
    /// Add an entity to the live set.
    pub fn register(&mut self, components: impl DynamicBundle) -> Entity {
        self.world.spawn(components)
    }

    /// Remove an entity. Idempotent, and takes effect immediately: the
    /// entity is excluded from the remainder of the current tick's
    /// systems and from all later ticks.
    pub fn remove(&mut self, entity: Entity) {
        let _ = self.world.despawn(entity);
    }
}
