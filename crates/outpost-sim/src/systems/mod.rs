//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are stateless functions over the shared context and an entity
//! list. They do not own state — all state lives in components. An entity
//! lacking a component a system requires is silently skipped.

pub mod animation;
pub mod behavior;
pub mod boundary;
pub mod collision;
pub mod control;
pub mod health;
pub mod motion;
pub mod snapshot;
pub mod timer;

use hecs::{Entity, World};

use outpost_core::components::Control;

/// Filter for systems restricted to player-controlled entities.
pub fn controlled(world: &World) -> Vec<Entity> {
    world
        .query::<&Control>()
        .iter()
        .map(|(entity, _)| entity)
        .collect()
}
