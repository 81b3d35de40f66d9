//! Velocity integration system.
//!
//! For entities with both velocity and position: apply friction to the
//! positional delta, add it to the location, and rotate the facing
//! direction by the rotational delta.

use glam::DVec2;
use hecs::Entity;

use outpost_core::components::{Position, Velocity};

use crate::context::SimContext;

pub fn run(ctx: &mut SimContext, ents: &[Entity]) {
    for &entity in ents {
        let Ok(mut vel) = ctx.world.get::<&mut Velocity>(entity) else {
            continue;
        };
        let Ok(mut pos) = ctx.world.get::<&mut Position>(entity) else {
            continue;
        };

        if let Some(friction) = vel.friction {
            vel.positional *= friction;
        }
        pos.loc += vel.positional;
        if vel.rotational != 0.0 {
            pos.dir = DVec2::from_angle(vel.rotational).rotate(pos.dir);
        }
    }
}
