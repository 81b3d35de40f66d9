//! Control system: turns input intent flags into acceleration, facing,
//! and pointer-aimed projectiles.
//!
//! Registered with the `controlled` filter. Intent flags are written by
//! the input layer before the tick; this system only reads them (the
//! cooldown counter is the one field it owns).

use glam::DVec2;
use hecs::Entity;

use outpost_core::components::{Animation, Control, Position, Velocity};
use outpost_core::constants::FIRE_COOLDOWN_TICKS;
use outpost_core::enums::{HitCategory, SequenceId};

use crate::context::SimContext;

pub fn run(ctx: &mut SimContext, ents: &[Entity]) {
    for &entity in ents {
        let intent = {
            let Ok(mut control) = ctx.world.get::<&mut Control>(entity) else {
                continue;
            };
            let snapshot = *control;
            if control.cooldown > 0 {
                control.cooldown -= 1;
            }
            snapshot
        };

        let mut steer = DVec2::ZERO;
        if intent.left {
            steer.x -= 1.0;
        }
        if intent.right {
            steer.x += 1.0;
        }
        if intent.up {
            steer.y += 1.0;
        }
        if intent.down {
            steer.y -= 1.0;
        }

        if steer != DVec2::ZERO {
            let steer = steer.normalize();
            if let Ok(mut vel) = ctx.world.get::<&mut Velocity>(entity) {
                let acceleration = vel.acceleration;
                vel.positional += steer * acceleration;
            }
            if let Ok(mut pos) = ctx.world.get::<&mut Position>(entity) {
                pos.dir = steer;
            }
        }

        if intent.fire && intent.cooldown == 0 {
            let loc = match ctx.world.get::<&Position>(entity) {
                Ok(pos) => pos.loc,
                Err(_) => continue,
            };
            let spawned = outpost_ai::projectile::spawn(
                &mut ctx.world,
                entity,
                loc,
                intent.pointer - loc,
                vec![HitCategory::Asteroid],
            );
            if spawned.is_some() {
                if let Ok(mut control) = ctx.world.get::<&mut Control>(entity) {
                    control.cooldown = FIRE_COOLDOWN_TICKS;
                }
                if let Ok(mut anim) = ctx.world.get::<&mut Animation>(entity) {
                    anim.set_sequence(SequenceId::Attack);
                }
            }
        } else if let Ok(mut anim) = ctx.world.get::<&mut Animation>(entity) {
            let sequence = if steer != DVec2::ZERO {
                SequenceId::Walk
            } else {
                SequenceId::Idle
            };
            anim.set_sequence(sequence);
        }
    }
}
