//! Behavior system: resumes each entity's AI process once per tick.
//!
//! If no instance is active, a fresh one is built from the factory and
//! stepped immediately. The instance is taken out of the component for
//! the step (it needs the world itself), and restored only if it is still
//! running and the entity still exists — a completed instance is cleared
//! so the next tick starts over from the factory, and a step that faults
//! drops the taken-out instance, which amounts to abandonment.

use hecs::Entity;

use outpost_core::behavior::{BehaviorCtx, Status};
use outpost_core::components::Brain;

use crate::context::SimContext;

pub fn run(ctx: &mut SimContext, ents: &[Entity]) {
    for &entity in ents {
        let mut instance = {
            let Ok(mut brain) = ctx.world.get::<&mut Brain>(entity) else {
                continue;
            };
            match brain.current.take() {
                Some(instance) => instance,
                None => (brain.root)(),
            }
        };

        let status = {
            let SimContext {
                world, rng, time, ..
            } = ctx;
            let mut behavior_ctx = BehaviorCtx {
                world,
                rng,
                tick: time.tick,
                me: entity,
            };
            instance.step(&mut behavior_ctx)
        };

        if status == Status::Running {
            if let Ok(mut brain) = ctx.world.get::<&mut Brain>(entity) {
                if brain.current.is_none() {
                    brain.current = Some(instance);
                }
            }
        }
    }
}
