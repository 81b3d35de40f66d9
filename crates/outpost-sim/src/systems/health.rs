//! Health system: fires the death callback once when health is depleted.

use hecs::Entity;

use outpost_core::components::Health;

use crate::context::SimContext;

pub fn run(ctx: &mut SimContext, ents: &[Entity]) {
    for &entity in ents {
        let dead = match ctx.world.get::<&Health>(entity) {
            Ok(health) => health.value <= 0.0,
            Err(_) => continue,
        };

        if dead {
            // Detach first so the callback fires exactly once even if it
            // leaves the entity alive.
            if let Ok(health) = ctx.world.remove_one::<Health>(entity) {
                (health.on_death)(&mut ctx.world, entity);
            }
        }
    }
}
