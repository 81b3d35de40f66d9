//! Timer system: counts down, fires the callback exactly once, then the
//! component is gone.

use hecs::Entity;

use outpost_core::components::Timer;

use crate::context::SimContext;

pub fn run(ctx: &mut SimContext, ents: &[Entity]) {
    for &entity in ents {
        let expired = {
            let Ok(mut timer) = ctx.world.get::<&mut Timer>(entity) else {
                continue;
            };
            timer.ticks = timer.ticks.saturating_sub(1);
            timer.ticks == 0
        };

        if expired {
            // Detach before firing so the callback observes the component
            // already absent.
            if let Ok(timer) = ctx.world.remove_one::<Timer>(entity) {
                (timer.on_timeout)(&mut ctx.world, entity);
            }
        }
    }
}
