//! Animation stepping system.
//!
//! Advances frame indices from the content-supplied table. Texture
//! handles are opaque strings here; resolving them is the presentation
//! layer's job.

use hecs::Entity;

use outpost_core::components::Animation;

use crate::context::SimContext;

pub fn run(ctx: &mut SimContext, ents: &[Entity]) {
    for &entity in ents {
        let Ok(mut anim) = ctx.world.get::<&mut Animation>(entity) else {
            continue;
        };

        if anim.ticks > 0 {
            anim.ticks -= 1;
        }
        if anim.ticks > 0 {
            continue;
        }

        let advanced = {
            let Some(frames) = anim.table.get(&anim.sequence) else {
                continue;
            };
            let Some(current) = frames.get(anim.frame) else {
                continue;
            };
            let next = current.next;
            frames.get(next).map(|frame| (next, frame.ticks))
        };

        if let Some((next, ticks)) = advanced {
            anim.frame = next;
            anim.ticks = ticks;
        }
    }
}
