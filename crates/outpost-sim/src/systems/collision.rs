//! Spatial collision system: broadphase sweep over sorted boxes,
//! narrowphase rectangle overlap, directional category-filtered dispatch.
//!
//! Box rectangles are snapshotted at the start of the pass; liveness and
//! categories are re-read from the world at every dispatch, so entities
//! removed by a callback earlier in the same pass are silently skipped
//! without corrupting the sweep. Callbacks receive the world, not the
//! engine, so a second collision pass cannot be triggered re-entrantly.

use hecs::{Entity, World};

use outpost_core::components::{HitBox, Position};
use outpost_core::types::{Manifold, Rect};

use crate::context::SimContext;

struct SweepBody {
    entity: Entity,
    rect: Rect,
}

pub fn run(ctx: &mut SimContext, ents: &[Entity]) {
    let mut bodies: Vec<SweepBody> = Vec::with_capacity(ents.len());
    for &entity in ents {
        let loc = {
            let Ok(pos) = ctx.world.get::<&Position>(entity) else {
                continue;
            };
            pos.loc
        };
        let Ok(hitbox) = ctx.world.get::<&HitBox>(entity) else {
            continue;
        };
        let rect = hitbox.rect_at(loc);
        drop(hitbox);
        bodies.push(SweepBody { entity, rect });
    }

    bodies.sort_by(|a, b| a.rect.left.total_cmp(&b.rect.left));

    // Sweep left to right. A window member is kept while the incoming
    // box's left edge is within its right edge; beyond that no later box
    // can overlap it on the x axis.
    let mut window: Vec<usize> = Vec::new();

    for incoming in 0..bodies.len() {
        let incoming_rect = bodies[incoming].rect;
        window.retain(|&open| incoming_rect.left <= bodies[open].rect.right);

        for position in 0..window.len() {
            let open = window[position];
            if let Some(manifold) = incoming_rect.overlap(&bodies[open].rect) {
                dispatch(
                    &mut ctx.world,
                    bodies[incoming].entity,
                    bodies[open].entity,
                    &manifold,
                );
                dispatch(
                    &mut ctx.world,
                    bodies[open].entity,
                    bodies[incoming].entity,
                    &manifold,
                );
            }
        }

        window.push(incoming);
    }
}

/// Fire `reactor`'s hit callback against `other` if both entities are
/// still live and `other`'s current category is one `reactor` reacts to.
/// The callback is taken out of the component for the call and restored
/// afterwards unless the entity (or the callback slot) went away.
fn dispatch(world: &mut World, reactor: Entity, other: Entity, manifold: &Manifold) {
    if !world.contains(reactor) || !world.contains(other) {
        return;
    }

    let other_category = match world.get::<&HitBox>(other) {
        Ok(hitbox) => hitbox.category,
        Err(_) => return,
    };

    let handler = {
        let Ok(mut hitbox) = world.get::<&mut HitBox>(reactor) else {
            return;
        };
        if !hitbox.reacts_to.contains(&other_category) {
            return;
        }
        match hitbox.on_hit.take() {
            Some(handler) => handler,
            None => return,
        }
    };

    let mut handler = handler;
    handler(world, reactor, other, manifold);

    if let Ok(mut hitbox) = world.get::<&mut HitBox>(reactor) {
        if hitbox.on_hit.is_none() {
            hitbox.on_hit = Some(handler);
        }
    }
}
