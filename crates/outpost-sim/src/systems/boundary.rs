//! World-boundary system: wrap or clamp positioned entities against the
//! fixed world rectangle.
//!
//! The entity's world-space box is its hit box rectangle, or a degenerate
//! point if it has none. Wrapping entities that have fully exited an edge
//! reappear at the opposite edge with the fractional overshoot preserved
//! (not a coordinate-modulo wrap). Non-wrapping entities receive the
//! minimal per-axis correction that makes the box edge-flush again.

use glam::DVec2;
use hecs::Entity;

use outpost_core::components::{HitBox, Position};
use outpost_core::types::Rect;

use crate::context::SimContext;

pub fn run(ctx: &mut SimContext, ents: &[Entity]) {
    let world_rect = ctx.bounds;

    for &entity in ents {
        let (loc, wrap) = {
            let Ok(pos) = ctx.world.get::<&Position>(entity) else {
                continue;
            };
            (pos.loc, pos.wrap)
        };

        let rect = match ctx.world.get::<&HitBox>(entity) {
            Ok(hitbox) => hitbox.rect_at(loc),
            Err(_) => Rect::point(loc),
        };

        let shift = if wrap {
            wrap_shift(&rect, &world_rect)
        } else {
            clamp_shift(&rect, &world_rect)
        };

        if shift != DVec2::ZERO {
            if let Ok(mut pos) = ctx.world.get::<&mut Position>(entity) {
                pos.loc += shift;
            }
        }
    }
}

/// Translation that re-enters a box that has fully exited an edge on the
/// opposite side, preserving the overshoot `o`: exiting past the right
/// edge by `o` lands the box's left edge at `world.left - o`, and
/// symmetrically for the other three edges.
fn wrap_shift(rect: &Rect, world: &Rect) -> DVec2 {
    let mut shift = DVec2::ZERO;

    if rect.left > world.right {
        let overshoot = rect.left - world.right;
        shift.x = (world.left - overshoot) - rect.left;
    } else if rect.right < world.left {
        let overshoot = world.left - rect.right;
        shift.x = (world.right + overshoot) - rect.right;
    }

    if rect.bottom > world.top {
        let overshoot = rect.bottom - world.top;
        shift.y = (world.bottom - overshoot) - rect.bottom;
    } else if rect.top < world.bottom {
        let overshoot = world.bottom - rect.top;
        shift.y = (world.top + overshoot) - rect.top;
    }

    shift
}

/// Minimal per-axis correction that makes an exceeded box edge flush with
/// the boundary again.
fn clamp_shift(rect: &Rect, world: &Rect) -> DVec2 {
    let mut shift = DVec2::ZERO;

    if rect.left < world.left {
        shift.x = world.left - rect.left;
    } else if rect.right > world.right {
        shift.x = world.right - rect.right;
    }

    if rect.bottom < world.bottom {
        shift.y = world.bottom - rect.bottom;
    } else if rect.top > world.top {
        shift.y = world.top - rect.top;
    }

    shift
}
