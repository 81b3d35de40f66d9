//! Target-seeking attacker behaviors.
//!
//! [`seeker`] waits for prey, picks one target at random and hounds it
//! until it is gone. [`purge`] re-acquires the closest eligible target
//! every tick and succeeds once no prey remains.

use std::sync::Arc;

use glam::DVec2;
use hecs::{Entity, World};
use rand::seq::SliceRandom;

use outpost_core::behavior::{Behavior, BehaviorCtx, BehaviorFactory, Outcome, Status};
use outpost_core::components::{HitBox, Position, Velocity};
use outpost_core::constants::{SEEKER_MAX_SPEED, SEEKER_THRUST_RANGE, SEEKER_TURN_RATE};
use outpost_core::enums::HitCategory;

use crate::projectile;

/// Hunt one target of the given category.
///
/// Suspends every tick until at least one live entity with a `prey` hit
/// box exists, then selects uniformly at random among the candidates.
/// The selection happens once and is never re-rolled: the behavior steers
/// toward that entity with a clamped per-tick turn rate, thrusts while out
/// of range, and fires a projectile at it every `fire_interval` ticks,
/// reporting SUCCESS once the target has been removed.
pub fn seeker(prey: HitCategory, fire_interval: u32) -> BehaviorFactory {
    Arc::new(move || {
        Box::new(Seeker {
            prey,
            fire_interval,
            target: None,
            active_ticks: 0,
        })
    })
}

/// Hunt every target of the given category, closest first.
///
/// Unlike [`seeker`], the target is re-computed as the closest eligible
/// entity on every active tick, so a fresher, nearer threat takes
/// priority and a removed target is replaced immediately. Succeeds once
/// prey has been seen and none remains; suspends while none has appeared
/// yet.
pub fn purge(prey: HitCategory, fire_interval: u32) -> BehaviorFactory {
    Arc::new(move || {
        Box::new(Purge {
            prey,
            fire_interval,
            engaged: false,
            active_ticks: 0,
        })
    })
}

struct Seeker {
    prey: HitCategory,
    fire_interval: u32,
    target: Option<Entity>,
    active_ticks: u32,
}

impl Behavior for Seeker {
    fn step(&mut self, ctx: &mut BehaviorCtx<'_>) -> Status {
        let Some(target) = self.target else {
            let candidates = candidates_of(ctx.world, ctx.me, self.prey);
            let Some(&picked) = candidates.choose(ctx.rng) else {
                // No prey yet; await the next tick.
                return Status::Running;
            };
            self.target = Some(picked);
            return Status::Running;
        };

        if !ctx.world.contains(target) {
            return Status::Done(Outcome::Success);
        }

        pursue(ctx, target);
        self.active_ticks += 1;
        if self.fire_interval > 0 && self.active_ticks % self.fire_interval == 0 {
            fire(ctx, target, self.prey);
        }
        Status::Running
    }
}

struct Purge {
    prey: HitCategory,
    fire_interval: u32,
    engaged: bool,
    active_ticks: u32,
}

impl Behavior for Purge {
    fn step(&mut self, ctx: &mut BehaviorCtx<'_>) -> Status {
        let Some(target) = closest_of(ctx.world, ctx.me, self.prey) else {
            if self.engaged {
                return Status::Done(Outcome::Success);
            }
            return Status::Running;
        };

        self.engaged = true;
        pursue(ctx, target);
        self.active_ticks += 1;
        if self.fire_interval > 0 && self.active_ticks % self.fire_interval == 0 {
            fire(ctx, target, self.prey);
        }
        Status::Running
    }
}

/// Live entities whose hit box carries the given category, excluding the
/// hunter itself.
fn candidates_of(world: &World, me: Entity, prey: HitCategory) -> Vec<Entity> {
    world
        .query::<&HitBox>()
        .iter()
        .filter(|(entity, hitbox)| *entity != me && hitbox.category == prey)
        .map(|(entity, _)| entity)
        .collect()
}

/// Closest eligible prey entity by straight-line distance, if any.
fn closest_of(world: &World, me: Entity, prey: HitCategory) -> Option<Entity> {
    let from = world.get::<&Position>(me).map(|p| p.loc).ok()?;
    world
        .query::<(&HitBox, &Position)>()
        .iter()
        .filter(|(entity, (hitbox, _))| *entity != me && hitbox.category == prey)
        .min_by(|(_, (_, a)), (_, (_, b))| {
            a.loc
                .distance_squared(from)
                .total_cmp(&b.loc.distance_squared(from))
        })
        .map(|(entity, _)| entity)
}

/// Turn toward the target with the turn angle clamped per tick, and
/// thrust forward while out of range and below the speed cap.
fn pursue(ctx: &mut BehaviorCtx<'_>, target: Entity) {
    let Ok(target_loc) = ctx.world.get::<&Position>(target).map(|p| p.loc) else {
        return;
    };
    let Ok((loc, dir)) = ctx.world.get::<&Position>(ctx.me).map(|p| (p.loc, p.dir)) else {
        return;
    };

    let to_target = target_loc - loc;
    if to_target == DVec2::ZERO {
        return;
    }

    let facing = dir.normalize_or_zero();
    let wanted = to_target.normalize_or_zero();
    let mut turn = facing.dot(wanted).clamp(-1.0, 1.0).acos().min(SEEKER_TURN_RATE);
    // Sign of the 2D cross product picks the rotation direction.
    if facing.perp_dot(wanted) < 0.0 {
        turn = -turn;
    }
    let new_dir = DVec2::from_angle(turn).rotate(dir);

    if let Ok(mut pos) = ctx.world.get::<&mut Position>(ctx.me) {
        pos.dir = new_dir;
    }

    if to_target.length() > SEEKER_THRUST_RANGE {
        if let Ok(mut vel) = ctx.world.get::<&mut Velocity>(ctx.me) {
            if vel.positional.length() < SEEKER_MAX_SPEED {
                vel.positional += new_dir;
            }
        }
    }
}

/// Launch a projectile from the hunter at the target's current location.
fn fire(ctx: &mut BehaviorCtx<'_>, target: Entity, prey: HitCategory) {
    let Ok(from) = ctx.world.get::<&Position>(ctx.me).map(|p| p.loc) else {
        return;
    };
    let Ok(at) = ctx.world.get::<&Position>(target).map(|p| p.loc) else {
        return;
    };
    projectile::spawn(ctx.world, ctx.me, from, at - from, vec![prey]);
}
