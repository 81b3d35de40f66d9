//! Projectile spawning shared by behaviors and the control system.

use glam::DVec2;
use hecs::{Entity, World};

use outpost_core::components::{Health, HitBox, Position, Projectile, Timer, Velocity};
use outpost_core::constants::{BULLET_DAMAGE, BULLET_LIFETIME_TICKS, BULLET_SIZE, BULLET_SPEED};
use outpost_core::enums::HitCategory;
use outpost_core::types::Manifold;

/// Spawn a projectile at `from`, flying along `aim`, reacting to the given
/// categories. The projectile damages whatever it reacts to, removes
/// itself on impact, and self-destructs after its lifetime expires.
///
/// Returns `None` for a degenerate aim vector.
pub fn spawn(
    world: &mut World,
    shooter: Entity,
    from: DVec2,
    aim: DVec2,
    reacts_to: Vec<HitCategory>,
) -> Option<Entity> {
    let aim = aim.normalize_or_zero();
    if aim == DVec2::ZERO {
        return None;
    }

    let Ok(hitbox) = HitBox::new(HitCategory::Bullet, reacts_to, BULLET_SIZE, BULLET_SIZE) else {
        return None;
    };
    let hitbox = hitbox.with_handler(Box::new(impact));

    let mut vel = Velocity::new(0.0);
    vel.positional = aim * BULLET_SPEED;

    let mut pos = Position::new(from);
    pos.dir = aim;

    Some(world.spawn((
        pos,
        vel,
        hitbox,
        Projectile { shooter },
        Timer::new(
            BULLET_LIFETIME_TICKS,
            Box::new(|world, entity| {
                let _ = world.despawn(entity);
            }),
        ),
    )))
}

/// Hit handler for projectiles: damage the struck entity if it has
/// health, then remove the projectile.
fn impact(world: &mut World, me: Entity, other: Entity, _manifold: &Manifold) {
    if let Ok(mut health) = world.get::<&mut Health>(other) {
        health.value -= BULLET_DAMAGE;
    }
    let _ = world.despawn(me);
}
