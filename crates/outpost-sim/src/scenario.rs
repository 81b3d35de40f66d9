//! Demo scenario: entity spawn factories and the standard system
//! pipeline.
//!
//! This is setup code, not engine code — it decides concrete categories,
//! callbacks, and registration order. The engine itself is
//! content-agnostic. Embedders are expected to write their own version of
//! this module; tests use it as a realistic world.

use std::collections::HashMap;
use std::sync::Arc;

use glam::DVec2;
use hecs::{Entity, World};

use outpost_core::components::{
    Animation, AnimationTable, Brain, Control, Frame, Health, HitBox, Position, Velocity,
};
use outpost_core::constants::{RAM_DAMAGE, SEEKER_FIRE_INTERVAL};
use outpost_core::enums::{HitCategory, SequenceId};
use outpost_core::error::ConfigError;
use outpost_core::types::Manifold;

use outpost_ai::seeker::seeker;

use crate::engine::SimEngine;
use crate::systems;

/// Entities of the demo world, for tests and embedders that need to poke
/// at them.
pub struct DemoScene {
    pub player: Entity,
    pub station: Entity,
    pub asteroids: Vec<Entity>,
    pub seeker: Entity,
}

/// Register the standard system pipeline. Registration order defines the
/// simulation semantics: later systems observe the effects of earlier
/// ones within the same tick.
pub fn standard_pipeline(engine: &mut SimEngine) {
    engine.register_system_filtered("control", systems::control::run, systems::controlled);
    engine.register_system("behavior", systems::behavior::run);
    engine.register_system("motion", systems::motion::run);
    engine.register_system("boundary", systems::boundary::run);
    engine.register_system("collision", systems::collision::run);
    engine.register_system("timer", systems::timer::run);
    engine.register_system("health", systems::health::run);
    engine.register_system("animation", systems::animation::run);
}

/// Populate the demo world: a player, the station, a few drifting
/// asteroids, and a seeker hunting them.
pub fn setup_demo(engine: &mut SimEngine) -> Result<DemoScene, ConfigError> {
    let world = engine.world_mut();

    let player = spawn_player(world, DVec2::new(-490.0, -210.0))?;
    let station = spawn_station(world, DVec2::ZERO)?;
    let asteroids = vec![
        spawn_asteroid(world, DVec2::new(-520.0, 260.0), DVec2::new(1.5, -0.8))?,
        spawn_asteroid(world, DVec2::new(540.0, -180.0), DVec2::new(-1.2, 0.6))?,
        spawn_asteroid(world, DVec2::new(300.0, 310.0), DVec2::new(-0.4, -1.1))?,
    ];
    let seeker = spawn_seeker(world, DVec2::new(600.0, 320.0))?;

    Ok(DemoScene {
        player,
        station,
        asteroids,
        seeker,
    })
}

/// Player ship: controllable, animated, damaged by asteroid impacts.
pub fn spawn_player(world: &mut World, loc: DVec2) -> Result<Entity, ConfigError> {
    let hitbox = HitBox::new(HitCategory::Player, vec![HitCategory::Asteroid], 32.0, 32.0)?
        .with_handler(Box::new(absorb_ram));

    Ok(world.spawn((
        Position::new(loc),
        Velocity::new(1.0).with_friction(0.9)?,
        Control::default(),
        Animation::new(ship_animations(), SequenceId::Idle),
        hitbox,
        Health::new(100.0, despawn_on_death()),
    )))
}

/// The station the asteroids threaten. Stationary, tougher than the
/// player.
pub fn spawn_station(world: &mut World, loc: DVec2) -> Result<Entity, ConfigError> {
    let hitbox = HitBox::new(HitCategory::Station, vec![HitCategory::Asteroid], 96.0, 96.0)?
        .with_handler(Box::new(absorb_ram));

    Ok(world.spawn((
        Position::new(loc),
        hitbox,
        Health::new(200.0, despawn_on_death()),
    )))
}

/// Drifting asteroid. Wraps at the world boundary and reacts to nothing
/// itself; whatever it rams is the side that responds.
pub fn spawn_asteroid(
    world: &mut World,
    loc: DVec2,
    drift: DVec2,
) -> Result<Entity, ConfigError> {
    let mut vel = Velocity::new(0.0);
    vel.positional = drift;

    Ok(world.spawn((
        Position::wrapping(loc),
        vel,
        HitBox::new(HitCategory::Asteroid, vec![], 40.0, 40.0)?,
        Health::new(30.0, despawn_on_death()),
    )))
}

/// Seeker drone: hunts asteroids with the seeker behavior, firing on its
/// standard interval.
pub fn spawn_seeker(world: &mut World, loc: DVec2) -> Result<Entity, ConfigError> {
    Ok(world.spawn((
        Position::new(loc),
        Velocity::new(1.0),
        HitBox::new(HitCategory::Seeker, vec![], 24.0, 24.0)?,
        Brain::new(seeker(HitCategory::Asteroid, SEEKER_FIRE_INTERVAL)),
    )))
}

/// Hit handler for things asteroids crash into: take ram damage and
/// destroy the rammer.
fn absorb_ram(world: &mut World, me: Entity, other: Entity, _manifold: &Manifold) {
    if let Ok(mut health) = world.get::<&mut Health>(me) {
        health.value -= RAM_DAMAGE;
    }
    let _ = world.despawn(other);
}

fn despawn_on_death() -> outpost_core::components::EventHandler {
    Box::new(|world: &mut World, entity: Entity| {
        let _ = world.despawn(entity);
    })
}

/// Single-frame ship animations; texture handles are resolved by the
/// presentation layer.
fn ship_animations() -> Arc<AnimationTable> {
    let mut table: AnimationTable = HashMap::new();
    table.insert(
        SequenceId::Idle,
        vec![Frame {
            ticks: 0,
            texture: "textures/ship.png".to_owned(),
            next: 0,
        }],
    );
    table.insert(
        SequenceId::Walk,
        vec![Frame {
            ticks: 0,
            texture: "textures/ship.png".to_owned(),
            next: 0,
        }],
    );
    table.insert(
        SequenceId::Attack,
        vec![Frame {
            ticks: 0,
            texture: "textures/ship_firing.png".to_owned(),
            next: 0,
        }],
    );
    Arc::new(table)
}
