//! Simulation constants and tuning parameters.

use std::f64::consts::PI;

// --- World bounds ---

/// World width in world units. The default world rectangle is centered on
/// the origin.
pub const WORLD_WIDTH: f64 = 1280.0;

/// World height in world units.
pub const WORLD_HEIGHT: f64 = 720.0;

// --- Seeker behavior ---

/// Maximum turn per tick while steering toward a target (radians).
pub const SEEKER_TURN_RATE: f64 = PI / 60.0;

/// Thrust is applied while farther than this from the target.
pub const SEEKER_THRUST_RANGE: f64 = 500.0;

/// Thrust is cut once positional speed reaches this (units per tick).
pub const SEEKER_MAX_SPEED: f64 = 100.0;

/// Ticks between projectile launches while a seeker is engaged.
pub const SEEKER_FIRE_INTERVAL: u32 = 30;

// --- Projectiles ---

/// Projectile hit box edge length.
pub const BULLET_SIZE: f64 = 8.0;

/// Projectile speed (units per tick).
pub const BULLET_SPEED: f64 = 25.0;

/// Projectiles self-destruct after this many ticks without a hit.
pub const BULLET_LIFETIME_TICKS: u32 = 90;

/// Health subtracted from whatever a projectile reacts to.
pub const BULLET_DAMAGE: f64 = 10.0;

// --- Player control ---

/// Minimum ticks between player-fired projectiles.
pub const FIRE_COOLDOWN_TICKS: u32 = 20;

// --- Collisions ---

/// Health subtracted when a rammer (e.g. an asteroid) strikes what it
/// reacts to.
pub const RAM_DAMAGE: f64 = 25.0;
