//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Collision categories. The naming is game content; the collision engine
/// treats these as opaque values matched against each hit box's
/// `reacts_to` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitCategory {
    Player,
    Asteroid,
    Bullet,
    Station,
    StationPart,
    Seeker,
}

/// Animation sequence identifiers. Content supplies a frame table per
/// sequence; the animation system only steps frame indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceId {
    #[default]
    Idle,
    Walk,
    Attack,
}
