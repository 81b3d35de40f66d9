//! Serializable views of the world for the presentation layer.
//!
//! The presentation layer never reaches into the ECS world; it reads the
//! snapshot the engine returns from each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Complete per-tick output for the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    /// One entry per positioned entity, ordered by entity id.
    pub poses: Vec<PoseView>,
}

/// Final position/direction values for one entity, plus whatever visual
/// state the entity carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseView {
    /// Stable entity id bits.
    pub id: u64,
    pub loc: DVec2,
    pub dir: DVec2,
    /// Texture handle of the current animation frame, if animated.
    pub texture: Option<String>,
    /// Health fraction in [0, 1], if the entity has health.
    pub health: Option<f64>,
}
