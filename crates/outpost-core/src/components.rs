//! ECS components for hecs entities.
//!
//! Components are plain data; game logic lives in systems. An entity is a
//! sparse bag of these — any subset, attached at spawn or later. Systems
//! skip entities that lack a component they require, which is what lets
//! heterogeneous entities coexist in one world.
//!
//! Cross-entity references are stored as `hecs::Entity` ids and resolved
//! against the world on every use; a removed referent is treated as absent.

use std::collections::HashMap;
use std::sync::Arc;

use glam::DVec2;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use crate::behavior::{Behavior, BehaviorFactory};
use crate::enums::{HitCategory, SequenceId};
use crate::error::ConfigError;
use crate::types::{Manifold, Rect};

/// Directional hit callback: (world, self, other, overlap region).
pub type HitHandler = Box<dyn FnMut(&mut World, Entity, Entity, &Manifold) + Send + Sync>;

/// One-shot callback fired when a timer expires or a death occurs.
pub type EventHandler = Box<dyn FnOnce(&mut World, Entity) + Send + Sync>;

/// Position component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    /// Location vector.
    pub loc: DVec2,
    /// Facing direction vector.
    pub dir: DVec2,
    /// Wrap around the world boundary instead of clamping against it.
    pub wrap: bool,
}

impl Position {
    pub fn new(loc: DVec2) -> Self {
        Self {
            loc,
            dir: DVec2::X,
            wrap: false,
        }
    }

    pub fn wrapping(loc: DVec2) -> Self {
        Self {
            loc,
            dir: DVec2::X,
            wrap: true,
        }
    }
}

/// Velocity component. Positional and rotational deltas are applied once
/// per tick by the motion system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Velocity {
    pub acceleration: f64,
    /// Positional delta per tick.
    pub positional: DVec2,
    /// Rotation applied to the facing direction per tick (radians).
    pub rotational: f64,
    /// Optional per-tick decay factor in (0, 1] applied to the positional
    /// delta before integration.
    pub friction: Option<f64>,
}

impl Velocity {
    pub fn new(acceleration: f64) -> Self {
        Self {
            acceleration,
            positional: DVec2::ZERO,
            rotational: 0.0,
            friction: None,
        }
    }

    /// Attach a per-tick friction factor. Fails fast on values outside
    /// (0, 1], which would silently freeze or explode the entity.
    pub fn with_friction(mut self, friction: f64) -> Result<Self, ConfigError> {
        if !(friction > 0.0 && friction <= 1.0) {
            return Err(ConfigError::Friction { value: friction });
        }
        self.friction = Some(friction);
        Ok(self)
    }
}

/// Hit box component. Carries the entity's own collision category and the
/// categories it reacts to. Reaction is directional and asymmetric: this
/// entity's `on_hit` fires only if the other entity's category is in
/// `reacts_to`; the reverse direction is evaluated independently.
pub struct HitBox {
    pub category: HitCategory,
    pub reacts_to: Vec<HitCategory>,
    pub width: f64,
    pub height: f64,
    /// Offset of the box center from the entity's location.
    pub offset: DVec2,
    pub on_hit: Option<HitHandler>,
}

impl HitBox {
    /// Build a hit box. Dimensions must be strictly positive; anything
    /// else is a setup-code defect, not a runtime condition.
    pub fn new(
        category: HitCategory,
        reacts_to: Vec<HitCategory>,
        width: f64,
        height: f64,
    ) -> Result<Self, ConfigError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::HitBoxDimensions { width, height });
        }
        Ok(Self {
            category,
            reacts_to,
            width,
            height,
            offset: DVec2::ZERO,
            on_hit: None,
        })
    }

    pub fn with_offset(mut self, offset: DVec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_handler(mut self, handler: HitHandler) -> Self {
        self.on_hit = Some(handler);
        self
    }

    /// Absolute world-space rectangle for an entity located at `loc`.
    pub fn rect_at(&self, loc: DVec2) -> Rect {
        Rect::from_center(loc + self.offset, self.width, self.height)
    }
}

/// Timer component: counts down, fires its callback exactly once, then
/// detaches from the entity.
pub struct Timer {
    pub ticks: u32,
    pub on_timeout: EventHandler,
}

impl Timer {
    pub fn new(ticks: u32, on_timeout: EventHandler) -> Self {
        Self { ticks, on_timeout }
    }
}

/// Behavior component: a factory producing a fresh coroutine-style
/// instance, plus the currently running instance (or none). The behavior
/// system resumes `current` exactly once per tick and clears it on
/// completion; the next tick rebuilds from `root`.
pub struct Brain {
    pub root: BehaviorFactory,
    pub current: Option<Box<dyn Behavior>>,
}

impl Brain {
    pub fn new(root: BehaviorFactory) -> Self {
        Self {
            root,
            current: None,
        }
    }
}

/// Health component. When `value` drops to zero or below the health
/// system detaches the component and fires `on_death` once.
pub struct Health {
    pub value: f64,
    pub max_value: f64,
    pub on_death: EventHandler,
}

impl Health {
    pub fn new(max_value: f64, on_death: EventHandler) -> Self {
        Self {
            value: max_value,
            max_value,
            on_death,
        }
    }
}

/// Input intent flags, written by the input layer before each tick and
/// only read by the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Control {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    /// Pointer position in world space, used to aim fired projectiles.
    pub pointer: DVec2,
    /// Remaining ticks before another fire intent is honored.
    pub cooldown: u32,
}

/// One frame of an animation sequence. `texture` is an opaque handle
/// resolved by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Ticks this frame stays current before advancing.
    pub ticks: u32,
    pub texture: String,
    /// Index of the frame that follows this one.
    pub next: usize,
}

/// Animation table supplied by the content layer: sequence id to an
/// ordered list of frames.
pub type AnimationTable = HashMap<SequenceId, Vec<Frame>>;

/// Animation component. The simulation only steps `frame`/`ticks`; no
/// texture or material work happens here.
#[derive(Debug, Clone)]
pub struct Animation {
    pub table: Arc<AnimationTable>,
    pub sequence: SequenceId,
    pub ticks: u32,
    pub frame: usize,
}

impl Animation {
    pub fn new(table: Arc<AnimationTable>, sequence: SequenceId) -> Self {
        let ticks = table
            .get(&sequence)
            .and_then(|frames| frames.first())
            .map(|frame| frame.ticks)
            .unwrap_or(0);
        Self {
            table,
            sequence,
            ticks,
            frame: 0,
        }
    }

    /// Switch to another sequence, restarting it from frame zero. A no-op
    /// if the sequence is already active.
    pub fn set_sequence(&mut self, sequence: SequenceId) {
        if self.sequence == sequence {
            return;
        }
        self.sequence = sequence;
        self.frame = 0;
        self.ticks = self
            .table
            .get(&sequence)
            .and_then(|frames| frames.first())
            .map(|frame| frame.ticks)
            .unwrap_or(0);
    }

    /// Texture handle of the current frame, if the table has one.
    pub fn texture(&self) -> Option<&str> {
        self.table
            .get(&self.sequence)
            .and_then(|frames| frames.get(self.frame))
            .map(|frame| frame.texture.as_str())
    }
}

/// Marks a projectile and remembers who fired it. The shooter reference is
/// non-owning: it may dangle once the shooter is removed and must be
/// re-validated against the world before use.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub shooter: Entity,
}
