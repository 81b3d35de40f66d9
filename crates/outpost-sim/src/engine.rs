//! Simulation engine — scheduler and tick loop.
//!
//! `SimEngine` owns the shared context and an ordered pipeline of
//! systems. Each external `tick()` call runs every system once, in
//! registration order, then returns a snapshot for the presentation
//! layer. Registration order defines simulation semantics and is chosen
//! by setup code, not here.

use std::panic::{catch_unwind, AssertUnwindSafe};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use outpost_core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use outpost_core::state::RenderSnapshot;
use outpost_core::types::{Rect, SimTime};

use crate::context::SimContext;
use crate::systems;

/// A per-tick system: stateless, receives the shared context and the
/// (optionally pre-filtered) live entity list.
pub type SystemFn = fn(&mut SimContext, &[Entity]);

/// Collects the sub-collection of entities a filtered system runs over.
pub type FilterFn = fn(&World) -> Vec<Entity>;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// World rectangle for the boundary system.
    pub bounds: Rect,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: Rect::from_center(glam::DVec2::ZERO, WORLD_WIDTH, WORLD_HEIGHT),
        }
    }
}

#[derive(Clone, Copy)]
struct SystemEntry {
    name: &'static str,
    run: SystemFn,
    filter: Option<FilterFn>,
}

/// The simulation engine. Owns the ECS world (inside the context) and the
/// system pipeline.
pub struct SimEngine {
    ctx: SimContext,
    systems: Vec<SystemEntry>,
}

impl SimEngine {
    /// Create a new engine with an empty pipeline.
    pub fn new(config: SimConfig) -> Self {
        Self {
            ctx: SimContext {
                world: World::new(),
                rng: ChaCha8Rng::seed_from_u64(config.seed),
                time: SimTime::default(),
                bounds: config.bounds,
            },
            systems: Vec::new(),
        }
    }

    /// Append a system to the pipeline; it will run over the full live
    /// set each tick.
    pub fn register_system(&mut self, name: &'static str, run: SystemFn) {
        self.systems.push(SystemEntry {
            name,
            run,
            filter: None,
        });
    }

    /// Append a system restricted to the sub-collection produced by
    /// `filter` (e.g. only entities with a control component).
    pub fn register_system_filtered(
        &mut self,
        name: &'static str,
        run: SystemFn,
        filter: FilterFn,
    ) {
        self.systems.push(SystemEntry {
            name,
            run,
            filter: Some(filter),
        });
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    ///
    /// Systems run synchronously in registration order; each runs to
    /// completion before the next begins. The entity list is collected
    /// immediately before each system, so entities removed by an earlier
    /// system this tick are already excluded. A panicking system is
    /// logged and skipped for the tick; the simulation continues.
    pub fn tick(&mut self) -> RenderSnapshot {
        for index in 0..self.systems.len() {
            let SystemEntry { name, run, filter } = self.systems[index];

            let ents = match filter {
                Some(collect) => collect(&self.ctx.world),
                None => live_entities(&self.ctx.world),
            };

            let ctx = &mut self.ctx;
            let outcome = catch_unwind(AssertUnwindSafe(|| run(ctx, &ents)));
            if outcome.is_err() {
                tracing::error!(
                    system = name,
                    tick = self.ctx.time.tick,
                    "system panicked; skipping it for this tick"
                );
            }
        }

        self.ctx.time.advance();
        systems::snapshot::build(&self.ctx)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.ctx.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.ctx.world
    }

    /// Get a mutable reference to the ECS world (setup and input code).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.ctx.world
    }

    /// Get a mutable reference to the shared context.
    pub fn context_mut(&mut self) -> &mut SimContext {
        &mut self.ctx
    }
}

/// All live entities, in world iteration order.
pub fn live_entities(world: &World) -> Vec<Entity> {
    world.iter().map(|entity_ref| entity_ref.entity()).collect()
}
