//! Snapshot builder: queries the world and produces the serializable
//! per-tick view. Read-only — it never modifies the world.

use outpost_core::components::{Animation, Health, Position};
use outpost_core::state::{PoseView, RenderSnapshot};

use crate::context::SimContext;

/// Build a complete `RenderSnapshot` from the current world state.
pub fn build(ctx: &SimContext) -> RenderSnapshot {
    let world = &ctx.world;
    let mut poses: Vec<PoseView> = Vec::new();

    for (entity, pos) in world.query::<&Position>().iter() {
        let texture = world
            .get::<&Animation>(entity)
            .ok()
            .and_then(|anim| anim.texture().map(str::to_owned));
        let health = world
            .get::<&Health>(entity)
            .ok()
            .map(|health| (health.value / health.max_value).clamp(0.0, 1.0));

        poses.push(PoseView {
            id: entity.to_bits().get(),
            loc: pos.loc,
            dir: pos.dir,
            texture,
            health,
        });
    }

    // Stable order for consumers and for determinism checks.
    poses.sort_by_key(|pose| pose.id);

    RenderSnapshot {
        tick: ctx.time.tick,
        poses,
    }
}
