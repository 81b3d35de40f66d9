//! Small reusable behaviors for composition.

use std::sync::Arc;

use outpost_core::behavior::{Behavior, BehaviorCtx, BehaviorFactory, Outcome, Status};

/// Suspend for a fixed number of ticks, then succeed.
pub fn hold(ticks: u32) -> BehaviorFactory {
    Arc::new(move || Box::new(Hold { remaining: ticks }))
}

struct Hold {
    remaining: u32,
}

impl Behavior for Hold {
    fn step(&mut self, _ctx: &mut BehaviorCtx<'_>) -> Status {
        if self.remaining == 0 {
            return Status::Done(Outcome::Success);
        }
        self.remaining -= 1;
        Status::Running
    }
}
