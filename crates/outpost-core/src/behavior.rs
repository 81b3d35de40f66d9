//! Cooperative coroutine-style behaviors.
//!
//! A behavior is a resumable per-entity process. It is stepped exactly
//! once per tick by the behavior system, suspends by returning
//! [`Status::Running`], and completes with [`Outcome::Success`] or
//! [`Outcome::Fail`]. The engine is outcome-agnostic; the combinators
//! below are what interpret outcomes.
//!
//! There is no cancellation or finalizer contract: an instance is dropped
//! wholesale when its entity is removed or when a step faults, so
//! behaviors must be restartable from scratch using only live context.

use std::sync::Arc;

use hecs::{Entity, World};
use rand::RngCore;

/// Terminal result of a behavior instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Fail,
}

/// Result of resuming a behavior instance for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Suspended until the next tick.
    Running,
    /// Completed; the instance will not be resumed again.
    Done(Outcome),
}

/// Per-tick context handed to a behavior resumption. Live entities are
/// reached through world queries; `me` is the entity that owns the
/// instance.
pub struct BehaviorCtx<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut dyn RngCore,
    pub tick: u64,
    pub me: Entity,
}

/// A suspendable decision process, modeled as an explicit step function
/// holding its own saved state between ticks.
pub trait Behavior: Send + Sync {
    fn step(&mut self, ctx: &mut BehaviorCtx<'_>) -> Status;
}

/// Produces a fresh behavior instance. Shared so composites can rebuild
/// children on restart.
pub type BehaviorFactory = Arc<dyn Fn() -> Box<dyn Behavior> + Send + Sync>;

/// Runs children in order. A FAIL from any child immediately fails the
/// composite without running the rest; if every child succeeds, the
/// composite succeeds. When a child completes, the next child starts and
/// steps within the same tick.
pub fn sequence(children: Vec<BehaviorFactory>) -> BehaviorFactory {
    Arc::new(move || {
        Box::new(Sequence {
            children: children.clone(),
            index: 0,
            active: None,
        })
    })
}

/// Runs children in order. The first SUCCESS immediately succeeds the
/// composite without running the rest; if every child fails, the
/// composite fails.
pub fn choice(children: Vec<BehaviorFactory>) -> BehaviorFactory {
    Arc::new(move || {
        Box::new(Choice {
            children: children.clone(),
            index: 0,
            active: None,
        })
    })
}

struct Sequence {
    children: Vec<BehaviorFactory>,
    index: usize,
    active: Option<Box<dyn Behavior>>,
}

impl Behavior for Sequence {
    fn step(&mut self, ctx: &mut BehaviorCtx<'_>) -> Status {
        loop {
            if self.index >= self.children.len() {
                return Status::Done(Outcome::Success);
            }
            let child = self
                .active
                .get_or_insert_with(|| (self.children[self.index])());
            match child.step(ctx) {
                Status::Running => return Status::Running,
                Status::Done(Outcome::Fail) => {
                    self.active = None;
                    return Status::Done(Outcome::Fail);
                }
                Status::Done(Outcome::Success) => {
                    self.active = None;
                    self.index += 1;
                }
            }
        }
    }
}

struct Choice {
    children: Vec<BehaviorFactory>,
    index: usize,
    active: Option<Box<dyn Behavior>>,
}

impl Behavior for Choice {
    fn step(&mut self, ctx: &mut BehaviorCtx<'_>) -> Status {
        loop {
            if self.index >= self.children.len() {
                return Status::Done(Outcome::Fail);
            }
            let child = self
                .active
                .get_or_insert_with(|| (self.children[self.index])());
            match child.step(ctx) {
                Status::Running => return Status::Running,
                Status::Done(Outcome::Success) => {
                    self.active = None;
                    return Status::Done(Outcome::Success);
                }
                Status::Done(Outcome::Fail) => {
                    self.active = None;
                    self.index += 1;
                }
            }
        }
    }
}
