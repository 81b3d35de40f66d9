//! Tests for geometry, config validation, and behavior combinators.

use std::sync::{Arc, Mutex};

use glam::DVec2;
use hecs::World;
use rand::rngs::mock::StepRng;

use crate::behavior::{
    choice, sequence, Behavior, BehaviorCtx, BehaviorFactory, Outcome, Status,
};
use crate::components::{HitBox, Velocity};
use crate::enums::HitCategory;
use crate::error::ConfigError;
use crate::types::Rect;

// ---- Rect / Manifold ----

#[test]
fn test_overlap_scenario_rects() {
    // A = [0,10]x[0,10], B = [5,15]x[5,15] -> 5x5 intersection.
    let a = Rect::new(0.0, 10.0, 0.0, 10.0);
    let b = Rect::new(5.0, 15.0, 5.0, 15.0);

    let m = a.overlap(&b).expect("rects overlap");
    assert_eq!(m.left, 5.0);
    assert_eq!(m.right, 10.0);
    assert_eq!(m.bottom, 5.0);
    assert_eq!(m.top, 10.0);
    assert_eq!(m.width, 5.0);
    assert_eq!(m.height, 5.0);

    // Symmetric.
    assert_eq!(b.overlap(&a), a.overlap(&b));
}

#[test]
fn test_overlap_edge_touching_is_not_overlap() {
    let a = Rect::new(0.0, 10.0, 0.0, 10.0);
    let touching_right = Rect::new(10.0, 20.0, 0.0, 10.0);
    let touching_top = Rect::new(0.0, 10.0, 10.0, 20.0);
    let corner = Rect::new(10.0, 20.0, 10.0, 20.0);

    assert!(a.overlap(&touching_right).is_none());
    assert!(a.overlap(&touching_top).is_none());
    assert!(a.overlap(&corner).is_none());
}

#[test]
fn test_overlap_degenerate_zero_size() {
    let a = Rect::new(0.0, 10.0, 0.0, 10.0);
    let point_inside = Rect::point(DVec2::new(5.0, 5.0));

    // Zero-area rects can never overlap with strictly positive area.
    assert!(a.overlap(&point_inside).is_none());
    assert!(point_inside.overlap(&point_inside).is_none());
}

#[test]
fn test_rect_from_center() {
    let r = Rect::from_center(DVec2::new(5.0, 5.0), 10.0, 10.0);
    assert_eq!(r, Rect::new(0.0, 10.0, 0.0, 10.0));
    assert_eq!(r.width(), 10.0);
    assert_eq!(r.height(), 10.0);
}

// ---- Config validation ----

#[test]
fn test_hitbox_rejects_non_positive_dimensions() {
    assert!(matches!(
        HitBox::new(HitCategory::Asteroid, vec![], 0.0, 10.0),
        Err(ConfigError::HitBoxDimensions { .. })
    ));
    assert!(matches!(
        HitBox::new(HitCategory::Asteroid, vec![], 10.0, -1.0),
        Err(ConfigError::HitBoxDimensions { .. })
    ));
    assert!(HitBox::new(HitCategory::Asteroid, vec![], 10.0, 10.0).is_ok());
}

#[test]
fn test_friction_rejects_out_of_range() {
    assert!(matches!(
        Velocity::new(1.0).with_friction(0.0),
        Err(ConfigError::Friction { .. })
    ));
    assert!(matches!(
        Velocity::new(1.0).with_friction(1.5),
        Err(ConfigError::Friction { .. })
    ));
    assert!(Velocity::new(1.0).with_friction(1.0).is_ok());
    assert!(Velocity::new(1.0).with_friction(0.9).is_ok());
}

// ---- Combinators ----

/// Scripted behavior: suspends `ticks` times, logs each resumption, then
/// completes with a fixed outcome.
struct Scripted {
    name: &'static str,
    ticks: u32,
    outcome: Outcome,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl Behavior for Scripted {
    fn step(&mut self, _ctx: &mut BehaviorCtx<'_>) -> Status {
        self.log.lock().unwrap().push(self.name);
        if self.ticks == 0 {
            Status::Done(self.outcome)
        } else {
            self.ticks -= 1;
            Status::Running
        }
    }
}

fn scripted(
    name: &'static str,
    ticks: u32,
    outcome: Outcome,
    log: &Arc<Mutex<Vec<&'static str>>>,
) -> BehaviorFactory {
    let log = Arc::clone(log);
    Arc::new(move || {
        Box::new(Scripted {
            name,
            ticks,
            outcome,
            log: Arc::clone(&log),
        })
    })
}

/// Drive a factory-built instance to completion, one step per "tick".
fn run_to_completion(factory: &BehaviorFactory) -> (Outcome, u32) {
    let mut world = World::new();
    let me = world.spawn(());
    let mut rng = StepRng::new(0, 1);
    let mut instance = factory();

    let mut steps = 0;
    loop {
        steps += 1;
        let mut ctx = BehaviorCtx {
            world: &mut world,
            rng: &mut rng,
            tick: steps as u64,
            me,
        };
        if let Status::Done(outcome) = instance.step(&mut ctx) {
            return (outcome, steps);
        }
        assert!(steps < 1000, "behavior never completed");
    }
}

#[test]
fn test_sequence_fail_short_circuits() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let composite = sequence(vec![
        scripted("b1", 0, Outcome::Fail, &log),
        scripted("b2", 0, Outcome::Success, &log),
    ]);

    let (outcome, _) = run_to_completion(&composite);
    assert_eq!(outcome, Outcome::Fail);
    assert_eq!(*log.lock().unwrap(), vec!["b1"], "b2 must never run");
}

#[test]
fn test_sequence_runs_all_then_fails_on_last() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let composite = sequence(vec![
        scripted("b1", 0, Outcome::Success, &log),
        scripted("b2", 0, Outcome::Fail, &log),
    ]);

    let (outcome, _) = run_to_completion(&composite);
    assert_eq!(outcome, Outcome::Fail);
    assert_eq!(*log.lock().unwrap(), vec!["b1", "b2"]);
}

#[test]
fn test_sequence_all_success() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let composite = sequence(vec![
        scripted("b1", 2, Outcome::Success, &log),
        scripted("b2", 1, Outcome::Success, &log),
    ]);

    let (outcome, steps) = run_to_completion(&composite);
    assert_eq!(outcome, Outcome::Success);
    // b1 suspends twice (3 resumptions); b2 starts the tick b1 completes,
    // suspends once, and finishes on the next tick: 4 composite steps.
    assert_eq!(steps, 4);
    assert_eq!(*log.lock().unwrap(), vec!["b1", "b1", "b1", "b2", "b2"]);
}

#[test]
fn test_choice_success_short_circuits() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let composite = choice(vec![
        scripted("b1", 0, Outcome::Success, &log),
        scripted("b2", 0, Outcome::Success, &log),
    ]);

    let (outcome, _) = run_to_completion(&composite);
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(*log.lock().unwrap(), vec!["b1"], "b2 must never run");
}

#[test]
fn test_choice_falls_through_on_fail() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let composite = choice(vec![
        scripted("b1", 0, Outcome::Fail, &log),
        scripted("b2", 0, Outcome::Fail, &log),
        scripted("b3", 0, Outcome::Success, &log),
    ]);

    let (outcome, steps) = run_to_completion(&composite);
    assert_eq!(outcome, Outcome::Success);
    // Fall-through happens within one tick, like generator delegation.
    assert_eq!(steps, 1);
    assert_eq!(*log.lock().unwrap(), vec!["b1", "b2", "b3"]);
}

#[test]
fn test_choice_all_fail() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let composite = choice(vec![
        scripted("b1", 0, Outcome::Fail, &log),
        scripted("b2", 0, Outcome::Fail, &log),
    ]);

    let (outcome, _) = run_to_completion(&composite);
    assert_eq!(outcome, Outcome::Fail);
}

#[test]
fn test_empty_composites() {
    let (outcome, steps) = run_to_completion(&sequence(vec![]));
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(steps, 1);

    let (outcome, _) = run_to_completion(&choice(vec![]));
    assert_eq!(outcome, Outcome::Fail);
}

#[test]
fn test_nested_composites() {
    let log = Arc::new(Mutex::new(Vec::new()));
    // choice(sequence(ok, fail), sequence(ok, ok)) -> Success
    let composite = choice(vec![
        sequence(vec![
            scripted("a1", 0, Outcome::Success, &log),
            scripted("a2", 0, Outcome::Fail, &log),
        ]),
        sequence(vec![
            scripted("b1", 0, Outcome::Success, &log),
            scripted("b2", 0, Outcome::Success, &log),
        ]),
    ]);

    let (outcome, _) = run_to_completion(&composite);
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(*log.lock().unwrap(), vec!["a1", "a2", "b1", "b2"]);
}
