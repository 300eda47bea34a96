// Host-side tests for the mount / frame / teardown lifecycle and the native
// fixed-rate ticker.

use particle_field::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::thread;
use std::time::Duration;

fn start(seed: u64, width: f64, height: f64) -> Animation {
    Animation::start(
        FieldConfig::default(),
        Bounds::new(width, height),
        &mut StdRng::seed_from_u64(seed),
    )
    .expect("default config is valid")
}

/// Stand-in for the host frame scheduler: keeps calling `frame` while the
/// animation asks for another one, and counts the requests.
struct Scheduler {
    requests: u32,
}

impl Scheduler {
    fn run(&mut self, animation: &mut Animation, surface: &mut RecordingSurface, frames: u32) {
        for _ in 0..frames {
            match animation.frame(surface) {
                Schedule::Next => self.requests += 1,
                Schedule::Stop => break,
            }
        }
    }
}

fn wait_for(mut cond: impl FnMut() -> bool) {
    for _ in 0..2000 {
        if cond() {
            return;
        }
        thread::sleep(Duration::from_millis(1));
    }
    panic!("condition not reached in time");
}

#[test]
fn start_sizes_field_to_viewport() {
    let anim = start(1, 1280.0, 720.0);
    assert!(anim.is_active());
    assert_eq!(anim.frames(), 0);
    assert_eq!(anim.field().len(), 80);
    assert_eq!(anim.field().bounds(), Bounds::new(1280.0, 720.0));
}

#[test]
fn each_frame_steps_and_redraws() {
    let mut anim = start(2, 800.0, 600.0);
    let before = anim.field().particles().to_vec();
    let mut surface = RecordingSurface::new();

    assert_eq!(anim.frame(&mut surface), Schedule::Next);
    assert_eq!(anim.frames(), 1);
    assert_eq!(surface.clears(), 1);
    assert_eq!(surface.circles(), 80);
    assert_ne!(anim.field().particles(), &before[..]);
}

#[test]
fn teardown_stops_scheduling_and_drawing() {
    let mut anim = start(3, 800.0, 600.0);
    let mut surface = RecordingSurface::new();
    let mut scheduler = Scheduler { requests: 0 };

    scheduler.run(&mut anim, &mut surface, 10);
    assert_eq!(scheduler.requests, 10);

    anim.teardown();
    surface.reset();
    let requests_at_teardown = scheduler.requests;
    scheduler.run(&mut anim, &mut surface, 10);

    assert_eq!(scheduler.requests, requests_at_teardown);
    assert!(surface.ops.is_empty());
    assert!(!anim.is_active());
    assert_eq!(anim.frames(), 10);
}

#[test]
fn resize_applies_before_next_frame() {
    let mut anim = start(4, 800.0, 600.0);
    let mut surface = RecordingSurface::new();
    anim.frame(&mut surface);

    let positions = anim.field().particles().to_vec();
    anim.resize(Bounds::new(640.0, 480.0));
    assert_eq!(anim.field().bounds(), Bounds::new(640.0, 480.0));
    assert_eq!(anim.field().particles(), &positions[..]);

    surface.reset();
    anim.frame(&mut surface);
    assert_eq!(surface.ops[0], DrawOp::Clear(Bounds::new(640.0, 480.0)));
    assert!(anim
        .field()
        .particles()
        .iter()
        .all(|p| Bounds::new(640.0, 480.0).contains(p.position)));
}

#[test]
fn resize_after_teardown_is_ignored() {
    let mut anim = start(5, 800.0, 600.0);
    anim.teardown();
    anim.resize(Bounds::new(10.0, 10.0));
    assert_eq!(anim.field().bounds(), Bounds::new(800.0, 600.0));
}

#[test]
fn instances_are_independent() {
    let mut a = start(6, 800.0, 600.0);
    let b = start(6, 800.0, 600.0);
    a.frame(&mut RecordingSurface::new());
    a.teardown();
    assert!(b.is_active());
    assert_ne!(a.field().particles(), b.field().particles());
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn ticker_draws_until_stopped() {
    let ticker = Ticker::spawn(
        start(7, 800.0, 600.0),
        RecordingSurface::new(),
        Duration::from_millis(1),
    );
    wait_for(|| ticker.frames() >= 5);
    assert!(ticker.is_running());

    let (anim, surface) = ticker.stop().expect("render thread finished cleanly");
    assert!(!anim.is_active());
    assert_eq!(surface.clears() as u64, anim.frames());
    assert!(anim.frames() >= 5);
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn ticker_applies_posted_resize() {
    let ticker = Ticker::spawn(
        start(8, 800.0, 600.0),
        RecordingSurface::new(),
        Duration::from_millis(1),
    );
    wait_for(|| ticker.frames() >= 2);
    ticker.resize(Bounds::new(300.0, 200.0));
    let seen = ticker.frames();
    wait_for(|| ticker.frames() >= seen + 3);

    let (anim, surface) = ticker.stop().expect("render thread finished cleanly");
    assert_eq!(anim.field().bounds(), Bounds::new(300.0, 200.0));
    assert_eq!(
        surface.ops.iter().rev().find(|op| matches!(op, DrawOp::Clear(_))),
        Some(&DrawOp::Clear(Bounds::new(300.0, 200.0)))
    );
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn ticker_stops_when_animation_already_torn_down() {
    let mut anim = start(9, 800.0, 600.0);
    anim.teardown();
    let ticker = Ticker::spawn(anim, RecordingSurface::new(), Duration::from_millis(1));
    wait_for(|| !ticker.is_running());
    assert_eq!(ticker.frames(), 0);
    let (_, surface) = ticker.stop().expect("render thread finished cleanly");
    assert!(surface.ops.is_empty());
}
