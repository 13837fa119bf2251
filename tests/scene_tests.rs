// Host-side tests for frame orchestration.

use tree_web::core::{
    ClockState, Constant, DrawCommand, LoudnessSource, Scene, SceneConfig, SceneError, Silence,
    Surface,
};

fn scene() -> Scene {
    Scene::new(&SceneConfig::with_seed(42)).expect("default scene is valid")
}

/// Replays a fixed list of readings, then reports nothing.
struct Scripted(Vec<Option<f32>>);

impl LoudnessSource for Scripted {
    fn sample(&mut self) -> Option<f32> {
        if self.0.is_empty() {
            None
        } else {
            self.0.remove(0)
        }
    }
}

#[test]
fn clock_starts_idle_and_runs_after_first_frame() {
    let mut s = scene();
    assert_eq!(s.clock().state(), ClockState::Idle);
    assert_eq!(s.rotation(), 0.0);
    let mut out = Vec::new();
    s.frame(16.0, Surface::new(800.0, 600.0), &mut Silence, &mut out);
    assert_eq!(s.clock().state(), ClockState::Running);
    assert_eq!(s.clock().frames(), 1);
}

#[test]
fn rotation_decreases_by_exact_steps() {
    let cfg = SceneConfig::with_seed(1);
    let mut s = Scene::new(&cfg).expect("valid");
    let n = 10_000u64;
    for i in 0..n {
        s.update(i as f64 * 16.0, None);
    }
    let expected = -(n as f64) * cfg.rotation_step;
    assert!((s.rotation() - expected).abs() < 1e-9);
}

#[test]
fn loudness_is_zero_without_audio_and_keeps_last_reading() {
    let mut s = scene();
    let surface = Surface::new(800.0, 600.0);
    let mut out = Vec::new();
    s.frame(0.0, surface, &mut Silence, &mut out);
    assert_eq!(s.loudness(), 0.0);

    let mut feed = Scripted(vec![Some(80.0), None, Some(300.0)]);
    s.frame(16.0, surface, &mut feed, &mut out);
    assert_eq!(s.loudness(), 80.0);
    s.frame(32.0, surface, &mut feed, &mut out);
    assert_eq!(s.loudness(), 80.0);
    s.frame(48.0, surface, &mut feed, &mut out);
    assert_eq!(s.loudness(), 255.0);
}

#[test]
fn frame_draws_garland_then_lights_then_topper() {
    let mut s = scene();
    let cfg = SceneConfig::default();
    let mut out = Vec::new();
    s.frame(1000.0, Surface::new(1280.0, 720.0), &mut Constant(40.0), &mut out);

    let strands = cfg.garland.strands;
    let lights = cfg.lights.count;
    assert_eq!(out.len(), 1 + strands + lights + 1);
    assert!(matches!(out[0], DrawCommand::Clear { width, height } if width == 1280.0 && height == 720.0));
    assert!(out[1..=strands]
        .iter()
        .all(|c| matches!(c, DrawCommand::Path { .. })));
    assert!(out[1 + strands..1 + strands + lights]
        .iter()
        .all(|c| matches!(c, DrawCommand::Circle { .. })));
    match out.last() {
        Some(DrawCommand::Polygon { points, .. }) => assert_eq!(points.len(), 10),
        other => panic!("expected topper last, got {other:?}"),
    }
}

#[test]
fn frame_replaces_previous_commands() {
    let mut s = scene();
    let surface = Surface::new(640.0, 480.0);
    let mut out = Vec::new();
    s.frame(0.0, surface, &mut Silence, &mut out);
    let n = out.len();
    s.frame(16.0, surface, &mut Silence, &mut out);
    assert_eq!(out.len(), n);
}

#[test]
fn topper_sits_above_apex_and_follows_resize() {
    let mut s = scene();
    let mut out = Vec::new();
    let star_center = |out: &Vec<DrawCommand>| match out.last() {
        Some(DrawCommand::Polygon { points, .. }) => {
            points.iter().copied().sum::<glam::Vec2>() / points.len() as f32
        }
        other => panic!("expected topper, got {other:?}"),
    };

    s.frame(0.0, Surface::new(800.0, 600.0), &mut Silence, &mut out);
    let a = star_center(&out);
    assert!((a.x - 400.0).abs() < 1e-3);
    assert!(a.y < 120.0);

    s.frame(16.0, Surface::new(1600.0, 1000.0), &mut Silence, &mut out);
    let b = star_center(&out);
    assert!((b.x - 800.0).abs() < 1e-3);
    assert!(((b.y - a.y) - 80.0).abs() < 1e-3);
}

#[test]
fn louder_audio_raises_topper_glow_and_garland_lightness() {
    let s = scene();
    for time in [0.0, 400.0, 12_345.0] {
        assert!(s.topper().glow_intensity(time, 255.0) > s.topper().glow_intensity(time, 0.0));
    }
    assert!(s.garland().lightness(255.0) > s.garland().lightness(0.0));
}

#[test]
fn topper_glow_breathes_without_audio() {
    let s = scene();
    let glows: Vec<f32> = (0..200)
        .map(|i| s.topper().glow_intensity(i as f64 * 10.0, 0.0))
        .collect();
    let min = glows.iter().copied().fold(f32::INFINITY, f32::min);
    let max = glows.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    assert!(min >= 6.0 - 1e-3 && max <= 18.0 + 1e-3);
    assert!(max - min > 10.0);
}

#[test]
fn invalid_configuration_fails_before_the_loop() {
    let mut cfg = SceneConfig::default();
    cfg.lights.count = 0;
    assert!(matches!(Scene::new(&cfg), Err(SceneError::EmptyParticleField)));

    let mut cfg = SceneConfig::default();
    cfg.tree.radius = 400.0;
    assert!(matches!(
        Scene::new(&cfg),
        Err(SceneError::RadiusNearFocalLength { .. })
    ));

    let mut cfg = SceneConfig::default();
    cfg.garland.segments = 0;
    assert!(matches!(Scene::new(&cfg), Err(SceneError::EmptyGarland)));

    let mut cfg = SceneConfig::default();
    cfg.lights.alpha_min = 1.2;
    assert!(matches!(
        Scene::new(&cfg),
        Err(SceneError::InvertedRange { name: "light alpha", .. })
    ));
}

#[test]
fn seeded_scenes_render_identically() {
    let surface = Surface::new(800.0, 600.0);
    let mut a = scene();
    let mut b = scene();
    let (mut out_a, mut out_b) = (Vec::new(), Vec::new());
    for i in 0..5 {
        let t = i as f64 * 16.7;
        a.frame(t, surface, &mut Constant(30.0), &mut out_a);
        b.frame(t, surface, &mut Constant(30.0), &mut out_b);
        assert_eq!(out_a, out_b);
    }
}

#[test]
fn next_tick_is_queued_even_when_the_frame_panics() {
    use std::cell::{Cell, RefCell};
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use tree_web::core::drive_tick;

    let state = RefCell::new(0u32);
    let queued = Cell::new(0u32);
    let result = catch_unwind(AssertUnwindSafe(|| {
        drive_tick(&state, || queued.set(queued.get() + 1), |_| panic!("paint threw"));
    }));
    assert!(result.is_err());
    assert_eq!(queued.get(), 1);

    // The loop keeps going on the next tick.
    assert!(drive_tick(&state, || queued.set(queued.get() + 1), |n| *n += 1));
    assert_eq!(queued.get(), 2);
    assert_eq!(*state.borrow(), 1);
}

#[test]
fn busy_state_skips_the_frame_but_keeps_the_loop() {
    use std::cell::{Cell, RefCell};
    use tree_web::core::drive_tick;

    let state = RefCell::new(0u32);
    let queued = Cell::new(false);
    let held = state.borrow_mut();
    let ran = drive_tick(&state, || queued.set(true), |n| *n += 1);
    drop(held);
    assert!(!ran);
    assert!(queued.get());
    assert_eq!(*state.borrow(), 0);
}
