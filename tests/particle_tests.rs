// Host-side tests for the twinkling light field.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_web::core::{
    loudness_brightness, Color, DrawCommand, LightParams, ParticleField, Projector, Surface,
    TreeShape,
};

fn field(seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::initialize(&LightParams::default(), &TreeShape::default(), &mut rng)
}

#[test]
fn same_seed_scatters_identically() {
    let a = field(7);
    let b = field(7);
    assert_eq!(a.particles(), b.particles());
    assert_ne!(a.particles(), field(8).particles());
}

#[test]
fn lights_sit_inside_the_cone() {
    let shape = TreeShape::default();
    let params = LightParams::default();
    let f = field(1);
    assert_eq!(f.len(), params.count);
    for p in f.particles() {
        let h = p.base.y / shape.height;
        assert!((0.0..=1.0).contains(&h));
        let r = (p.base.x * p.base.x + p.base.z * p.base.z).sqrt();
        assert!((r - h * shape.radius).abs() < 1e-2, "radius {r} off cone at h={h}");
        assert!(p.size >= params.size_min && p.size <= params.size_max);
        assert!(p.alpha >= params.alpha_min && p.alpha <= params.alpha_max);
        let speed = p.speed.abs();
        assert!(speed >= params.speed_min && speed <= params.speed_max);
    }
}

#[test]
fn both_twinkle_directions_are_used() {
    let f = field(3);
    assert!(f.particles().iter().any(|p| p.speed > 0.0));
    assert!(f.particles().iter().any(|p| p.speed < 0.0));
}

#[test]
fn alpha_stays_within_one_step_of_band() {
    let params = LightParams::default();
    let mut f = field(11);
    for _ in 0..5_000 {
        let before: Vec<_> = f.particles().iter().map(|p| (p.alpha, p.speed)).collect();
        f.twinkle();
        for (p, (alpha0, speed0)) in f.particles().iter().zip(before) {
            let eps = speed0.abs() + 1e-4;
            assert!(p.alpha >= params.alpha_min - eps && p.alpha <= params.alpha_max + eps);
            assert!((p.alpha - (alpha0 + speed0)).abs() < 1e-6);
            let crossed = p.alpha > params.alpha_max || p.alpha < params.alpha_min;
            assert_eq!(p.speed == -speed0, crossed);
        }
    }
}

#[test]
fn draw_emits_back_to_front() {
    let mut f = field(5);
    let projector = Projector::new(600.0, 0.2);
    let surface = Surface::new(1024.0, 768.0);
    for rotation in [0.0, -0.5, -1.7, -3.0] {
        let mut out = Vec::new();
        f.draw(rotation, 0.0, &projector, surface, &mut out);
        assert_eq!(out.len(), f.len());

        let order = f.draw_order();
        let rotated = f.rotated_positions();
        for pair in order.windows(2) {
            assert!(rotated[pair[0]].z >= rotated[pair[1]].z);
        }
        // farther lights are drawn smaller
        let first = &f.particles()[order[0]];
        match &out[0] {
            DrawCommand::Circle { radius, .. } => assert!(*radius <= first.size + 1e-4),
            other => panic!("expected circle, got {other:?}"),
        }
    }
}

#[test]
fn draw_does_not_move_stored_positions() {
    let mut f = field(9);
    let before: Vec<_> = f.particles().iter().map(|p| p.base).collect();
    let mut out = Vec::new();
    f.advance(-2.0, 100.0, &Projector::new(600.0, 0.2), Surface::new(640.0, 480.0), &mut out);
    let after: Vec<_> = f.particles().iter().map(|p| p.base).collect();
    assert_eq!(before, after);
}

#[test]
fn loudness_brightens_lights() {
    assert_eq!(loudness_brightness(0.0), 0.5);
    assert!(loudness_brightness(255.0) > loudness_brightness(100.0));

    let mut f = field(2);
    let projector = Projector::new(600.0, 0.2);
    let surface = Surface::new(800.0, 600.0);
    let alpha_of = |cmd: &DrawCommand| match cmd {
        DrawCommand::Circle {
            fill: Color::Rgba { a, .. },
            ..
        } => *a,
        other => panic!("unexpected {other:?}"),
    };
    let mut quiet = Vec::new();
    f.draw(0.0, 0.0, &projector, surface, &mut quiet);
    let mut loud = Vec::new();
    f.draw(0.0, 255.0, &projector, surface, &mut loud);
    for (q, l) in quiet.iter().zip(&loud) {
        assert!(alpha_of(l) > alpha_of(q));
    }
}
