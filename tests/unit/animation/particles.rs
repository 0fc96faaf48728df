use super::*;

const EFFECTS: [Option<MysticalEffect>; 5] = [
    None,
    Some(MysticalEffect::Starfall),
    Some(MysticalEffect::AuraPulse),
    Some(MysticalEffect::CosmicSwirl),
    Some(MysticalEffect::GoldenMist),
];

fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle {
        x,
        y,
        vx,
        vy,
        radius: 2.0,
        alpha: 0.5,
    }
}

#[test]
fn fresh_field_has_fifty_particles_in_bounds() {
    let mut rng = Rng64::new(3);
    for effect in EFFECTS {
        let field = ParticleField::new(effect, &mut rng);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..=CARD_WIDTH).contains(&p.x));
            assert!((0.0..=CARD_HEIGHT).contains(&p.y));
            assert!((ALPHA_MIN..=ALPHA_MAX).contains(&p.alpha));
            assert!((1.0..=4.0).contains(&p.radius));
        }
    }
}

#[test]
fn alpha_and_position_stay_bounded_over_many_steps() {
    for (seed, effect) in EFFECTS.into_iter().enumerate() {
        let mut rng = Rng64::new(seed as u64 + 11);
        let mut field = ParticleField::new(effect, &mut rng);
        for frame in 0..600 {
            field.step(frame as f64 * 1000.0 / 60.0, &mut rng);
            for p in field.particles() {
                assert!(
                    (ALPHA_MIN - 1e-9..=ALPHA_MAX + 1e-9).contains(&p.alpha),
                    "{effect:?} alpha {}",
                    p.alpha
                );
                assert!((0.0..=CARD_WIDTH).contains(&p.x), "{effect:?} x {}", p.x);
                assert!((0.0..=CARD_HEIGHT).contains(&p.y), "{effect:?} y {}", p.y);
            }
        }
    }
}

#[test]
fn crossing_an_edge_reverses_velocity() {
    let mut rng = Rng64::new(0);
    let mut field = ParticleField::from_particles(None, vec![particle(399.5, 10.0, 1.0, -20.0)]);
    field.step(0.0, &mut rng);
    let p = field.particles()[0];
    assert_eq!((p.x, p.vx), (CARD_WIDTH, -1.0));
    assert_eq!((p.y, p.vy), (0.0, 20.0));
}

#[test]
fn starfall_wraps_to_top_and_accelerates() {
    let mut rng = Rng64::new(0);
    let mut field = ParticleField::from_particles(
        Some(MysticalEffect::Starfall),
        vec![particle(100.0, 699.5, 0.0, 1.0)],
    );
    field.step(0.0, &mut rng);
    let p = field.particles()[0];
    assert_eq!(p.y, 0.0);
    assert!((p.vy - 1.1).abs() < 1e-12);
}

#[test]
fn aura_pulse_radius_follows_elapsed_time() {
    let mut rng = Rng64::new(0);
    let mut field = ParticleField::from_particles(
        Some(MysticalEffect::AuraPulse),
        vec![particle(10.0, 10.0, 0.0, 0.0)],
    );
    field.step(2500.0, &mut rng);
    let expected = 2.0 * (2.5f64 + 10.0).sin() + 2.0;
    assert!((field.particles()[0].radius - expected).abs() < 1e-12);
}

#[test]
fn golden_mist_replaces_alpha() {
    let mut rng = Rng64::new(0);
    let mut field = ParticleField::from_particles(
        Some(MysticalEffect::GoldenMist),
        vec![particle(0.0, 10.0, 0.0, 0.0)],
    );
    field.step(0.0, &mut rng);
    assert!((field.particles()[0].alpha - 0.4).abs() < 1e-12);
}

#[test]
fn cosmic_swirl_pushes_away_from_center() {
    let mut rng = Rng64::new(0);
    let mut field = ParticleField::from_particles(
        Some(MysticalEffect::CosmicSwirl),
        vec![particle(300.0, 350.0, 0.0, 0.0)],
    );
    field.step(0.0, &mut rng);
    let p = field.particles()[0];
    assert!((p.vx - 0.05).abs() < 1e-12);
    assert!(p.vy.abs() < 1e-12);
}

#[test]
fn overlay_draws_one_dot_per_visible_particle() {
    let accent = Rgba8::rgb(0x46, 0x82, 0xB4);
    let mut hidden = particle(5.0, 5.0, 0.0, 0.0);
    hidden.radius = 0.0;
    let field = ParticleField::from_particles(None, vec![particle(5.0, 5.0, 0.0, 0.0), hidden]);
    let scene = field.overlay_scene(accent);
    assert_eq!(scene.ops.len(), 1);
    match &scene.ops[0] {
        DrawOp::FillPath { color, .. } => assert_eq!(*color, accent.with_alpha(128)),
        other => panic!("unexpected op {other:?}"),
    }
}
