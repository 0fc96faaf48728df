use crate::deck::catalog::MysticalEffect;
use crate::foundation::core::{CARD_CENTER, CARD_HEIGHT, CARD_WIDTH, Point, Rgba8, Rng64};
use crate::geometry::shapes::circle;
use crate::render::plan::{CardScene, DrawOp};

/// Particles per session.
pub const PARTICLE_COUNT: usize = 50;
/// Lower alpha bound.
pub const ALPHA_MIN: f64 = 0.1;
/// Upper alpha bound.
pub const ALPHA_MAX: f64 = 0.7;

const ALPHA_JITTER: f64 = 0.005;
const STARFALL_GRAVITY: f64 = 0.1;
const SWIRL_ACCEL: f64 = 0.05;

/// One overlay particle in logical card units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Horizontal velocity per frame.
    pub vx: f64,
    /// Vertical velocity per frame.
    pub vy: f64,
    /// Dot radius.
    pub radius: f64,
    /// Opacity, kept in `[ALPHA_MIN, ALPHA_MAX]`.
    pub alpha: f64,
}

impl Particle {
    fn spawn(rng: &mut Rng64) -> Self {
        Self {
            x: rng.range_f64(0.0, CARD_WIDTH),
            y: rng.range_f64(0.0, CARD_HEIGHT),
            vx: rng.range_f64(-1.0, 1.0),
            vy: rng.range_f64(-1.0, 1.0),
            radius: rng.range_f64(1.0, 4.0),
            alpha: rng.range_f64(0.2, ALPHA_MAX),
        }
    }
}

/// A batch of particles driven by one deck's mystical effect.
///
/// `effect == None` runs the shared kinematics only.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    effect: Option<MysticalEffect>,
}

impl ParticleField {
    /// Fresh batch of [`PARTICLE_COUNT`] particles.
    pub fn new(effect: Option<MysticalEffect>, rng: &mut Rng64) -> Self {
        let particles = (0..PARTICLE_COUNT).map(|_| Particle::spawn(rng)).collect();
        Self { particles, effect }
    }

    /// Build from explicit particles.
    pub fn from_particles(effect: Option<MysticalEffect>, particles: Vec<Particle>) -> Self {
        Self { particles, effect }
    }

    /// Current particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Effect driving this field.
    pub fn effect(&self) -> Option<MysticalEffect> {
        self.effect
    }

    /// Advance one frame. `elapsed_ms` is time since the session started.
    pub fn step(&mut self, elapsed_ms: f64, rng: &mut Rng64) {
        let effect = self.effect;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.alpha = (p.alpha + rng.range_f64(-ALPHA_JITTER, ALPHA_JITTER))
                .clamp(ALPHA_MIN, ALPHA_MAX);

            if p.x < 0.0 || p.x > CARD_WIDTH {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, CARD_WIDTH);
            }
            // Starfall wraps off the bottom edge instead of bouncing.
            if effect == Some(MysticalEffect::Starfall) && p.y > CARD_HEIGHT {
                p.y = 0.0;
            } else if p.y < 0.0 || p.y > CARD_HEIGHT {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, CARD_HEIGHT);
            }

            match effect {
                Some(MysticalEffect::Starfall) => p.vy += STARFALL_GRAVITY,
                Some(MysticalEffect::AuraPulse) => {
                    p.radius = 2.0 * (elapsed_ms / 1000.0 + p.x).sin() + 2.0;
                }
                Some(MysticalEffect::CosmicSwirl) => {
                    let angle = (p.y - CARD_CENTER.y).atan2(p.x - CARD_CENTER.x);
                    p.vx += angle.cos() * SWIRL_ACCEL;
                    p.vy += angle.sin() * SWIRL_ACCEL;
                }
                Some(MysticalEffect::GoldenMist) => {
                    p.alpha = 0.3 * (elapsed_ms / 1500.0 + p.x).sin() + 0.4;
                }
                None => {}
            }
        }
    }

    /// Overlay display list: one filled dot per visible particle.
    pub fn overlay_scene(&self, accent: Rgba8) -> CardScene {
        let mut scene = CardScene::new();
        scene.extend(
            self.particles
                .iter()
                .filter(|p| p.radius > 0.0)
                .map(|p| DrawOp::FillPath {
                    path: circle(Point::new(p.x, p.y), p.radius),
                    color: accent.with_opacity(p.alpha),
                }),
        );
        scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/particles.rs"]
mod tests;
