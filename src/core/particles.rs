//! Twinkling lights scattered through the tree cone.

use super::config::{LightParams, TreeShape};
use super::constants::{LIGHT_LOUDNESS_BASE, LIGHT_LOUDNESS_DIVISOR};
use super::draw::{Color, DrawCommand, Glow};
use super::projector::{Projector, Surface};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Unrotated position in tree space.
    pub base: Vec3,
    pub size: f32,
    pub alpha: f32,
    /// Signed alpha change per frame.
    pub speed: f32,
}

impl Particle {
    /// Step alpha once and reverse direction after leaving `[lo, hi]`.
    /// Alpha is not clamped, so it may sit one step outside the band.
    #[inline]
    pub fn twinkle(&mut self, lo: f32, hi: f32) {
        self.alpha += self.speed;
        if self.alpha > hi || self.alpha < lo {
            self.speed = -self.speed;
        }
    }

    /// Base position spun about the vertical axis.
    #[inline]
    pub fn rotated(&self, cos: f32, sin: f32) -> Vec3 {
        Vec3::new(
            self.base.x * cos - self.base.z * sin,
            self.base.y,
            self.base.x * sin + self.base.z * cos,
        )
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    params: LightParams,
    // per-frame scratch
    rotated: Vec<Vec3>,
    order: Vec<usize>,
}

impl ParticleField {
    /// Scatter `params.count` lights. Each light picks a height fraction `h`,
    /// sits on a circle of radius `h * shape.radius` at depth `h * shape.height`.
    pub fn initialize<R: Rng + ?Sized>(
        params: &LightParams,
        shape: &TreeShape,
        rng: &mut R,
    ) -> Self {
        let particles = (0..params.count)
            .map(|_| {
                let h: f32 = rng.gen();
                let radius = h * shape.radius;
                let angle = rng.gen::<f32>() * TAU;
                let speed = rng.gen_range(params.speed_min..=params.speed_max);
                Particle {
                    base: Vec3::new(angle.cos() * radius, h * shape.height, angle.sin() * radius),
                    size: rng.gen_range(params.size_min..=params.size_max),
                    alpha: rng.gen_range(params.alpha_min..=params.alpha_max),
                    speed: if rng.gen::<bool>() { speed } else { -speed },
                }
            })
            .collect::<Vec<_>>();
        let n = particles.len();
        Self {
            particles,
            params: params.clone(),
            rotated: Vec::with_capacity(n),
            order: Vec::with_capacity(n),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Indices of the particles in the order of the last `draw`, farthest first.
    pub fn draw_order(&self) -> &[usize] {
        &self.order
    }

    /// Rotated positions computed by the last `draw`, indexed like `particles()`.
    pub fn rotated_positions(&self) -> &[Vec3] {
        &self.rotated
    }

    /// Advance every light's opacity by one frame.
    pub fn twinkle(&mut self) {
        let (lo, hi) = (self.params.alpha_min, self.params.alpha_max);
        for p in &mut self.particles {
            p.twinkle(lo, hi);
        }
    }

    /// Emit one glowing circle per light, back to front.
    pub fn draw(
        &mut self,
        rotation: f64,
        loudness: f32,
        projector: &Projector,
        surface: Surface,
        out: &mut Vec<DrawCommand>,
    ) {
        let (sin, cos) = rotation.sin_cos();
        let (sin, cos) = (sin as f32, cos as f32);
        self.rotated.clear();
        self.rotated
            .extend(self.particles.iter().map(|p| p.rotated(cos, sin)));

        self.order.clear();
        self.order.extend(0..self.particles.len());
        let rotated = &self.rotated;
        self.order
            .sort_by(|&a, &b| rotated[b].z.total_cmp(&rotated[a].z));

        let brightness = loudness_brightness(loudness);
        out.reserve(self.order.len());
        for &i in &self.order {
            let p = &self.particles[i];
            let proj = projector.project(surface, self.rotated[i]);
            out.push(DrawCommand::Circle {
                center: proj.screen,
                radius: p.size * proj.scale,
                fill: Color::white_alpha(p.alpha * brightness),
                glow: Glow {
                    color: Color::WHITE,
                    blur: self.params.glow_blur * proj.scale,
                },
            });
        }
    }

    /// `twinkle` followed by `draw`.
    pub fn advance(
        &mut self,
        rotation: f64,
        loudness: f32,
        projector: &Projector,
        surface: Surface,
        out: &mut Vec<DrawCommand>,
    ) {
        self.twinkle();
        self.draw(rotation, loudness, projector, surface, out);
    }
}

/// Opacity multiplier for the lights: 0.5 at silence, ~1.0 at full scale.
#[inline]
pub fn loudness_brightness(loudness: f32) -> f32 {
    LIGHT_LOUDNESS_BASE + loudness / LIGHT_LOUDNESS_DIVISOR
}
