//! The whole tree: one clock, one projection, lights, garland and topper.
//!
//! A frame is split into `update` (advance clock, loudness and twinkle) and
//! `render` (emit draw commands for the current state), so that the state
//! machine can be driven without a real drawing surface.

use super::clock::AnimationClock;
use super::config::SceneConfig;
use super::constants::LOUDNESS_MAX;
use super::draw::DrawCommand;
use super::error::SceneError;
use super::feed::LoudnessSource;
use super::garland::GarlandCurve;
use super::particles::ParticleField;
use super::projector::{Projector, Surface};
use super::topper::Topper;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Scene {
    projector: Projector,
    particles: ParticleField,
    garland: GarlandCurve,
    topper: Topper,
    clock: AnimationClock,
    loudness: f32,
    time_ms: f64,
}

impl Scene {
    /// Validate `config` and scatter the lights, seeded from `config.seed`
    /// or from entropy when no seed is given.
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self, SceneError> {
        config.validate()?;
        let particles = ParticleField::initialize(&config.lights, &config.tree, rng);
        log::info!(
            "[scene] lights={} height={} radius={} focal={} strands={}x{}",
            particles.len(),
            config.tree.height,
            config.tree.radius,
            config.tree.focal_length,
            config.garland.strands,
            config.garland.segments + 1
        );
        Ok(Self {
            projector: Projector::new(config.tree.focal_length, config.tree.top_anchor_fraction),
            particles,
            garland: GarlandCurve::new(&config.garland, &config.tree),
            topper: Topper::new(&config.topper),
            clock: AnimationClock::new(0.0, config.rotation_step),
            loudness: 0.0,
            time_ms: 0.0,
        })
    }

    pub fn rotation(&self) -> f64 {
        self.clock.rotation()
    }

    pub fn loudness(&self) -> f32 {
        self.loudness
    }

    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn garland(&self) -> &GarlandCurve {
        &self.garland
    }

    pub fn topper(&self) -> &Topper {
        &self.topper
    }

    /// Step the animation state by one frame. `loudness` of `None` keeps the
    /// previous reading.
    pub fn update(&mut self, time_ms: f64, loudness: Option<f32>) {
        self.time_ms = time_ms;
        self.clock.tick();
        if let Some(level) = loudness {
            self.loudness = level.clamp(0.0, LOUDNESS_MAX);
        }
        self.particles.twinkle();
    }

    /// Draw commands for the current state: clear, garland, lights, topper.
    pub fn render(&mut self, surface: Surface, out: &mut Vec<DrawCommand>) {
        let rotation = self.clock.rotation();
        out.push(DrawCommand::Clear {
            width: surface.width,
            height: surface.height,
        });
        self.garland.draw(
            self.time_ms,
            rotation,
            self.loudness,
            &self.projector,
            surface,
            out,
        );
        self.particles
            .draw(rotation, self.loudness, &self.projector, surface, out);

        let anchor = self.topper.anchor_for(self.projector.anchor(surface));
        let glow = self.topper.glow_intensity(self.time_ms, self.loudness);
        out.push(self.topper.draw(anchor, self.topper.outer_radius(), glow));
    }

    /// One full tick: sample `feed`, update, then render into `out` (cleared first).
    pub fn frame(
        &mut self,
        time_ms: f64,
        surface: Surface,
        feed: &mut dyn LoudnessSource,
        out: &mut Vec<DrawCommand>,
    ) {
        out.clear();
        let level = feed.sample();
        self.update(time_ms, level);
        self.render(surface, out);
    }
}
