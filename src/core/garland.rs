//! Spiral garland wound around the tree.
//!
//! Every strand is recomputed from `(time, rotation, loudness)` each frame;
//! nothing here carries state between frames.

use super::config::{GarlandParams, TreeShape};
use super::draw::{Color, DrawCommand, Glow};
use super::projector::{Projector, Surface};
use glam::Vec3;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct StrandSample {
    pub index: usize,
    /// Degrees in `[0, 360)`.
    pub hue: f32,
    /// Percent.
    pub lightness: f32,
    pub points: Vec<Vec3>,
}

impl StrandSample {
    pub fn color(&self) -> Color {
        Color::Hsl {
            h: self.hue,
            s: 100.0,
            l: self.lightness,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GarlandCurve {
    params: GarlandParams,
    tree_radius: f32,
    tree_height: f32,
}

impl GarlandCurve {
    pub fn new(params: &GarlandParams, shape: &TreeShape) -> Self {
        Self {
            params: params.clone(),
            tree_radius: shape.radius,
            tree_height: shape.height,
        }
    }

    pub fn strands(&self) -> usize {
        self.params.strands
    }

    pub fn hue(&self, time_ms: f64, strand: usize) -> f32 {
        let spacing = self.params.hue_spacing as f64 * strand as f64;
        // the f32 cast can round 359.99.. up to 360
        ((time_ms * self.params.hue_speed + spacing).rem_euclid(360.0) as f32) % 360.0
    }

    pub fn lightness(&self, loudness: f32) -> f32 {
        self.params.lightness_base + loudness * self.params.lightness_gain
    }

    /// Sample one strand at `segments + 1` evenly spaced values of `t`.
    pub fn sample(&self, time_ms: f64, rotation: f64, loudness: f32, strand: usize) -> StrandSample {
        let p = &self.params;
        // Reduce the time-dependent phases in f64 before dropping to f32.
        let spin = (time_ms * p.speed * 0.001 + rotation).rem_euclid(TAU) as f32;
        let wave_phase = (time_ms * p.wave_speed * 0.001).rem_euclid(TAU) as f32;
        let wave_amp = p.amplitude + loudness * p.amplitude_gain;
        let offset = strand as f32 * p.strand_offset;
        let sweep = p.turns * std::f32::consts::TAU;

        let points = (0..=p.segments)
            .map(|i| {
                let t = i as f32 / p.segments as f32;
                let angle = t * sweep - spin;
                let wave = (wave_phase + t * p.wave_frequency).sin() * wave_amp;
                let radius = t * self.tree_radius + wave + offset;
                let (sin, cos) = angle.sin_cos();
                Vec3::new(cos * radius, t * self.tree_height, sin * radius)
            })
            .collect();

        StrandSample {
            index: strand,
            hue: self.hue(time_ms, strand),
            lightness: self.lightness(loudness),
            points,
        }
    }

    pub fn sample_all(&self, time_ms: f64, rotation: f64, loudness: f32) -> Vec<StrandSample> {
        (0..self.params.strands)
            .map(|j| self.sample(time_ms, rotation, loudness, j))
            .collect()
    }

    /// One stroked path per strand, glowing in the strand's own color.
    pub fn draw(
        &self,
        time_ms: f64,
        rotation: f64,
        loudness: f32,
        projector: &Projector,
        surface: Surface,
        out: &mut Vec<DrawCommand>,
    ) {
        for j in 0..self.params.strands {
            let strand = self.sample(time_ms, rotation, loudness, j);
            let color = strand.color();
            let points = strand
                .points
                .iter()
                .map(|&p| projector.project(surface, p).screen)
                .collect();
            out.push(DrawCommand::Path {
                points,
                stroke: color,
                line_width: self.params.line_width,
                glow: Glow {
                    color,
                    blur: self.params.glow_blur,
                },
            });
        }
    }
}
