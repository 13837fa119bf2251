//! Gold star on top of the tree.

use super::config::TopperParams;
use super::constants::{TOPPER_FILL, TOPPER_GLOW, TOPPER_POINTS};
use super::draw::{Color, DrawCommand, Glow};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

pub const STAR_VERTICES: usize = TOPPER_POINTS * 2;

#[derive(Clone, Debug)]
pub struct Topper {
    params: TopperParams,
}

impl Topper {
    pub fn new(params: &TopperParams) -> Self {
        Self {
            params: params.clone(),
        }
    }

    /// Where the star sits relative to the tree apex.
    pub fn anchor_for(&self, apex: Vec2) -> Vec2 {
        Vec2::new(apex.x, apex.y - self.params.lift)
    }

    pub fn outer_radius(&self) -> f32 {
        self.params.radius
    }

    /// Glow blur: a steady breathing pulse plus the audio contribution.
    pub fn glow_intensity(&self, time_ms: f64, loudness: f32) -> f32 {
        let p = &self.params;
        let pulse = (time_ms * p.pulse_speed).sin() as f32;
        p.glow_base + pulse * p.pulse_amplitude + loudness * p.pulse_gain
    }

    pub fn draw(&self, anchor: Vec2, outer_radius: f32, glow_intensity: f32) -> DrawCommand {
        DrawCommand::Polygon {
            points: star_vertices(anchor, outer_radius).to_vec(),
            fill: Color::Named(TOPPER_FILL),
            glow: Glow {
                color: Color::Named(TOPPER_GLOW),
                blur: glow_intensity,
            },
        }
    }
}

/// Outline of a five-point star, alternating outer and half-radius inner
/// points 36° apart, with the first outer point straight up.
pub fn star_vertices(center: Vec2, outer_radius: f32) -> [Vec2; STAR_VERTICES] {
    let inner_radius = outer_radius * 0.5;
    let step = PI / TOPPER_POINTS as f32;
    std::array::from_fn(|k| {
        let r = if k % 2 == 0 { outer_radius } else { inner_radius };
        let angle = k as f32 * step - FRAC_PI_2;
        center + Vec2::new(angle.cos(), angle.sin()) * r
    })
}
