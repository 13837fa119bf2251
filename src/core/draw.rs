//! Backend-neutral draw commands.
//!
//! A frame renders into a `Vec<DrawCommand>`; the browser replays it onto a
//! `CanvasRenderingContext2d`, tests inspect it directly.

use glam::Vec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { h: f32, s: f32, l: f32 },
    Named(&'static str),
}

impl Color {
    pub const WHITE: Color = Color::Named("white");

    pub fn white_alpha(a: f32) -> Self {
        Color::Rgba {
            r: 255,
            g: 255,
            b: 255,
            a,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r},{g},{b},{a})"),
            Color::Hsl { h, s, l } => write!(f, "hsl({h}, {s}%, {l}%)"),
            Color::Named(name) => f.write_str(name),
        }
    }
}

/// Shadow applied to a single command. The painter resets it afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub blur: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        glow: Glow,
    },
    Polygon {
        points: Vec<Vec2>,
        fill: Color,
        glow: Glow,
    },
    /// Open polyline: move to the first point, line to the rest, stroke once.
    Path {
        points: Vec<Vec2>,
        stroke: Color,
        line_width: f32,
        glow: Glow,
    },
}
