//! Perspective projection from tree space onto the drawing surface.
//!
//! Tree space has its origin at the apex, `y` growing downwards towards the
//! base and `z` growing away from the viewer. The projection is a plain
//! divide-by-depth: `scale = f / (f + z)`. It is only well defined while
//! `z > -f`, which holds as long as the tree radius stays well under the
//! focal length (checked once in `SceneConfig::validate`).

use glam::{Vec2, Vec3};

/// Current drawing surface size in pixels. Read every frame, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub focal_length: f32,
    pub top_anchor_fraction: f32,
}

impl Projector {
    pub fn new(focal_length: f32, top_anchor_fraction: f32) -> Self {
        Self {
            focal_length,
            top_anchor_fraction,
        }
    }

    /// Screen position of the tree apex: horizontally centred, a fixed
    /// fraction of the way down the surface.
    #[inline]
    pub fn anchor(&self, surface: Surface) -> Vec2 {
        Vec2::new(
            surface.width * 0.5,
            surface.height * self.top_anchor_fraction,
        )
    }

    #[inline]
    pub fn project(&self, surface: Surface, p: Vec3) -> Projected {
        let scale = self.focal_length / (self.focal_length + p.z);
        let anchor = self.anchor(surface);
        Projected {
            screen: Vec2::new(anchor.x + p.x * scale, anchor.y + p.y * scale),
            scale,
        }
    }
}
