use crate::core::{DrawCommand, Glow};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Replays draw commands onto a 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    /// Paint a whole frame. Stops at the first failing command; the caller
    /// drops the rest of the frame.
    pub fn paint(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        for cmd in commands {
            if let Err(e) = self.paint_one(cmd) {
                self.ctx.set_shadow_blur(0.0);
                return Err(e);
            }
        }
        Ok(())
    }

    fn paint_one(&self, cmd: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                glow,
            } => {
                ctx.set_fill_style_str(&fill.to_string());
                self.set_glow(glow);
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.fill();
                ctx.set_shadow_blur(0.0);
            }
            DrawCommand::Polygon { points, fill, glow } => {
                ctx.save();
                ctx.set_fill_style_str(&fill.to_string());
                self.set_glow(glow);
                self.trace(points);
                ctx.close_path();
                ctx.fill();
                ctx.restore();
            }
            DrawCommand::Path {
                points,
                stroke,
                line_width,
                glow,
            } => {
                ctx.set_stroke_style_str(&stroke.to_string());
                ctx.set_line_width(*line_width as f64);
                self.set_glow(glow);
                self.trace(points);
                ctx.stroke();
                ctx.set_shadow_blur(0.0);
            }
        }
        Ok(())
    }

    fn set_glow(&self, glow: &Glow) {
        self.ctx.set_shadow_color(&glow.color.to_string());
        self.ctx.set_shadow_blur(glow.blur as f64);
    }

    fn trace(&self, points: &[Vec2]) {
        self.ctx.begin_path();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.ctx.move_to(first.x as f64, first.y as f64);
        }
        for p in iter {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
    }
}
