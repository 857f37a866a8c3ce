//! Canvas2D surface.
//!
//! Draws the scene to an HTML `<canvas>` via `CanvasRenderingContext2d`.

use ig_core::ScreenPoint;
use ig_render::{Color, Surface};
use web_sys::CanvasRenderingContext2d;

pub struct Canvas2dSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> Canvas2dSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2dSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color, width: f64) {
        let ctx = self.ctx;
        ctx.set_stroke_style_str(&color.to_css());
        ctx.set_line_width(width);
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }

    fn circle(&mut self, center: ScreenPoint, radius: f64, color: Color) {
        let ctx = self.ctx;
        ctx.begin_path();
        let _ = ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        ctx.set_fill_style_str(&color.to_css());
        ctx.fill();
    }

    fn text(&mut self, content: &str, at: ScreenPoint, font: &str, color: Color) {
        let ctx = self.ctx;
        ctx.set_font(font);
        ctx.set_fill_style_str(&color.to_css());
        let _ = ctx.fill_text(content, at.x, at.y);
    }
}
