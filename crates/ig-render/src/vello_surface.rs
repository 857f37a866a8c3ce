//! Vello backend for the scene painter.
//!
//! Builds a `vello::Scene`; the caller presents it via wgpu.

use crate::surface::{Color, Surface};
use ig_core::ScreenPoint;
use kurbo::{Affine, Circle, Line, Stroke};
use peniko::Fill;
use vello::Scene;

/// Paints into a borrowed Vello scene.
pub struct VelloSurface<'a> {
    scene: &'a mut Scene,
}

impl<'a> VelloSurface<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene }
    }
}

impl Surface for VelloSurface<'_> {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.scene.reset();
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color, width: f64) {
        let shape = Line::new((from.x, from.y), (to.x, to.y));
        self.scene.stroke(
            &Stroke::new(width),
            Affine::IDENTITY,
            to_peniko(color),
            None,
            &shape,
        );
    }

    fn circle(&mut self, center: ScreenPoint, radius: f64, color: Color) {
        let shape = Circle::new((center.x, center.y), radius);
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            to_peniko(color),
            None,
            &shape,
        );
    }

    fn text(&mut self, content: &str, at: ScreenPoint, font: &str, _color: Color) {
        // Glyph rendering needs a font context; labels are skipped here.
        log::trace!("TEXT {content:?} ({font}) at ({}, {})", at.x, at.y);
    }
}

fn to_peniko(color: Color) -> peniko::Color {
    peniko::Color::from_rgba8(color.r, color.g, color.b, 255)
}
