//! Grid layout and the coordinate ⇄ pixel mapping.
//!
//! The grid is centered on a square canvas. Each axis runs from `margin` to
//! `canvas_size - margin` and covers `2 * EXTENT` units, so one unit is
//! `(canvas_size - 2 * margin) / (2 * EXTENT)` pixels.

use crate::consts::{AXIS_MARGIN, CANVAS_SIZE};
use crate::model::{EXTENT, Point, ScreenPoint};

/// Canvas geometry for the coordinate grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    canvas_size: f64,
    margin: f64,
    unit: f64,
    origin: ScreenPoint,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::from_parts(CANVAS_SIZE, AXIS_MARGIN)
    }
}

impl GridLayout {
    /// Build a layout for a square canvas of side `canvas_size`.
    ///
    /// # Errors
    /// Returns a message if the margins leave no room for the axes.
    pub fn new(canvas_size: f64, margin: f64) -> Result<Self, String> {
        if !canvas_size.is_finite() || !margin.is_finite() || margin < 0.0 {
            return Err(format!(
                "invalid grid geometry: size={canvas_size}, margin={margin}"
            ));
        }
        if canvas_size - 2.0 * margin <= 0.0 {
            return Err(format!(
                "margin {margin} leaves no axis length on a {canvas_size}px canvas"
            ));
        }
        Ok(Self::from_parts(canvas_size, margin))
    }

    fn from_parts(canvas_size: f64, margin: f64) -> Self {
        let axis_length = canvas_size - 2.0 * margin;
        Self {
            canvas_size,
            margin,
            unit: axis_length / (2 * EXTENT) as f64,
            origin: ScreenPoint::new(canvas_size / 2.0, canvas_size / 2.0),
        }
    }

    pub fn canvas_size(&self) -> f64 {
        self.canvas_size
    }

    /// Pixels per coordinate unit.
    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// Pixel position of `(0, 0)`.
    pub fn origin(&self) -> ScreenPoint {
        self.origin
    }

    /// Pixel where each axis starts (left / top).
    pub fn axis_start(&self) -> f64 {
        self.margin
    }

    /// Pixel where each axis ends (right / bottom).
    pub fn axis_end(&self) -> f64 {
        self.canvas_size - self.margin
    }

    /// Coordinate space → pixel space. Screen `y` is flipped.
    pub fn to_screen(&self, p: Point) -> ScreenPoint {
        ScreenPoint::new(
            self.origin.x + p.x as f64 * self.unit,
            self.origin.y - p.y as f64 * self.unit,
        )
    }

    /// Pixel space → nearest coordinate, unclamped.
    ///
    /// Halves round toward positive infinity. The result may lie off the
    /// grid; use [`GridLayout::point_at`] for a range-checked point.
    pub fn to_coord(&self, s: ScreenPoint) -> (i64, i64) {
        let x = round_half_up((s.x - self.origin.x) / self.unit);
        let y = round_half_up((self.origin.y - s.y) / self.unit);
        (x, y)
    }

    /// The grid point under pixel `s`, or `None` if it maps off the grid
    /// or either component is not finite.
    pub fn point_at(&self, s: ScreenPoint) -> Option<Point> {
        if !s.x.is_finite() || !s.y.is_finite() {
            return None;
        }
        let (x, y) = self.to_coord(s);
        Point::new_checked(x, y)
    }
}

fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry() {
        let layout = GridLayout::default();
        assert_eq!(layout.unit(), 520.0 / 60.0);
        assert_eq!(layout.origin(), ScreenPoint::new(300.0, 300.0));
        assert_eq!(layout.axis_start(), 40.0);
        assert_eq!(layout.axis_end(), 560.0);
    }

    #[test]
    fn to_screen_flips_y() {
        let layout = GridLayout::default();
        let s = layout.to_screen(Point::new(30, 30));
        assert!((s.x - 560.0).abs() < 1e-9);
        assert!((s.y - 40.0).abs() < 1e-9);
        let s = layout.to_screen(Point::new(-30, -30));
        assert!((s.x - 40.0).abs() < 1e-9);
        assert!((s.y - 560.0).abs() < 1e-9);
    }

    #[test]
    fn to_coord_rounds_to_nearest() {
        let layout = GridLayout::default();
        let unit = layout.unit();
        let (x, y) = layout.to_coord(ScreenPoint::new(300.0 + 2.4 * unit, 300.0 + 3.6 * unit));
        assert_eq!((x, y), (2, -4));
    }

    #[test]
    fn to_coord_half_rounds_up() {
        // 600px of axis over 60 units: exactly 10px per unit.
        let layout = GridLayout::new(640.0, 20.0).unwrap();
        assert_eq!(layout.unit(), 10.0);
        assert_eq!(layout.to_coord(ScreenPoint::new(295.0, 320.0)), (-2, 0));
        assert_eq!(layout.to_coord(ScreenPoint::new(345.0, 295.0)), (3, 3));
    }

    #[test]
    fn point_at_rejects_outside_grid() {
        let layout = GridLayout::default();
        assert_eq!(layout.point_at(ScreenPoint::new(5.0, 300.0)), None);
        assert_eq!(layout.point_at(ScreenPoint::new(300.0, 599.0)), None);
        assert_eq!(
            layout.point_at(ScreenPoint::new(300.0, 300.0)),
            Some(Point::ORIGIN)
        );
    }

    #[test]
    fn point_at_rejects_non_finite_pixels() {
        let layout = GridLayout::default();
        assert_eq!(layout.point_at(ScreenPoint::new(f64::NAN, f64::NAN)), None);
        assert_eq!(layout.point_at(ScreenPoint::new(f64::NAN, 300.0)), None);
        assert_eq!(layout.point_at(ScreenPoint::new(300.0, f64::INFINITY)), None);
        assert_eq!(layout.point_at(ScreenPoint::new(f64::NEG_INFINITY, 300.0)), None);
    }

    #[test]
    fn new_rejects_degenerate_margins() {
        assert!(GridLayout::new(600.0, 300.0).is_err());
        assert!(GridLayout::new(600.0, -1.0).is_err());
        assert!(GridLayout::new(f64::NAN, 10.0).is_err());
        assert!(GridLayout::new(300.0, 20.0).is_ok());
    }
}
