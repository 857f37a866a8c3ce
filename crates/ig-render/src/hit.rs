//! Hit testing: pixel → marker lookup.

use ig_core::consts::PICK_RADIUS;
use ig_core::model::{Point, ScreenPoint};
use ig_core::GridLayout;

/// Whether a press at `pixel` lands on the marker drawn at `marker`.
///
/// The pick area is a disc of `PICK_RADIUS` pixels; the boundary itself
/// does not count.
pub fn hit_marker(layout: &GridLayout, marker: Point, pixel: ScreenPoint) -> bool {
    let distance = pixel.distance_to(layout.to_screen(marker));
    log::trace!("hit test {marker} at ({}, {}): {distance:.2}px", pixel.x, pixel.y);
    distance < PICK_RADIUS
}
