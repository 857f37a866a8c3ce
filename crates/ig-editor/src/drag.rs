//! Dragging the learner's point.
//!
//! Two states, tracked by `Session::is_dragging`:
//!
//! | Event | Idle | Dragging |
//! |-------|------|----------|
//! | **Down** | start dragging if the press hits the marker | — |
//! | **Move** | ignored | snap to the grid point under the pointer, if on the grid |
//! | **Up / Leave** | stay idle | stop dragging |

use crate::input::InputEvent;
use ig_core::model::{ScreenPoint, Session};
use ig_core::GridLayout;
use ig_render::hit::hit_marker;

/// Translates pointer events into moves of the user point.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTool {
    layout: GridLayout,
}

impl DragTool {
    pub fn new(layout: GridLayout) -> Self {
        Self { layout }
    }

    /// Apply `event` to `session`. Returns `true` if the scene must be
    /// repainted.
    pub fn handle(&mut self, event: &InputEvent, session: &mut Session) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => {
                if hit_marker(&self.layout, session.user_point(), ScreenPoint::new(x, y)) {
                    log::trace!("drag start at ({x}, {y})");
                    session.set_dragging(true);
                }
                false
            }
            InputEvent::PointerMove { x, y } => {
                if !session.is_dragging() {
                    return false;
                }
                // Off-grid moves leave the point where it was.
                match self.layout.point_at(ScreenPoint::new(x, y)) {
                    Some(p) => session.place(p),
                    None => false,
                }
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                session.set_dragging(false);
                false
            }
        }
    }
}
