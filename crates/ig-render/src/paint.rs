//! Session → drawing primitives.
//!
//! Paints one full frame: grid, axes, axis labels, the origin marker, the
//! learner's marker, and (after a failed check) the correct answer.
//! Painting reads the session and never mutates it.

use crate::surface::{Color, Surface};
use ig_core::consts::{LABEL_STEP, MARKER_RADIUS};
use ig_core::model::{EXTENT, Point, ScreenPoint, Session};
use ig_core::GridLayout;

/// Font for axis numbering.
pub const LABEL_FONT: &str = "12px Arial";

const GRID_LINE_WIDTH: f64 = 1.0;
const AXIS_LINE_WIDTH: f64 = 2.0;

/// Theme-dependent colors for the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub grid: Color,
    pub axis: Color,
    pub label: Color,
    pub origin: Color,
    pub user: Color,
    pub answer: Color,
    /// Color of the "Correct!" feedback text.
    pub success: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl Palette {
    /// Light grid on a white page.
    pub fn light() -> Self {
        Self {
            grid: Color::rgb(0xee, 0xee, 0xee),
            axis: Color::rgb(0x22, 0x22, 0x22),
            label: Color::rgb(0x22, 0x22, 0x22),
            origin: Color::rgb(0x00, 0x00, 0x00),
            user: Color::rgb(0x19, 0x76, 0xd2),
            answer: Color::rgb(0xff, 0x00, 0x00),
            success: Color::rgb(0x38, 0x8e, 0x3c),
        }
    }

    /// Dark page variant.
    pub fn dark() -> Self {
        Self {
            grid: Color::rgb(0x33, 0x33, 0x33),
            axis: Color::rgb(0xdd, 0xdd, 0xdd),
            label: Color::rgb(0xdd, 0xdd, 0xdd),
            origin: Color::rgb(0xff, 0xff, 0xff),
            user: Color::rgb(0x64, 0xb5, 0xf6),
            answer: Color::rgb(0xef, 0x53, 0x50),
            success: Color::rgb(0x81, 0xc7, 0x84),
        }
    }
}

/// Paint the whole scene for `session` onto `surface`.
pub fn render_scene<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &GridLayout,
    session: &Session,
    palette: &Palette,
) {
    let size = layout.canvas_size();
    surface.clear(size, size);

    draw_grid(surface, layout, palette);
    draw_axes(surface, layout, palette);
    draw_labels(surface, layout, palette);

    draw_marker(surface, layout, Point::ORIGIN, palette.origin);
    draw_marker(surface, layout, session.user_point(), palette.user);

    if let Some(answer) = session.revealed_answer() {
        log::trace!("PAINT answer at {answer}");
        draw_marker(surface, layout, answer, palette.answer);
    }
}

// ─── Layers ──────────────────────────────────────────────────────────────

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, layout: &GridLayout, palette: &Palette) {
    let (start, end) = (layout.axis_start(), layout.axis_end());
    for i in -EXTENT..=EXTENT {
        let p = layout.to_screen(Point::new(i, i));
        surface.line(
            ScreenPoint::new(p.x, start),
            ScreenPoint::new(p.x, end),
            palette.grid,
            GRID_LINE_WIDTH,
        );
        surface.line(
            ScreenPoint::new(start, p.y),
            ScreenPoint::new(end, p.y),
            palette.grid,
            GRID_LINE_WIDTH,
        );
    }
}

fn draw_axes<S: Surface + ?Sized>(surface: &mut S, layout: &GridLayout, palette: &Palette) {
    let (start, end) = (layout.axis_start(), layout.axis_end());
    let o = layout.origin();
    surface.line(
        ScreenPoint::new(start, o.y),
        ScreenPoint::new(end, o.y),
        palette.axis,
        AXIS_LINE_WIDTH,
    );
    surface.line(
        ScreenPoint::new(o.x, end),
        ScreenPoint::new(o.x, start),
        palette.axis,
        AXIS_LINE_WIDTH,
    );
}

/// Numbers every `LABEL_STEP` units. The y-axis skips 0; the origin gets a
/// single "0" of its own.
fn draw_labels<S: Surface + ?Sized>(surface: &mut S, layout: &GridLayout, palette: &Palette) {
    let o = layout.origin();
    for i in (-EXTENT..=EXTENT).step_by(LABEL_STEP as usize) {
        let text = i.to_string();

        let p = layout.to_screen(Point::new(i, 0));
        surface.text(
            &text,
            ScreenPoint::new(p.x - 8.0, o.y + 18.0),
            LABEL_FONT,
            palette.label,
        );

        if i != 0 {
            let p = layout.to_screen(Point::new(0, i));
            surface.text(
                &text,
                ScreenPoint::new(o.x - 28.0, p.y + 5.0),
                LABEL_FONT,
                palette.label,
            );
        }
    }
    surface.text(
        "0",
        ScreenPoint::new(o.x - 18.0, o.y + 18.0),
        LABEL_FONT,
        palette.label,
    );
}

fn draw_marker<S: Surface + ?Sized>(surface: &mut S, layout: &GridLayout, at: Point, color: Color) {
    surface.circle(layout.to_screen(at), MARKER_RADIUS, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DisplayList, DrawCmd};
    use ig_core::model::{Axis, Round};

    fn frame(session: &Session) -> DisplayList {
        let mut list = DisplayList::new();
        render_scene(&mut list, &GridLayout::default(), session, &Palette::light());
        list
    }

    #[test]
    fn frame_starts_with_clear() {
        let session = Session::new(Round::new(4, 9, Axis::X).unwrap());
        let list = frame(&session);
        assert_eq!(
            list.commands.first(),
            Some(&DrawCmd::Clear {
                width: 600.0,
                height: 600.0
            })
        );
    }

    #[test]
    fn grid_has_a_line_per_integer_each_way() {
        let session = Session::new(Round::new(4, 9, Axis::X).unwrap());
        let list = frame(&session);
        let grid_lines = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { color, .. } if *color == Palette::light().grid))
            .count();
        assert_eq!(grid_lines, 2 * (2 * EXTENT as usize + 1));
    }

    #[test]
    fn labels_skip_zero_on_y_axis() {
        let session = Session::new(Round::new(4, 9, Axis::X).unwrap());
        let list = frame(&session);
        let texts = list.texts();
        // 13 x-axis labels, 12 y-axis labels, one origin label.
        assert_eq!(texts.len(), 26);
        assert_eq!(texts.iter().filter(|t| **t == "0").count(), 2);
        assert_eq!(texts.iter().filter(|t| **t == "-30").count(), 2);
    }

    #[test]
    fn markers_drawn_after_grid() {
        let session = Session::new(Round::new(4, 9, Axis::X).unwrap());
        let list = frame(&session);
        let first_circle = list
            .commands
            .iter()
            .position(|c| matches!(c, DrawCmd::Circle { .. }))
            .unwrap();
        let last_line = list
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCmd::Line { .. }))
            .unwrap();
        assert!(first_circle > last_line);
        assert_eq!(list.circles_with(Palette::light().origin).len(), 1);
        assert_eq!(list.circles_with(Palette::light().user).len(), 1);
    }

    #[test]
    fn no_answer_marker_before_check() {
        let session = Session::new(Round::new(4, 9, Axis::X).unwrap());
        assert!(frame(&session).circles_with(Palette::light().answer).is_empty());
    }

    #[test]
    fn rendering_does_not_touch_session() {
        let mut session = Session::new(Round::new(4, 9, Axis::X).unwrap());
        session.reveal();
        let before = session.clone();
        let _ = frame(&session);
        assert_eq!(session, before);
    }
}
