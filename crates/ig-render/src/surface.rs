//! Paint surfaces.
//!
//! The scene painter only needs four primitives: clear, stroke a line, fill a
//! circle, and draw a text label. Each backend (Canvas2D, Vello, SVG) maps
//! them onto its own API. `DisplayList` records them for inspection.

use ig_core::ScreenPoint;
use std::fmt;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#1976d2`.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// A drawing backend.
pub trait Surface {
    /// Erase everything within `width × height`.
    fn clear(&mut self, width: f64, height: f64);

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color, width: f64);

    /// Filled disc centered on `center`.
    fn circle(&mut self, center: ScreenPoint, radius: f64, color: Color);

    /// Text with its baseline-left corner at `at`. `font` is a CSS font
    /// shorthand such as `12px Arial`.
    fn text(&mut self, content: &str, at: ScreenPoint, font: &str, color: Color);
}

// ─── Display list ────────────────────────────────────────────────────────

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        width: f64,
        height: f64,
    },
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        color: Color,
        width: f64,
    },
    Circle {
        center: ScreenPoint,
        radius: f64,
        color: Color,
    },
    Text {
        content: String,
        at: ScreenPoint,
        font: String,
        color: Color,
    },
}

/// A surface that records every primitive in paint order.
///
/// Clearing drops everything recorded so far, so a list always holds
/// exactly one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centers of all circles filled with `color`.
    pub fn circles_with(&self, color: Color) -> Vec<ScreenPoint> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Circle { center, color: c, .. } if *c == color => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// All text labels, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replay the recorded frame onto another surface.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for cmd in &self.commands {
            match cmd {
                DrawCmd::Clear { width, height } => target.clear(*width, *height),
                DrawCmd::Line {
                    from,
                    to,
                    color,
                    width,
                } => target.line(*from, *to, *color, *width),
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                } => target.circle(*center, *radius, *color),
                DrawCmd::Text {
                    content,
                    at,
                    font,
                    color,
                } => target.text(content, *at, font, *color),
            }
        }
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.clear();
        self.commands.push(DrawCmd::Clear { width, height });
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color, width: f64) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn circle(&mut self, center: ScreenPoint, radius: f64, color: Color) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, content: &str, at: ScreenPoint, font: &str, color: Color) {
        self.commands.push(DrawCmd::Text {
            content: content.to_string(),
            at,
            font: font.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_hex() {
        assert_eq!(Color::rgb(0x19, 0x76, 0xd2).to_css(), "#1976d2");
        assert_eq!(Color::rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn clear_starts_a_new_frame() {
        let mut list = DisplayList::new();
        list.circle(ScreenPoint::new(1.0, 1.0), 2.0, Color::rgb(1, 2, 3));
        list.clear(10.0, 10.0);
        assert_eq!(
            list.commands,
            vec![DrawCmd::Clear {
                width: 10.0,
                height: 10.0
            }]
        );
    }

    #[test]
    fn replay_reproduces_frame() {
        let mut list = DisplayList::new();
        list.clear(10.0, 10.0);
        list.line(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(5.0, 5.0),
            Color::rgb(9, 9, 9),
            2.0,
        );
        list.text("7", ScreenPoint::new(3.0, 4.0), "12px Arial", Color::rgb(0, 0, 0));

        let mut copy = DisplayList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);
    }
}
