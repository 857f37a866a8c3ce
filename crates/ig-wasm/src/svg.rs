//! SVG export of the current frame.

use ig_core::ScreenPoint;
use ig_render::{Color, Surface};
use std::fmt::Write;

/// Accumulates drawing primitives as SVG elements.
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Wrap the recorded elements in an `<svg>` document.
    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
{body}</svg>
"#,
            w = num(self.width),
            h = num(self.height),
            body = self.body
        )
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.body.clear();
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color, width: f64) {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{}"/>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            num(width),
        );
    }

    fn circle(&mut self, center: ScreenPoint, radius: f64, color: Color) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{color}"/>"#,
            num(center.x),
            num(center.y),
            num(radius),
        );
    }

    fn text(&mut self, content: &str, at: ScreenPoint, font: &str, color: Color) {
        let _ = writeln!(
            self.body,
            r#"  <text x="{}" y="{}" style="font: {}" fill="{color}">{}</text>"#,
            num(at.x),
            num(at.y),
            escape(font),
            escape(content),
        );
    }
}

/// Two decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
