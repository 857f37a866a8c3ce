pub mod hit;
pub mod paint;
pub mod surface;
pub mod vello_surface;

pub use paint::{Palette, render_scene};
pub use surface::{Color, DisplayList, DrawCmd, Surface};
