pub mod layout;
pub mod model;
pub mod round;

pub use layout::GridLayout;
pub use model::*;
pub use round::RoundGenerator;

/// Fixed widget dimensions and interaction tolerances.
pub mod consts {
    /// Side length of the square drawing surface, in pixels.
    pub const CANVAS_SIZE: f64 = 600.0;
    /// Gap between the canvas edge and the end of each axis.
    pub const AXIS_MARGIN: f64 = 40.0;
    /// Press distance (px) within which the user marker is grabbed.
    pub const PICK_RADIUS: f64 = 15.0;
    /// Axis labels are printed every this many units.
    pub const LABEL_STEP: i32 = 5;
    /// Radius of every point marker, in pixels.
    pub const MARKER_RADIUS: f64 = 10.0;
}
