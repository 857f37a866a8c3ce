//! Core data model for the intercept game.
//!
//! A `Round` holds the two generated intercepts and the one the learner must
//! plot. A `Session` wraps a round with the mutable per-round state: the
//! learner's point, the drag flag, and whether the answer has been revealed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest absolute coordinate on either axis. The grid spans
/// `-EXTENT..=EXTENT` in both directions.
pub const EXTENT: i32 = 30;

// ─── Points ──────────────────────────────────────────────────────────────

/// An integer point in coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a point from wide components, or `None` if either lies
    /// outside the grid.
    pub fn new_checked(x: i64, y: i64) -> Option<Self> {
        let range = -(EXTENT as i64)..=EXTENT as i64;
        if range.contains(&x) && range.contains(&y) {
            Some(Self::new(x as i32, y as i32))
        } else {
            None
        }
    }

    /// Whether both components lie within `-EXTENT..=EXTENT`.
    pub fn in_bounds(&self) -> bool {
        self.x.abs() <= EXTENT && self.y.abs() <= EXTENT
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A position on the drawing surface, in pixels. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: ScreenPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// ─── Rounds ──────────────────────────────────────────────────────────────

/// Which axis an intercept sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// One question: an x-intercept `(a, 0)`, a y-intercept `(0, b)`, and the
/// one of the two the learner is asked to plot.
///
/// Both `a` and `b` are non-zero. The target never changes for the life of
/// the round; a new question means a new `Round`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    x_intercept: Point,
    y_intercept: Point,
    target_axis: Axis,
}

impl Round {
    /// Build a round from explicit intercept values.
    ///
    /// # Errors
    /// Returns a message if either intercept is zero or off the grid.
    pub fn new(a: i32, b: i32, target_axis: Axis) -> Result<Self, String> {
        if a == 0 || b == 0 {
            return Err(format!("intercepts must be non-zero, got a={a}, b={b}"));
        }
        if a.abs() > EXTENT || b.abs() > EXTENT {
            return Err(format!(
                "intercepts must lie within ±{EXTENT}, got a={a}, b={b}"
            ));
        }
        Ok(Self::from_parts(a, b, target_axis))
    }

    /// Caller guarantees `a` and `b` are non-zero and on the grid.
    pub(crate) fn from_parts(a: i32, b: i32, target_axis: Axis) -> Self {
        debug_assert!(a != 0 && b != 0);
        Self {
            x_intercept: Point::new(a, 0),
            y_intercept: Point::new(0, b),
            target_axis,
        }
    }

    pub fn x_intercept(&self) -> Point {
        self.x_intercept
    }

    pub fn y_intercept(&self) -> Point {
        self.y_intercept
    }

    pub fn target_axis(&self) -> Axis {
        self.target_axis
    }

    /// The intercept the learner must plot.
    pub fn target(&self) -> Point {
        match self.target_axis {
            Axis::X => self.x_intercept,
            Axis::Y => self.y_intercept,
        }
    }

    /// Prompt text shown to the learner, e.g. `intercept: (0, -7)`.
    pub fn prompt(&self) -> String {
        format!("intercept: {}", self.target())
    }
}

// ─── Session ─────────────────────────────────────────────────────────────

/// Mutable state for the round in progress.
///
/// Created when a round starts and replaced wholesale when the next one
/// begins, so the user point always starts at the origin with the answer
/// hidden and no drag in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    round: Round,
    user_point: Point,
    dragging: bool,
    answer_revealed: bool,
}

impl Session {
    pub fn new(round: Round) -> Self {
        Self {
            round,
            user_point: Point::ORIGIN,
            dragging: false,
            answer_revealed: false,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn user_point(&self) -> Point {
        self.user_point
    }

    /// Move the user point. Off-grid points are rejected and leave the
    /// current point untouched. Returns `true` if the point was accepted.
    pub fn place(&mut self, point: Point) -> bool {
        if !point.in_bounds() {
            return false;
        }
        self.user_point = point;
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn is_revealed(&self) -> bool {
        self.answer_revealed
    }

    pub fn reveal(&mut self) {
        self.answer_revealed = true;
    }

    /// Exact match between the user point and the target.
    pub fn is_correct(&self) -> bool {
        self.user_point == self.round.target()
    }

    /// The target to highlight, present only after a check that failed.
    pub fn revealed_answer(&self) -> Option<Point> {
        (self.answer_revealed && !self.is_correct()).then(|| self.round.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_rejects_zero_intercepts() {
        assert!(Round::new(0, 4, Axis::X).is_err());
        assert!(Round::new(4, 0, Axis::Y).is_err());
        assert!(Round::new(31, 4, Axis::X).is_err());
        assert!(Round::new(-30, 30, Axis::X).is_ok());
    }

    #[test]
    fn target_follows_axis() {
        let round = Round::new(12, -7, Axis::Y).unwrap();
        assert_eq!(round.x_intercept(), Point::new(12, 0));
        assert_eq!(round.y_intercept(), Point::new(0, -7));
        assert_eq!(round.target(), Point::new(0, -7));

        let round = Round::new(12, -7, Axis::X).unwrap();
        assert_eq!(round.target(), Point::new(12, 0));
    }

    #[test]
    fn prompt_uses_target_coordinates() {
        let round = Round::new(3, -7, Axis::Y).unwrap();
        assert_eq!(round.prompt(), "intercept: (0, -7)");
        let round = Round::new(-21, 9, Axis::X).unwrap();
        assert_eq!(round.prompt(), "intercept: (-21, 0)");
    }

    #[test]
    fn new_checked_bounds() {
        assert_eq!(Point::new_checked(30, -30), Some(Point::new(30, -30)));
        assert_eq!(Point::new_checked(31, 0), None);
        assert_eq!(Point::new_checked(0, -31), None);
        assert_eq!(Point::new_checked(i64::MAX, 0), None);
    }

    #[test]
    fn session_starts_at_origin_hidden() {
        let session = Session::new(Round::new(5, 5, Axis::X).unwrap());
        assert_eq!(session.user_point(), Point::ORIGIN);
        assert!(!session.is_dragging());
        assert!(!session.is_revealed());
        assert_eq!(session.revealed_answer(), None);
    }

    #[test]
    fn place_rejects_off_grid() {
        let mut session = Session::new(Round::new(5, 5, Axis::X).unwrap());
        assert!(session.place(Point::new(4, -2)));
        assert!(!session.place(Point::new(40, 0)));
        assert_eq!(session.user_point(), Point::new(4, -2));
    }

    #[test]
    fn revealed_answer_only_on_failure() {
        let mut session = Session::new(Round::new(8, -7, Axis::Y).unwrap());
        session.reveal();
        assert_eq!(session.revealed_answer(), Some(Point::new(0, -7)));

        session.place(Point::new(0, -7));
        assert!(session.is_correct());
        assert_eq!(session.revealed_answer(), None);
    }

    #[test]
    fn session_serializes_to_json() {
        let session = Session::new(Round::new(8, -7, Axis::Y).unwrap());
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["user_point"]["x"], 0);
        assert_eq!(json["round"]["target_axis"], "Y");
    }
}
