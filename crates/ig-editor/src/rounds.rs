//! Round lifecycle: check the answer, then start again.
//!
//! The host page owns two buttons. Only one is visible at a time: "check"
//! while the learner is placing a point, "again" once the answer is shown.

use ig_core::model::Session;
use ig_core::RoundGenerator;
use rand::Rng;
use rand_pcg::Pcg32;

/// User-triggered round transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Check,
    Again,
}

/// Visibility of the two host buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub show_check: bool,
    pub show_again: bool,
}

impl Controls {
    pub const PLACING: Controls = Controls {
        show_check: true,
        show_again: false,
    };
    pub const CHECKED: Controls = Controls {
        show_check: false,
        show_again: true,
    };

    fn allows(&self, action: Action) -> bool {
        match action {
            Action::Check => self.show_check,
            Action::Again => self.show_again,
        }
    }
}

/// Message shown under the grid after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    /// Nothing to say: a round in progress, or a wrong answer (the red
    /// marker speaks for itself).
    #[default]
    None,
    Correct,
}

impl Feedback {
    pub fn text(&self) -> &'static str {
        match self {
            Feedback::None => "",
            Feedback::Correct => "Correct!",
        }
    }
}

/// Drives check / again transitions over a `Session`.
pub struct RoundController<R = Pcg32> {
    generator: RoundGenerator<R>,
    controls: Controls,
    feedback: Feedback,
}

impl<R: Rng> RoundController<R> {
    pub fn new(generator: RoundGenerator<R>) -> Self {
        Self {
            generator,
            controls: Controls::PLACING,
            feedback: Feedback::None,
        }
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Generate a round and return its fresh session. Resets the buttons
    /// and clears any feedback.
    pub fn start(&mut self) -> Session {
        self.controls = Controls::PLACING;
        self.feedback = Feedback::None;
        Session::new(self.generator.generate())
    }

    /// Apply `action`. An action whose button is hidden is ignored and
    /// returns `false`; otherwise returns `true` (repaint needed).
    pub fn apply(&mut self, action: Action, session: &mut Session) -> bool {
        if !self.controls.allows(action) {
            log::warn!("ignoring {action:?}: control is hidden");
            return false;
        }
        match action {
            Action::Check => self.check(session),
            Action::Again => *session = self.start(),
        }
        true
    }

    fn check(&mut self, session: &mut Session) {
        session.reveal();
        self.controls = Controls::CHECKED;
        self.feedback = if session.is_correct() {
            Feedback::Correct
        } else {
            Feedback::None
        };
        log::debug!(
            "check: placed {} for target {} -> {:?}",
            session.user_point(),
            session.round().target(),
            self.feedback
        );
    }
}
