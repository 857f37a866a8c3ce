//! The game facade.
//!
//! `Game` owns the session and both controllers. Hosts feed it pointer
//! events and button actions, repaint when told to, and read back the
//! prompt, feedback, and button visibility.

use crate::drag::DragTool;
use crate::input::InputEvent;
use crate::rounds::{Action, Controls, Feedback, RoundController};
use ig_core::model::Session;
use ig_core::{GridLayout, RoundGenerator};
use ig_render::{Palette, Surface, render_scene};
use rand::Rng;
use rand_pcg::Pcg32;

/// Everything the host page displays outside the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub prompt: String,
    pub feedback: Feedback,
    pub controls: Controls,
}

pub struct Game<R = Pcg32> {
    layout: GridLayout,
    session: Session,
    drag: DragTool,
    rounds: RoundController<R>,
}

impl Game<Pcg32> {
    /// A game on the default 600px grid with a deterministic generator.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RoundGenerator::from_seed(seed), GridLayout::default())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game and start its first round.
    pub fn new(generator: RoundGenerator<R>, layout: GridLayout) -> Self {
        let mut rounds = RoundController::new(generator);
        let session = rounds.start();
        log::debug!("first round: {}", session.round().prompt());
        Self {
            layout,
            session,
            drag: DragTool::new(layout),
            rounds,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Feed a pointer event. Returns `true` if the canvas needs a repaint.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        self.drag.handle(event, &mut self.session)
    }

    /// Press the check or again button. Returns `true` if anything changed.
    pub fn apply(&mut self, action: Action) -> bool {
        self.rounds.apply(action, &mut self.session)
    }

    pub fn prompt(&self) -> String {
        self.session.round().prompt()
    }

    pub fn feedback(&self) -> Feedback {
        self.rounds.feedback()
    }

    pub fn controls(&self) -> Controls {
        self.rounds.controls()
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            prompt: self.prompt(),
            feedback: self.feedback(),
            controls: self.controls(),
        }
    }

    /// Paint the current frame.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        render_scene(surface, &self.layout, &self.session, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ig_core::model::Point;

    #[test]
    fn new_game_is_ready_to_place() {
        let game = Game::from_seed(11);
        let ui = game.ui_state();
        assert_eq!(ui.prompt, game.session().round().prompt());
        assert_eq!(ui.feedback, Feedback::None);
        assert_eq!(ui.controls, Controls::PLACING);
        assert_eq!(game.session().user_point(), Point::ORIGIN);
    }

    #[test]
    fn events_reach_the_drag_tool() {
        let mut game = Game::from_seed(11);
        let origin = game.layout().origin();
        game.handle(&InputEvent::from_pointer_down(origin.x, origin.y));
        assert!(game.session().is_dragging());
        game.handle(&InputEvent::PointerLeave);
        assert!(!game.session().is_dragging());
    }
}
