pub mod drag;
pub mod game;
pub mod input;
pub mod rounds;

pub use game::{Game, UiState};
pub use input::InputEvent;
pub use rounds::{Action, Controls, Feedback, RoundController};
