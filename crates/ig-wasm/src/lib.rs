//! WASM bridge for Intercept Grid: exposes the game to the host page.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards pointer
//! events in canvas pixels, repaints when a handler returns `true`, and
//! applies the JSON UI updates returned by `check` and `again` to its prompt,
//! feedback, and button elements.

mod render2d;
mod svg;

use ig_editor::{Action, Game, InputEvent, UiState};
use ig_render::Palette;
use render2d::Canvas2dSurface;
use svg::SvgSurface;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The WASM-facing game controller.
#[wasm_bindgen]
pub struct GameCanvas {
    game: Game,
    /// `false` = light (default), `true` = dark.
    dark_mode: bool,
}

#[wasm_bindgen]
impl GameCanvas {
    /// Start a game seeded from the clock.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_seed(js_sys::Date::now())
    }

    /// Start a reproducible game.
    pub fn with_seed(seed: f64) -> Self {
        init_logging();
        let seed = seed as u64;
        log::info!("Intercept Grid starting with seed {seed}");
        Self {
            game: Game::from_seed(seed),
            dark_mode: false,
        }
    }

    /// Render the scene to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let mut surface = Canvas2dSurface::new(ctx);
        self.game.render(&mut surface, &self.palette());
    }

    /// Set the canvas theme.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Handle pointer down. Returns true if the canvas needs a repaint.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.game.handle(&InputEvent::from_pointer_down(x, y))
    }

    /// Handle pointer move. Returns true if the canvas needs a repaint.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.game.handle(&InputEvent::from_pointer_move(x, y))
    }

    /// Handle pointer up. Returns true if the canvas needs a repaint.
    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.game.handle(&InputEvent::from_pointer_up(x, y))
    }

    /// Handle the pointer leaving the canvas.
    pub fn handle_pointer_leave(&mut self) -> bool {
        self.game.handle(&InputEvent::PointerLeave)
    }

    /// Reveal the answer. Returns the UI update as JSON:
    /// `{"changed":bool,"prompt":"…","feedback":"…","feedbackColor":"…","showCheck":bool,"showAgain":bool}`
    pub fn check(&mut self) -> String {
        let changed = self.game.apply(Action::Check);
        self.ui_update(changed)
    }

    /// Start a new round. Returns the UI update as JSON (see `check`).
    pub fn again(&mut self) -> String {
        let changed = self.game.apply(Action::Again);
        self.ui_update(changed)
    }

    /// Current UI state as JSON (see `check`), for the initial page sync.
    pub fn ui_json(&self) -> String {
        self.ui_update(false)
    }

    /// Prompt text, e.g. `intercept: (0, -7)`.
    pub fn prompt(&self) -> String {
        self.game.prompt()
    }

    /// Feedback text: `Correct!` or empty.
    pub fn feedback(&self) -> String {
        self.game.feedback().text().to_string()
    }

    /// The session (round, user point, flags) as JSON.
    pub fn state_json(&self) -> String {
        serde_json::to_string(self.game.session()).unwrap_or_else(|_| "{}".to_string())
    }

    /// The current frame as a standalone SVG document.
    pub fn export_svg(&self) -> String {
        let size = self.game.layout().canvas_size();
        let mut surface = SvgSurface::new(size, size);
        self.game.render(&mut surface, &self.palette());
        surface.finish()
    }
}

impl Default for GameCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl GameCanvas {
    fn palette(&self) -> Palette {
        if self.dark_mode {
            Palette::dark()
        } else {
            Palette::light()
        }
    }

    fn ui_update(&self, changed: bool) -> String {
        ui_to_json(&self.game.ui_state(), &self.palette(), changed).to_string()
    }
}

fn ui_to_json(ui: &UiState, palette: &Palette, changed: bool) -> serde_json::Value {
    let text = ui.feedback.text();
    let color = if text.is_empty() {
        String::new()
    } else {
        palette.success.to_css()
    };
    serde_json::json!({
        "changed": changed,
        "prompt": ui.prompt,
        "feedback": text,
        "feedbackColor": color,
        "showCheck": ui.controls.show_check,
        "showAgain": ui.controls.show_again,
    })
}

// ─── Logging and panic hook ──────────────────────────────────────────────

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            };
            let _ = console_log::init_with_level(level);
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Intercept Grid panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
