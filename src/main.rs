//! Terminal grid driving game (default binary).
//!
//! One key press per cycle: WASD drives the car, Q quits. Hitting a building
//! ends the session; the last board and the game-over message are printed to
//! the normal screen after the terminal is restored.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};

use grid_drive::config::Config;
use grid_drive::core::{GameSnapshot, GameState};
use grid_drive::input::{handle_key_event, should_quit};
use grid_drive::logging;
use grid_drive::term::{GameView, TerminalRenderer, Viewport};

/// How a session ended. Both are successful exits.
enum SessionEnd {
    Quit,
    GameOver(GameSnapshot),
}

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        SessionEnd::Quit => info!("player quit"),
        SessionEnd::GameOver(snap) => {
            for line in snap.to_lines() {
                println!("{}", line);
            }
            if let Some(message) = snap.message {
                println!("{}", message);
            }
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<SessionEnd> {
    let mut game = GameState::new();
    let view = GameView::new(config.cell_width);
    let mut snap = GameSnapshot::default();
    let mut last_size = None;

    info!(
        player = ?game.player_position(),
        entities = game.world().entities().len(),
        "session started"
    );

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if last_size != Some((w, h)) {
            let need = view.required_viewport(&snap);
            if w < need.width || h < need.height {
                warn!(w, h, need_w = need.width, need_h = need.height, "terminal smaller than view");
            }
            last_size = Some((w, h));
        }
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        if game.is_game_over() {
            return Ok(SessionEnd::GameOver(snap));
        }

        // Input: block until the next key.
        let Event::Key(key) = event::read()? else {
            // Resize and other events just trigger a redraw.
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if should_quit(key) {
            return Ok(SessionEnd::Quit);
        }
        if let Some(action) = handle_key_event(key) {
            let outcome = game.apply_action(action);
            debug!(action = action.as_str(), ?outcome, "action applied");
        }
    }
}
