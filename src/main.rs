//! Terminal Bomberman runner.
//!
//! Runs the pre-game setup flow (manual or random Initial-bomb placement),
//! then the fixed-tick game loop: render, poll input with a timeout until the
//! next tick, advance the session.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bomber::core::GameState;
use tui_bomber::input::{handle_key_event, map_setup_key, should_quit};
use tui_bomber::term::{GameView, SetupChoice, SetupScreen, TerminalRenderer, Viewport};
use tui_bomber::types::{DEFAULT_INITIAL_BOMBS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameState::new(seed);

    match run_setup(term, &game)? {
        Some(SetupChoice::Random) => game.scatter_initial_bombs(DEFAULT_INITIAL_BOMBS),
        Some(SetupChoice::Manual(placements)) => game.place_initial_bombs(&placements),
        None => return Ok(()), // quit during setup
    }

    let view = GameView::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some((player, action)) = handle_key_event(key) {
                        game.apply_action(player, action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}

/// Drive the setup screens until a choice is made.
///
/// Returns `None` when the user quits during setup.
fn run_setup(term: &mut TerminalRenderer, game: &GameState) -> Result<Option<SetupChoice>> {
    let mut screen = SetupScreen::new();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = screen.render(game.board(), Viewport::new(w, h));
        term.draw(&fb)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(None);
            }
            if let Some(action) = map_setup_key(key) {
                screen.handle(action, game.board());
            }
        }

        if let Some(choice) = screen.choice() {
            return Ok(Some(choice));
        }
    }
}
