//! Terminal front end: splash, start screen, board and game-over screen.
//!
//! The shell owns the terminal and a single [`Game`] value. Each loop turn it
//! waits up to one frame for an event, turns it into at most one command and
//! repaints when something visible changed.

pub mod input;
pub mod layout;
pub mod palette;
pub mod render;
pub mod splash;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, terminal,
};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::Config;
use crate::engine::{self, Score};
use crate::game::Game;
use input::Action;
use layout::Layout;
use render::Renderer;

#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("missing asset {path}: {source}")]
    MissingAsset {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("asset {0} is empty")]
    EmptyAsset(PathBuf),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Raw mode, alternate screen and mouse capture for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), terminal::EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), DisableMouseCapture, cursor::Show, terminal::LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}

/// Run one interactive session until the player quits. Returns the session's
/// high score.
pub fn run(config: &Config) -> Result<Score, ShellError> {
    // Load assets before touching the terminal so failures print cleanly.
    let art = if config.splash.enabled { Some(splash::load(&config.splash.path)?) } else { None };
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    engine::new();

    let _guard = TerminalGuard::enter()?;
    let mut renderer = Renderer::new(BufWriter::new(io::stdout()));
    let (cols, rows) = terminal::size()?;
    let mut layout = Layout::centered(cols, rows);

    if let Some(art) = art {
        renderer.draw_splash(&art, &layout)?;
        thread::sleep(config.splash.duration());
        discard_pending_events()?;
        let (cols, rows) = terminal::size()?;
        layout = Layout::centered(cols, rows);
    }

    info!("session started (spawn rule {}, seed {:?})", config.spawn, config.seed);
    let game = event_loop(config, &mut rng, &mut renderer, &mut layout)?;
    let high_score = game.high_score().max(game.score());
    info!("session ended; high score {high_score}");
    Ok(high_score)
}

fn event_loop<W: Write>(
    config: &Config,
    rng: &mut StdRng,
    renderer: &mut Renderer<W>,
    layout: &mut Layout,
) -> Result<Game, ShellError> {
    let frame = config.frame_duration();
    let mut game = Game::new(config.spawn);
    let mut hover = None;
    let mut dirty = true;
    loop {
        if dirty {
            renderer.draw(&game, layout, hover)?;
            dirty = false;
        }
        if !event::poll(frame)? {
            continue;
        }
        match input::map_event(&event::read()?, game.screen(), layout) {
            Some(Action::Quit) => return Ok(game),
            Some(Action::Command(command)) => {
                let next = game.apply(command, rng);
                if next.screen() != game.screen() {
                    hover = None;
                }
                dirty |= next != game;
                game = next;
            }
            Some(Action::Hover(h)) if h != hover => {
                hover = h;
                dirty = true;
            }
            Some(Action::Resize(cols, rows)) => {
                *layout = Layout::centered(cols, rows);
                dirty = true;
            }
            Some(Action::Hover(_)) | None => {}
        }
    }
}

// Keys pressed while the splash was up should not start the game.
fn discard_pending_events() -> io::Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}
