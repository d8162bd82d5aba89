//! Screen state machine for a play session.
//!
//! [`Game`] is a plain value: the control loop owns one, feeds it
//! [`Command`]s and keeps whatever [`Game::apply`] returns. Nothing here
//! touches the terminal, so every transition can be driven from tests with a
//! seeded RNG.
//!
//! ```
//! use game_2048::engine::{Direction, SpawnRule};
//! use game_2048::game::{Command, Game, Screen};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let game = Game::new(SpawnRule::Even).apply(Command::Start, &mut rng);
//! assert_eq!(game.screen(), Screen::Playing);
//! assert_eq!(game.board().count_empty(), 14);
//! let game = game.apply(Command::Slide(Direction::Left), &mut rng);
//! assert!(game.board().count_empty() <= 14);
//! ```

use log::{debug, info};
use rand::Rng;

use crate::engine::{Board, Direction, Score, SpawnRule};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The winning tile appeared.
    Won,
    /// No direction changes the board.
    Stuck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Start,
    Playing,
    GameOver(Outcome),
}

/// Something the player asked for. Commands that do not belong to the
/// current screen are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Retry,
    Slide(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    score: Score,
    high_score: Score,
    screen: Screen,
    spawn_rule: SpawnRule,
}

impl Game {
    /// A session sitting on the start screen with an empty board.
    pub fn new(spawn_rule: SpawnRule) -> Self {
        Game {
            board: Board::EMPTY,
            score: 0,
            high_score: 0,
            screen: Screen::Start,
            spawn_rule,
        }
    }

    #[inline]
    pub fn board(&self) -> Board { self.board }

    #[inline]
    pub fn score(&self) -> Score { self.score }

    /// Best score seen this session, including the game in progress once it ends.
    #[inline]
    pub fn high_score(&self) -> Score { self.high_score }

    #[inline]
    pub fn screen(&self) -> Screen { self.screen }

    #[inline]
    pub fn spawn_rule(&self) -> SpawnRule { self.spawn_rule }

    /// Advance the session by one command.
    pub fn apply<R: Rng + ?Sized>(self, command: Command, rng: &mut R) -> Game {
        match (self.screen, command) {
            (Screen::Start, Command::Start) => {
                info!("starting new game");
                self.restart(rng)
            }
            (Screen::GameOver(_), Command::Retry) => {
                let game = Game { high_score: self.high_score.max(self.score), ..self };
                info!("retrying; high score {}", game.high_score);
                game.restart(rng)
            }
            (Screen::Playing, Command::Slide(dir)) => self.slide(dir, rng),
            (screen, command) => {
                debug!("ignoring {command:?} on {screen:?}");
                self
            }
        }
    }

    fn restart<R: Rng + ?Sized>(self, rng: &mut R) -> Game {
        Game {
            board: Board::new_game(self.spawn_rule, rng),
            score: 0,
            screen: Screen::Playing,
            ..self
        }
    }

    fn slide<R: Rng + ?Sized>(self, dir: Direction, rng: &mut R) -> Game {
        let out = self.board.make_move(dir, self.spawn_rule, rng);
        if !out.moved {
            debug!("{dir:?} left the board unchanged");
            return self;
        }
        let mut game = Game { board: out.board, score: self.score + out.score_delta, ..self };
        debug!("{dir:?} scored {}, total {}", out.score_delta, game.score);
        if game.board.is_terminal() {
            let outcome = if game.board.is_won() { Outcome::Won } else { Outcome::Stuck };
            game.high_score = game.high_score.max(game.score);
            game.screen = Screen::GameOver(outcome);
            info!("game over ({outcome:?}) with score {}", game.score);
        }
        game
    }

    /// A session positioned mid-game on `board`. Used to resume from a known
    /// position, mostly in tests.
    pub fn with_board(self, board: Board, score: Score) -> Game {
        Game { board, score, screen: Screen::Playing, ..self }
    }
}
