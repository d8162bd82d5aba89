//! game-2048: the 2048 sliding-tile puzzle in the terminal
//!
//! This crate provides:
//! - A compact `Board` type with the move rules (`engine` module): line merging,
//!   shifting, random tile spawns and terminal-state detection
//! - The start / playing / game-over state machine with score and high score (`game` module)
//! - Session settings loaded from TOML (`config` module)
//! - A crossterm front end with splash, mouse buttons and arrow-key play (`ui` module)
//!
//! Quick start:
//! ```
//! use game_2048::engine::{Board, Direction, SpawnRule};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic board initialization with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let b0 = Board::new_game(SpawnRule::Even, &mut rng);
//! let out = b0.make_move(Direction::Left, SpawnRule::Even, &mut rng);
//! assert!(out.moved || out.board == b0);
//! ```
//!
//! Full loop (headless)
//! ```
//! use game_2048::engine::{Direction, SpawnRule};
//! use game_2048::game::{Command, Game, Screen};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(123);
//! let mut game = Game::new(SpawnRule::Classic).apply(Command::Start, &mut rng);
//! let mut turns = 0;
//! while game.screen() == Screen::Playing && turns < 200 {
//!     game = game.apply(Command::Slide(Direction::ALL[turns % 4]), &mut rng);
//!     turns += 1;
//! }
//! if let Screen::GameOver(_) = game.screen() {
//!     assert_eq!(game.high_score(), game.score());
//! }
//! ```
//!
pub mod config;
pub mod engine;
pub mod game;
pub mod ui;
