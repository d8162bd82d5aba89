//! Screen geometry in terminal cells.
//!
//! Everything is laid out inside a fixed `SCREEN_W x SCREEN_H` area that is
//! centered in the terminal. The board sits two rows below the top edge to
//! leave room for the score readout; tiles are separated by one-cell grid
//! lines.

use crate::engine::SIZE;
use crate::game::{Command, Screen};

pub const TILE_W: u16 = 8;
pub const TILE_H: u16 = 3;
const GRID: u16 = SIZE as u16;
const BOARD_TOP: u16 = 2;
const GRID_W: u16 = GRID * TILE_W + GRID + 1;
const GRID_H: u16 = GRID * TILE_H + GRID + 1;
pub const SCREEN_W: u16 = GRID_W;
pub const SCREEN_H: u16 = BOARD_TOP + GRID_H;
const BUTTON_W: u16 = 14;
const BUTTON_H: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect { x, y, width, height }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.x + self.width && row >= self.y && row < self.y + self.height
    }

    /// Column at which `len` cells of text start when centered.
    pub fn centered_col(&self, len: u16) -> u16 {
        self.x + self.width.saturating_sub(len) / 2
    }

    pub fn middle_row(&self) -> u16 {
        self.y + self.height / 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Start,
    Retry,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Start => "Start",
            Button::Retry => "Retry",
        }
    }

    pub fn command(self) -> Command {
        match self {
            Button::Start => Command::Start,
            Button::Retry => Command::Retry,
        }
    }

    /// The only button that is live on `screen`, if any.
    pub fn on(screen: Screen) -> Option<Button> {
        match screen {
            Screen::Start => Some(Button::Start),
            Screen::GameOver(_) => Some(Button::Retry),
            Screen::Playing => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub screen: Rect,
}

impl Layout {
    /// Center the game area in a terminal of `cols x rows`. Small terminals
    /// pin it to the top-left corner.
    pub fn centered(cols: u16, rows: u16) -> Self {
        let x = cols.saturating_sub(SCREEN_W) / 2;
        let y = rows.saturating_sub(SCREEN_H) / 2;
        Layout { screen: Rect::new(x, y, SCREEN_W, SCREEN_H) }
    }

    /// The grid including its outer lines.
    pub fn board(&self) -> Rect {
        Rect::new(self.screen.x, self.screen.y + BOARD_TOP, GRID_W, GRID_H)
    }

    pub fn tile(&self, row: usize, col: usize) -> Rect {
        let board = self.board();
        Rect::new(
            board.x + 1 + col as u16 * (TILE_W + 1),
            board.y + 1 + row as u16 * (TILE_H + 1),
            TILE_W,
            TILE_H,
        )
    }

    pub fn score_pos(&self) -> (u16, u16) {
        (self.screen.x + 1, self.screen.y)
    }

    pub fn title_row(&self) -> u16 {
        self.screen.y + SCREEN_H / 4
    }

    /// Row of "Your Score" on the game-over screen; "High Score" sits two below.
    pub fn summary_row(&self) -> u16 {
        self.screen.y + SCREEN_H / 2 - 1
    }

    pub fn button(&self, button: Button) -> Rect {
        let y = match button {
            Button::Start => SCREEN_H / 2,
            Button::Retry => SCREEN_H / 2 + 4,
        };
        Rect::new(self.screen.x + SCREEN_W / 2 - BUTTON_W / 2, self.screen.y + y, BUTTON_W, BUTTON_H)
    }

    /// Button under the pointer, considering only the one live on `screen`.
    pub fn hit_test(&self, screen: Screen, col: u16, row: u16) -> Option<Button> {
        Button::on(screen).filter(|&b| self.button(b).contains(col, row))
    }
}
