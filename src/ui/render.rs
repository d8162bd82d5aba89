//! Full-frame terminal renderer.
//!
//! Every draw clears the screen and repaints the current screen from the
//! [`Game`] value. Commands are batched with `queue!` and flushed once per
//! frame.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use super::layout::{Button, Layout, Rect};
use super::palette;
use crate::game::{Game, Outcome, Screen};

pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Renderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn draw(&mut self, game: &Game, layout: &Layout, hover: Option<Button>) -> io::Result<()> {
        self.clear()?;
        match game.screen() {
            Screen::Start => self.compose_start(layout, hover)?,
            Screen::Playing => self.compose_board(game, layout)?,
            Screen::GameOver(outcome) => self.compose_game_over(game, outcome, layout, hover)?,
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Show the splash art centered in the game area.
    pub fn draw_splash(&mut self, art: &str, layout: &Layout) -> io::Result<()> {
        self.clear()?;
        let lines: Vec<&str> = art.lines().collect();
        let width = lines.iter().map(|l| text_width(l)).max().unwrap_or(0);
        let top = layout.screen.middle_row().saturating_sub(lines.len() as u16 / 2);
        let left = layout.screen.centered_col(width);
        for (i, line) in lines.iter().enumerate() {
            self.text_at(left, top + i as u16, line, palette::TEXT, palette::BACKGROUND)?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, SetBackgroundColor(palette::BACKGROUND), Clear(ClearType::All))
    }

    fn compose_start(&mut self, layout: &Layout, hover: Option<Button>) -> io::Result<()> {
        self.centered_text(layout.screen, layout.title_row(), "2048 Game", palette::BACKGROUND)?;
        self.button(layout, Button::Start, hover)
    }

    fn compose_board(&mut self, game: &Game, layout: &Layout) -> io::Result<()> {
        let screen = layout.screen;
        for dy in 0..screen.height {
            let bg = palette::gradient(dy, screen.height);
            self.fill(Rect::new(screen.x, screen.y + dy, screen.width, 1), bg)?;
        }
        self.fill(layout.board(), palette::GRID_LINE)?;
        for (row, values) in game.board().rows().iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let rect = layout.tile(row, col);
                let bg = palette::tile_color(value);
                self.fill(rect, bg)?;
                if value != 0 {
                    self.centered_text(rect, rect.middle_row(), &value.to_string(), bg)?;
                }
            }
        }
        let (x, y) = layout.score_pos();
        let bg = palette::gradient(y - screen.y, screen.height);
        self.text_at(x, y, &format!("Score: {}", game.score()), palette::TEXT, bg)
    }

    fn compose_game_over(
        &mut self,
        game: &Game,
        outcome: Outcome,
        layout: &Layout,
        hover: Option<Button>,
    ) -> io::Result<()> {
        let title = match outcome {
            Outcome::Won => "You Win!",
            Outcome::Stuck => "Game Over!",
        };
        let bg = palette::BACKGROUND;
        let row = layout.summary_row();
        self.centered_text(layout.screen, layout.title_row(), title, bg)?;
        self.centered_text(layout.screen, row, &format!("Your Score: {}", game.score()), bg)?;
        self.centered_text(layout.screen, row + 2, &format!("High Score: {}", game.high_score()), bg)?;
        self.button(layout, Button::Retry, hover)
    }

    fn button(&mut self, layout: &Layout, button: Button, hover: Option<Button>) -> io::Result<()> {
        let rect = layout.button(button);
        let bg = if hover == Some(button) { palette::BUTTON_HOVER } else { palette::BUTTON };
        self.fill(rect, bg)?;
        self.centered_text(rect, rect.middle_row(), button.label(), bg)
    }

    fn fill(&mut self, rect: Rect, color: Color) -> io::Result<()> {
        let blank = " ".repeat(rect.width as usize);
        queue!(self.out, SetBackgroundColor(color))?;
        for y in rect.y..rect.y + rect.height {
            queue!(self.out, MoveTo(rect.x, y), Print(&blank))?;
        }
        Ok(())
    }

    fn centered_text(&mut self, within: Rect, row: u16, text: &str, bg: Color) -> io::Result<()> {
        self.text_at(within.centered_col(text_width(text)), row, text, palette::TEXT, bg)
    }

    fn text_at(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Color) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y), SetForegroundColor(fg), SetBackgroundColor(bg), Print(text))
    }
}

fn text_width(text: &str) -> u16 {
    text.chars().count().min(u16::MAX as usize) as u16
}
