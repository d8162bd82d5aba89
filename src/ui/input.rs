//! Maps crossterm events onto game commands.
//!
//! | Input | Action |
//! |-------|--------|
//! | arrow keys | slide |
//! | left click on the visible button | start / retry |
//! | Enter | press the visible button |
//! | Q, Esc, Ctrl+C | quit |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::layout::{Button, Layout};
use crate::engine::Direction;
use crate::game::{Command, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Command(Command),
    /// The pointer moved; carries the live button under it, if any.
    Hover(Option<Button>),
    Resize(u16, u16),
    Quit,
}

pub fn map_event(event: &Event, screen: Screen, layout: &Layout) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key, screen),
        Event::Mouse(mouse) => map_mouse(mouse, screen, layout),
        Event::Resize(cols, rows) => Some(Action::Resize(*cols, *rows)),
        _ => None,
    }
}

fn map_key(key: &KeyEvent, screen: Screen) -> Option<Action> {
    // Terminals that report releases would otherwise move twice per press.
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let slide = |dir| Some(Action::Command(Command::Slide(dir)));
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up => slide(Direction::Up),
        KeyCode::Down => slide(Direction::Down),
        KeyCode::Left => slide(Direction::Left),
        KeyCode::Right => slide(Direction::Right),
        KeyCode::Enter => Button::on(screen).map(|b| Action::Command(b.command())),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, screen: Screen, layout: &Layout) -> Option<Action> {
    let hit = layout.hit_test(screen, mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => hit.map(|b| Action::Command(b.command())),
        MouseEventKind::Moved => Some(Action::Hover(hit)),
        _ => None,
    }
}
