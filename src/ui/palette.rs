use crossterm::style::Color;

use crate::engine::{Tile, WINNING_TILE};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub const BACKGROUND: Color = rgb(250, 248, 239);
pub const TEXT: Color = rgb(119, 110, 101);
pub const GRID_LINE: Color = rgb(187, 173, 160);
pub const BUTTON: Color = rgb(187, 173, 160);
pub const BUTTON_HOVER: Color = rgb(150, 150, 150);

const EMPTY_TILE: Color = rgb(205, 193, 180);

const TILE_COLORS: [(Tile, Color); 11] = [
    (2, rgb(238, 228, 218)),
    (4, rgb(237, 224, 200)),
    (8, rgb(242, 177, 121)),
    (16, rgb(245, 149, 99)),
    (32, rgb(246, 124, 95)),
    (64, rgb(246, 94, 59)),
    (128, rgb(237, 207, 114)),
    (256, rgb(237, 204, 97)),
    (512, rgb(237, 200, 80)),
    (1024, rgb(237, 197, 63)),
    (WINNING_TILE, rgb(237, 194, 46)),
];

/// Fill color for a cell. Tiles past 2048 reuse the 2048 color.
pub fn tile_color(value: Tile) -> Color {
    let value = value.min(WINNING_TILE);
    TILE_COLORS
        .iter()
        .find(|&&(tile, _)| tile == value)
        .map_or(EMPTY_TILE, |&(_, color)| color)
}

/// Background for screen row `row` of `height`: the top half fades from the
/// background color into a slightly darker cream, the bottom half is flat.
pub fn gradient(row: u16, height: u16) -> Color {
    const TOP: (u16, u16, u16) = (250, 248, 239);
    const MID: (u16, u16, u16) = (244, 240, 228);
    let half = height / 2;
    if half == 0 || row >= half {
        return BACKGROUND;
    }
    let mix = |a: u16, b: u16| ((a * (half - row) + b * row) / half) as u8;
    rgb(mix(TOP.0, MID.0), mix(TOP.1, MID.1), mix(TOP.2, MID.2))
}
