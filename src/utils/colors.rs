//! ANSI colour helpers for terminal output.

use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";

/// Rainbow palette the chart cycles through, red to violet.
const PALETTE: [(u8, u8, u8); 8] = [
    (230, 57, 70),
    (244, 140, 6),
    (250, 199, 16),
    (106, 190, 48),
    (46, 196, 182),
    (52, 152, 219),
    (91, 75, 212),
    (179, 65, 196),
];

pub fn slice_colour(index: usize) -> Colour {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Colour::RGB(r, g, b)
}

/// Paint `text` in the slice colour when `enabled`, otherwise return it as is.
pub fn paint_slice(index: usize, text: &str, enabled: bool) -> String {
    if enabled {
        slice_colour(index).paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Readout colour: green while running, grey when idle.
pub fn color_for_readout(running: bool) -> &'static str {
    if running { GREEN } else { GREY }
}
