// Copyright (c) 2026 rezky_nightky

use std::io::Result;

use crate::palette::LogoColor;

/// Something the logo can be drawn on.
pub trait Surface {
    /// Current viewport size as `(rows, cols)`. May change between calls.
    fn dimensions(&self) -> Result<(u16, u16)>;

    fn clear(&mut self) -> Result<()>;

    /// Draws `text` starting at `(row, col)`. Coordinates outside the
    /// viewport, negative ones included, are clipped.
    fn draw_line(&mut self, row: i32, col: i32, text: &str, color: LogoColor) -> Result<()>;

    fn present(&mut self) -> Result<()>;

    fn cursor_visible(&mut self, visible: bool) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key,
    Interrupt,
}

/// Non-blocking source of stop requests.
pub trait InputSource {
    fn poll(&mut self) -> Result<Option<InputEvent>>;
}
