// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

use crate::cell::Cell;

/// Off-screen cell grid the logo is drawn into before being diffed onto the
/// terminal.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    pub fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[cfg(test)]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn cell_at_index(&self, i: usize) -> Cell {
        self.cells.get(i).copied().unwrap_or(Cell::BLANK)
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Writes `text` left to right from `(row, col)`. Anything falling
    /// outside the grid is dropped; control chars become blanks so each char
    /// stays exactly one column wide on screen.
    pub fn put_str(&mut self, row: i32, col: i32, text: &str, fg: Color) {
        let Ok(y) = u16::try_from(row) else {
            return;
        };
        if y >= self.height {
            return;
        }
        for (x, ch) in (col..).zip(text.chars()) {
            if x < 0 {
                continue;
            }
            let Ok(x) = u16::try_from(x) else {
                break;
            };
            if x >= self.width {
                break;
            }
            let ch = if ch.is_control() { ' ' } else { ch };
            self.set(x, y, Cell::new(ch, fg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(f: &Frame, y: u16) -> String {
        (0..f.width).map(|x| f.get(x, y).unwrap().ch).collect()
    }

    #[test]
    fn put_str_clips_on_the_left_and_right() {
        let mut f = Frame::new(5, 2);
        f.put_str(0, -2, "abcd", Color::Red);
        assert_eq!(row_text(&f, 0), "cd   ");
        f.put_str(1, 3, "xyz", Color::Red);
        assert_eq!(row_text(&f, 1), "   xy");
    }

    #[test]
    fn rows_outside_the_grid_are_ignored() {
        let mut f = Frame::new(3, 2);
        f.put_str(-1, 0, "aaa", Color::Red);
        f.put_str(2, 0, "bbb", Color::Red);
        f.put_str(0, 10, "ccc", Color::Red);
        assert_eq!(row_text(&f, 0), "   ");
        assert_eq!(row_text(&f, 1), "   ");
    }

    #[test]
    fn control_chars_are_stored_as_blanks() {
        let mut f = Frame::new(4, 1);
        f.put_str(0, 0, "a\tb\x1b", Color::Red);
        assert_eq!(row_text(&f, 0), "a b ");
        assert_eq!(f.get(1, 0).unwrap().fg, Some(Color::Red));
    }

    #[test]
    fn clear_blanks_every_cell() {
        let mut f = Frame::new(2, 2);
        f.put_str(0, 0, "xy", Color::Blue);
        assert_eq!(f.get(1, 0).unwrap().fg, Some(Color::Blue));
        f.clear();
        assert_eq!(*f.get(1, 0).unwrap(), Cell::BLANK);
    }
}
