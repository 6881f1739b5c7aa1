// Copyright (c) 2026 glyphrain developers

use crossterm::style::Color;

/// One rendered glyph cell: character plus resolved style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Cell {
    pub fn blank_with_bg(bg: Option<Color>) -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg,
            bold: false,
        }
    }
}

/// Off-screen buffer in glyph-cell space (not terminal columns; the
/// terminal writer applies the pitch). Writes that change a cell are
/// recorded as dirty indices so the writer can redraw only what moved.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    cells: Vec<Cell>,
    dirty_all: bool,
    dirty_map: Vec<bool>,
    dirty: Vec<usize>,
}

impl Frame {
    pub fn new(width: u16, height: u16, bg: Option<Color>) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::blank_with_bg(bg); len],
            dirty_all: true,
            dirty_map: vec![false; len],
            dirty: Vec::new(),
        }
    }

    pub fn is_dirty_all(&self) -> bool {
        self.dirty_all
    }

    pub fn dirty_indices(&self) -> &[usize] {
        &self.dirty
    }

    pub fn sort_dirty(&mut self) {
        if self.dirty.len() > 1 {
            self.dirty.sort_unstable();
        }
    }

    pub fn clear_dirty(&mut self) {
        self.dirty_all = false;
        for &i in &self.dirty {
            self.dirty_map[i] = false;
        }
        self.dirty.clear();
    }

    pub fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn cell_at_index(&self, i: usize) -> Cell {
        self.cells[i]
    }

    #[allow(dead_code)]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            if self.cells[i] == cell {
                return;
            }
            self.cells[i] = cell;
            if !self.dirty_all && !self.dirty_map[i] {
                self.dirty_map[i] = true;
                self.dirty.push(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(ch: char) -> Cell {
        Cell {
            ch,
            fg: None,
            bg: None,
            bold: false,
        }
    }

    #[test]
    fn changed_cells_become_dirty_once() {
        let mut f = Frame::new(4, 2, None);
        f.clear_dirty();
        f.set(1, 0, glyph('a'));
        f.set(1, 0, glyph('b'));
        assert_eq!(f.dirty_indices(), &[1]);
        assert_eq!(f.get(1, 0).unwrap().ch, 'b');
    }

    #[test]
    fn identical_write_is_not_dirty() {
        let mut f = Frame::new(4, 2, None);
        f.clear_dirty();
        f.set(2, 1, glyph(' '));
        assert!(f.dirty_indices().is_empty());
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut f = Frame::new(4, 2, None);
        f.clear_dirty();
        f.set(4, 0, glyph('x'));
        f.set(0, 2, glyph('x'));
        assert!(f.dirty_indices().is_empty());
    }

    #[test]
    fn new_frame_wants_a_full_redraw() {
        let mut f = Frame::new(2, 2, None);
        assert!(f.is_dirty_all());
        f.clear_dirty();
        assert!(!f.is_dirty_all());
    }
}
