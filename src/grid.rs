// Copyright (c) 2026 glyphrain developers

/// Largest grid extent the backing storage supports. Terminal sizes beyond
/// this are clamped, never grown into.
pub const MAX_COLUMNS: usize = 2048;
pub const MAX_ROWS: usize = 2048;
const CAPACITY: usize = MAX_COLUMNS * MAX_ROWS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RainCell {
    pub glyph: char,
    pub brightness: u8,
}

impl RainCell {
    pub const DORMANT: RainCell = RainCell {
        glyph: ' ',
        brightness: 0,
    };
}

/// Flat row-major cell arena. The buffer is allocated once at full capacity;
/// resizes only move the logical `columns`/`rows` extent. Cell (r, c) lives
/// at flat index `r * columns + c`, so the mapping of surviving bytes shifts
/// whenever `columns` changes (the simulator reseeds around that).
pub struct GlyphGrid {
    cells: Vec<RainCell>,
    columns: usize,
    rows: usize,
}

impl GlyphGrid {
    pub fn new() -> Self {
        Self {
            cells: vec![RainCell::DORMANT; CAPACITY],
            columns: 0,
            rows: 0,
        }
    }

    pub fn clamp_extent(columns: usize, rows: usize) -> (usize, usize) {
        (columns.min(MAX_COLUMNS), rows.min(MAX_ROWS))
    }

    pub fn set_extent(&mut self, columns: usize, rows: usize) {
        let (columns, rows) = Self::clamp_extent(columns, rows);
        self.columns = columns;
        self.rows = rows;
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells in the active region.
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cell(&self, index: usize) -> RainCell {
        debug_assert!(index < CAPACITY);
        self.cells[index]
    }

    pub fn brightness(&self, index: usize) -> u8 {
        debug_assert!(index < CAPACITY);
        self.cells[index].brightness
    }

    pub fn set_glyph(&mut self, index: usize, glyph: char) {
        debug_assert!(index < CAPACITY);
        self.cells[index].glyph = glyph;
    }

    pub fn set_brightness(&mut self, index: usize, brightness: u8) {
        debug_assert!(index < CAPACITY);
        self.cells[index].brightness = brightness;
    }

    pub fn set_cell(&mut self, index: usize, cell: RainCell) {
        debug_assert!(index < CAPACITY);
        self.cells[index] = cell;
    }
}

impl Default for GlyphGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_is_clamped_to_capacity() {
        let mut g = GlyphGrid::new();
        g.set_extent(MAX_COLUMNS + 100, MAX_ROWS + 100);
        assert_eq!(g.columns(), MAX_COLUMNS);
        assert_eq!(g.rows(), MAX_ROWS);
        assert_eq!(g.len(), MAX_COLUMNS * MAX_ROWS);
    }

    #[test]
    fn cells_are_row_major() {
        let mut g = GlyphGrid::new();
        g.set_extent(10, 5);
        let idx = 3 * g.columns() + 7;
        g.set_cell(
            idx,
            RainCell {
                glyph: 'x',
                brightness: 200,
            },
        );
        assert_eq!(g.cell(idx).glyph, 'x');
        assert_eq!(g.brightness(idx), 200);
    }

    #[test]
    fn fresh_grid_is_empty_until_sized() {
        let mut g = GlyphGrid::new();
        assert!(g.is_empty());
        g.set_extent(3, 2);
        assert!(!g.is_empty());
        assert_eq!(g.len(), 6);
    }

    #[test]
    fn resize_never_reallocates() {
        let mut g = GlyphGrid::new();
        g.set_extent(80, 25);
        let ptr = g.cells.as_ptr();
        g.set_extent(200, 60);
        g.set_extent(10, 4);
        assert_eq!(g.cells.as_ptr(), ptr);
    }
}
