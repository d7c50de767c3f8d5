//! Render-ready copy of the board and session state.

use crate::types::{Position, EMPTY_SYMBOL, GRID_COLS, GRID_ROWS};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major display symbols, `rows * cols` long.
    pub cells: Vec<char>,
    pub player: Option<Position>,
    pub message: Option<&'static str>,
    pub game_over: bool,
    pub moves: u32,
}

impl GameSnapshot {
    /// Symbols of row `x`, `None` past the last row.
    pub fn row(&self, x: usize) -> Option<&[char]> {
        if x >= self.rows {
            return None;
        }
        let start = x * self.cols;
        self.cells.get(start..start + self.cols)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks(0) panics; an empty grid has nothing to yield anyway.
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    pub fn symbol_at(&self, pos: Position) -> Option<char> {
        if pos.x < 0 || pos.y < 0 || pos.y as usize >= self.cols {
            return None;
        }
        self.row(pos.x as usize).map(|r| r[pos.y as usize])
    }

    /// Plain-text board, one line per row, cells separated by a space.
    pub fn to_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                let mut line = String::with_capacity(row.len() * 2);
                for &ch in row {
                    line.push(ch);
                    line.push(' ');
                }
                line
            })
            .collect()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            cells: vec![EMPTY_SYMBOL; GRID_ROWS * GRID_COLS],
            player: None,
            message: None,
            game_over: false,
            moves: 0,
        }
    }
}
