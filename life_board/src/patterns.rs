// patterns.rs - Built-in seed patterns that can be stamped onto a board

use crate::grid::Cell;
use crate::{BoardError, LifeBoard};

/// A named set of live cells, given as offsets from the pattern's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Cell],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER];

impl Pattern {
    /// Looks up a built-in pattern, ignoring case.
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Absolute coordinates of the pattern when its corner sits at `origin`.
    pub fn cells(&self, origin: Cell) -> impl Iterator<Item = Cell> + '_ {
        let (row, col) = origin;
        self.cells.iter().map(move |&(dr, dc)| (row + dr, col + dc))
    }

    /// Sets the pattern's cells alive on `board`, leaving other cells as they are.
    ///
    /// Nothing is written unless every cell fits on the board.
    pub fn apply(&self, board: &mut LifeBoard, origin: Cell) -> Result<(), BoardError> {
        if let Some((row, col)) = self.cells(origin).find(|&(r, c)| !board.contains(r, c)) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                height: board.height(),
                width: board.width(),
            });
        }

        for (row, col) in self.cells(origin) {
            board.set(row, col, true)?;
        }
        Ok(())
    }
}
