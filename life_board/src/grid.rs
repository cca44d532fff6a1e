// grid.rs - Bounded Game of Life board

use std::fmt;

use tracing::debug;

use crate::BoardError;

pub const DEFAULT_WIDTH: usize = 30;
pub const DEFAULT_HEIGHT: usize = 30;

/// Dead cells padded around the active area so neighbor reads never leave the buffer.
const BORDER: usize = 1;

/// A `(row, col)` coordinate inside the active area.
pub type Cell = (usize, usize);

/// A fixed-size, non-wrapping Game of Life board.
///
/// Cells live in a row-major buffer of `(height + 2) x (width + 2)` with a
/// permanently dead border, so positions off the edge of the board simply
/// read as dead.
#[derive(Debug, Clone)]
pub struct LifeBoard {
    width: usize,
    height: usize,
    stride: usize,
    cells: Vec<bool>,
    next_cells: Vec<bool>,
    generation: u64,
}

impl LifeBoard {
    /// Creates a `width x height` board with every cell dead, at generation 1.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimension { width, height });
        }

        Ok(Self::blank(width, height))
    }

    fn blank(width: usize, height: usize) -> Self {
        let stride = width + 2 * BORDER;
        let total = stride * (height + 2 * BORDER);
        Self {
            width,
            height,
            stride,
            cells: vec![false; total],
            next_cells: vec![false; total],
            generation: 1,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of generations applied so far, starting at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        let index = self.checked_index(row, col)?;
        Ok(self.cells[index])
    }

    /// Flips a single cell between alive and dead.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let index = self.checked_index(row, col)?;
        self.cells[index] = !self.cells[index];
        Ok(())
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), BoardError> {
        let index = self.checked_index(row, col)?;
        self.cells[index] = alive;
        Ok(())
    }

    /// Counts live cells among the 8 Moore neighbors of `(row, col)`.
    ///
    /// Neighbors past the edge of the board count as dead.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> Result<u8, BoardError> {
        let index = self.checked_index(row, col)?;
        Ok(self.neighbors_at(index))
    }

    /// Number of live cells on the board.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.cells[self.index(row, col)])
    }

    /// Advances the board by one generation.
    ///
    /// Every cell is computed from the state before the call; the new
    /// generation is swapped in at once. Returns the cells that flipped, in
    /// row-major order.
    pub fn step(&mut self) -> Vec<Cell> {
        let mut changed = Vec::new();

        for row in 0..self.height {
            for col in 0..self.width {
                let index = self.index(row, col);
                let current_alive = self.cells[index];

                let next_state = match (current_alive, self.neighbors_at(index)) {
                    (true, 2) | (true, 3) => true,  // Survival
                    (false, 3)            => true,  // Birth
                    _                     => false, // Death or stays dead
                };

                self.next_cells[index] = next_state;
                if next_state != current_alive {
                    changed.push((row, col));
                }
            }
        }

        // Border cells of `next_cells` are never written, so both buffers keep a dead border.
        std::mem::swap(&mut self.cells, &mut self.next_cells);
        self.generation += 1;
        debug_assert!(self.border_is_dead());

        debug!(
            generation = self.generation,
            changed = changed.len(),
            population = self.population(),
            "stepped board"
        );
        changed
    }

    fn index(&self, row: usize, col: usize) -> usize {
        (row + BORDER) * self.stride + col + BORDER
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.index(row, col))
    }

    /// `index` must address the active area; the padding keeps every offset in range.
    fn neighbors_at(&self, index: usize) -> u8 {
        let s = self.stride;
        let neighbors = [
            index - s - 1, index - s, index - s + 1,
            index - 1,                index + 1,
            index + s - 1, index + s, index + s + 1,
        ];

        neighbors.iter().filter(|&&n| self.cells[n]).count() as u8
    }

    fn border_is_dead(&self) -> bool {
        let rows = self.height + 2 * BORDER;
        (0..rows).all(|row| {
            (0..self.stride).all(|col| {
                let on_border = row == 0 || row == rows - 1 || col == 0 || col == self.stride - 1;
                !on_border || !self.cells[row * self.stride + col]
            })
        })
    }
}

impl Default for LifeBoard {
    fn default() -> Self {
        Self::blank(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Renders the board as rows of `#` (alive) and `.` (dead).
impl fmt::Display for LifeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let glyph = if self.cells[self.index(row, col)] { '#' } else { '.' };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board_with(width: usize, height: usize, live: &[Cell]) -> LifeBoard {
        let mut board = LifeBoard::new(width, height).unwrap();
        for &(row, col) in live {
            board.set(row, col, true).unwrap();
        }
        board
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            LifeBoard::new(0, 5).unwrap_err(),
            BoardError::InvalidDimension { width: 0, height: 5 }
        );
        assert_eq!(
            LifeBoard::new(5, 0).unwrap_err(),
            BoardError::InvalidDimension { width: 5, height: 0 }
        );
    }

    #[test]
    fn one_past_the_end_is_out_of_bounds() {
        let mut board = LifeBoard::new(4, 3).unwrap();
        let err = BoardError::OutOfBounds { row: 3, col: 0, height: 3, width: 4 };
        assert_eq!(board.is_alive(3, 0), Err(err));
        assert_eq!(board.toggle(3, 0), Err(err));

        let err = BoardError::OutOfBounds { row: 0, col: 4, height: 3, width: 4 };
        assert_eq!(board.is_alive(0, 4), Err(err));
        assert_eq!(board.toggle(0, 4), Err(err));
        assert_eq!(board.count_live_neighbors(0, 4), Err(err));
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn default_board_is_thirty_by_thirty() {
        let board = LifeBoard::default();
        assert_eq!((board.width(), board.height()), (30, 30));
        assert_eq!(board.generation(), 1);
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn corner_cell_counts_only_on_board_neighbors() {
        let board = board_with(3, 3, &[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(board.count_live_neighbors(0, 0), Ok(3));
        assert_eq!(board.count_live_neighbors(2, 2), Ok(1));
    }

    #[test]
    fn fully_alive_interior_has_eight_neighbors() {
        let all: Vec<Cell> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let board = board_with(3, 3, &all);
        assert_eq!(board.count_live_neighbors(1, 1), Ok(8));
        assert_eq!(board.count_live_neighbors(0, 0), Ok(3));
    }

    #[test]
    fn step_reads_a_single_snapshot() {
        // (1,1) has 3 live neighbors before the step and survives. (0,1) is born in
        // the same step; reading it early would give (1,1) four neighbors.
        let mut board = board_with(5, 5, &[(0, 0), (0, 2), (1, 1), (2, 1)]);
        assert_eq!(board.count_live_neighbors(1, 1), Ok(3));
        assert_eq!(board.count_live_neighbors(0, 1), Ok(3));

        let changed = board.step();
        assert!(changed.contains(&(0, 1)));
        assert!(!changed.contains(&(1, 1)));
        assert_eq!(board.is_alive(0, 1), Ok(true));
        assert_eq!(board.is_alive(1, 1), Ok(true));
    }

    #[test]
    fn live_edge_row_does_not_wrap() {
        let mut board = board_with(3, 3, &[(0, 0), (0, 1), (0, 2)]);
        board.step();
        // On a wrapping board the bottom row would see the top row and come alive.
        assert_eq!(board.live_cells().collect::<Vec<_>>(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn display_draws_rows() {
        let board = board_with(3, 2, &[(0, 1), (1, 2)]);
        assert_eq!(board.to_string(), ".#.\n..#\n");
    }

    proptest! {
        #[test]
        fn fresh_board_is_dead(width in 1usize..40, height in 1usize..40) {
            let board = LifeBoard::new(width, height).unwrap();
            for row in 0..height {
                for col in 0..width {
                    prop_assert_eq!(board.is_alive(row, col), Ok(false));
                }
            }
        }

        #[test]
        fn toggle_twice_is_identity(
            live in prop::collection::vec((0usize..8, 0usize..8), 0..20),
            row in 0usize..8,
            col in 0usize..8,
        ) {
            let mut board = board_with(8, 8, &live);
            let before = board.is_alive(row, col).unwrap();
            board.toggle(row, col).unwrap();
            prop_assert_eq!(board.is_alive(row, col).unwrap(), !before);
            board.toggle(row, col).unwrap();
            prop_assert_eq!(board.is_alive(row, col).unwrap(), before);
        }

        #[test]
        fn neighbor_count_matches_bounded_scan(
            live in prop::collection::vec((0usize..6, 0usize..6), 0..36),
            row in 0usize..6,
            col in 0usize..6,
        ) {
            let board = board_with(6, 6, &live);
            let mut expected = 0;
            for dr in -1i64..=1 {
                for dc in -1i64..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (r, c) = (row as i64 + dr, col as i64 + dc);
                    if r >= 0 && c >= 0 && board.is_alive(r as usize, c as usize).unwrap_or(false) {
                        expected += 1;
                    }
                }
            }
            let count = board.count_live_neighbors(row, col).unwrap();
            prop_assert!(count <= 8);
            prop_assert_eq!(u32::from(count), expected);
        }

        #[test]
        fn generation_advances_by_one_per_step(
            live in prop::collection::vec((0usize..10, 0usize..10), 0..30),
            steps in 1u64..20,
        ) {
            let mut board = board_with(10, 10, &live);
            for expected in 2..=steps + 1 {
                let changed = board.step();
                prop_assert_eq!(board.generation(), expected);
                prop_assert!(changed.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
