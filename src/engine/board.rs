use std::fmt;

use crate::error::EngineError;

use super::Move;

/// Board size used when none is configured.
pub const DEFAULT_SIZE: usize = 4;

/// A tile's face value: 0 for an empty cell, otherwise a power of two >= 2.
pub type Tile = u64;

/// Largest tile a [`Tile`] can hold. Two of them stay side by side instead of merging.
pub const MAX_TILE: Tile = 1 << 63;

/// Square 2048 board stored row-major.
///
/// Equality and hashing are structural over the size and cell values, so a
/// `Board` can key a memoization table directly.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Box<[Tile]>,
}

impl Board {
    /// An empty `size`×`size` board.
    ///
    /// ```
    /// use sim_2048::engine::Board;
    /// let b = Board::new(5).unwrap();
    /// assert_eq!(b.count_empty(), 25);
    /// assert!(Board::new(0).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidBoardSize(size));
        }
        Ok(Board::zeroed(size))
    }

    /// An empty board of [`DEFAULT_SIZE`].
    pub fn empty() -> Self { Board::zeroed(DEFAULT_SIZE) }

    /// Empty board for a size already known to be at least 1.
    pub(crate) fn zeroed(size: usize) -> Self {
        debug_assert!(size >= 1);
        Board { size, cells: vec![0; size * size].into_boxed_slice() }
    }

    /// Build a board from rows of tile values, validating shape and tiles.
    ///
    /// ```
    /// use sim_2048::engine::Board;
    /// let b = Board::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(b.get(1, 1), 4);
    /// assert!(Board::from_rows(&[[3, 0], [0, 0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, EngineError> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidBoardSize(0));
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != size {
                return Err(EngineError::NonSquare { rows: size, row, len: r.len() });
            }
            cells.extend_from_slice(r);
        }
        Board::from_cells(size, cells)
    }

    /// Build a board from row-major cells.
    pub fn from_cells(size: usize, cells: Vec<Tile>) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidBoardSize(size));
        }
        if cells.len() != size * size {
            return Err(EngineError::CellCount { size, len: cells.len() });
        }
        if let Some((index, &value)) = cells.iter().enumerate().find(|&(_, &v)| !is_valid_tile(v)) {
            return Err(EngineError::InvalidTile { index, value });
        }
        Ok(Board { size, cells: cells.into_boxed_slice() })
    }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    /// Row-major view of every cell.
    #[inline]
    pub fn cells(&self) -> &[Tile] { &self.cells }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Value at `(row, col)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) outside {0}x{0} board", self.size);
        self.cells[row * self.size + col]
    }

    /// Value at row-major index `idx`.
    #[inline]
    pub fn tile_value(&self, idx: usize) -> Tile { self.cells[idx] }

    #[inline]
    pub(crate) fn set(&mut self, idx: usize, value: Tile) {
        debug_assert!(is_valid_tile(value));
        self.cells[idx] = value;
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Highest tile value on the board (0 for an empty board).
    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of every tile value.
    /// Sum of all tiles, saturating at `u64::MAX`.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().fold(0, |acc: u64, &v| acc.saturating_add(v))
    }

    /// True iff the board is full and no two orthogonal neighbours are equal.
    ///
    /// ```
    /// use sim_2048::engine::Board;
    /// assert!(!Board::empty().is_game_over());
    /// let stuck = Board::from_rows(&[[2, 4], [4, 2]]).unwrap();
    /// assert!(stuck.is_game_over());
    /// ```
    pub fn is_game_over(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let v = self.cells[row * n + col];
                if col + 1 < n && can_merge(v, self.cells[row * n + col + 1]) {
                    return false;
                }
                if row + 1 < n && can_merge(v, self.cells[(row + 1) * n + col]) {
                    return false;
                }
            }
        }
        true
    }

    /// Directions whose slide changes the board, in [`Move::ALL`] order.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL.into_iter().filter(|&m| self.slide(m).changed).collect()
    }
}

impl Default for Board {
    fn default() -> Self { Board::empty() }
}

/// Whether two neighbouring tiles combine on a slide.
#[inline]
pub(crate) fn can_merge(a: Tile, b: Tile) -> bool {
    a == b && a != 0 && a < MAX_TILE
}

/// 0, or a power of two that is at least 2.
#[inline]
pub(crate) fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{} {:?})", self.size, self.size, self.to_rows())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.size * 8 - 1);
        writeln!(f)?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f, "{rule}")?;
            }
            let cells: Vec<String> = row.iter().map(|&v| format_val(v)).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

fn format_val(val: Tile) -> String {
    match val {
        0 => " ".repeat(7),
        v => format!("{v:^7}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(Board::new(0), Err(EngineError::InvalidBoardSize(0)));
        let empty: [[Tile; 0]; 0] = [];
        assert_eq!(Board::from_rows(&empty), Err(EngineError::InvalidBoardSize(0)));
        let ragged: Vec<Vec<Tile>> = vec![vec![0, 0], vec![0]];
        assert_eq!(Board::from_rows(&ragged), Err(EngineError::NonSquare { rows: 2, row: 1, len: 1 }));
    }

    #[test]
    fn rejects_non_power_of_two_tiles() {
        assert_eq!(
            Board::from_rows(&[[0, 6], [0, 0]]),
            Err(EngineError::InvalidTile { index: 1, value: 6 })
        );
        assert_eq!(
            Board::from_rows(&[[0, 0], [1, 0]]),
            Err(EngineError::InvalidTile { index: 2, value: 1 })
        );
    }

    #[test]
    fn it_count_empty() {
        let b = Board::from_rows(&[[2, 2, 2, 2], [0, 0, 0, 0], [2, 2, 2, 2], [0, 0, 0, 0]]).unwrap();
        assert_eq!(b.count_empty(), 8);
        let b = Board::from_rows(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        assert_eq!(b.count_empty(), 14);
        assert_eq!(Board::empty().count_empty(), 16);
    }

    #[test]
    fn it_get_tile_val() {
        let b = Board::from_rows(&[[0, 2, 4, 8], [16, 32, 64, 128], [256, 512, 1024, 2048], [4096, 8192, 16384, 32768]])
            .unwrap();
        assert_eq!(b.tile_value(3), 8);
        assert_eq!(b.get(2, 2), 1024);
        assert_eq!(b.tile_value(15), 32768);
        assert_eq!(b.highest_tile(), 32768);
    }

    #[test]
    fn game_over_requires_full_board_without_equal_neighbours() {
        let checker = Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        assert!(checker.is_game_over());
        assert!(checker.legal_moves().is_empty());

        let vertical_pair = Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 16, 32]]).unwrap();
        assert!(!vertical_pair.is_game_over());
        assert_eq!(vertical_pair.legal_moves(), vec![Move::Up, Move::Down]);

        let with_hole = Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]).unwrap();
        assert!(!with_hole.is_game_over());
    }

    #[test]
    fn single_cell_board() {
        let b = Board::from_rows(&[[2]]).unwrap();
        assert!(b.is_game_over());
        assert!(!Board::new(1).unwrap().is_game_over());
    }

    #[test]
    fn largest_tiles_never_overflow() {
        let b = Board::from_rows(&[[MAX_TILE, MAX_TILE], [2, 4]]).unwrap();
        assert_eq!(b.tile_sum(), u64::MAX);
        assert!(b.is_game_over());
        assert!(b.legal_moves().is_empty());

        let b = Board::from_rows(&[[MAX_TILE, MAX_TILE], [0, 0]]).unwrap();
        let s = b.slide(Move::Left);
        assert!(!s.changed);
        assert_eq!(s.score_delta, 0);
        assert_eq!(b.legal_moves(), vec![Move::Down]);

        let b = Board::from_rows(&[[MAX_TILE / 2, MAX_TILE / 2], [0, 0]]).unwrap();
        let s = b.slide(Move::Right);
        assert_eq!(s.board, Board::from_rows(&[[0, MAX_TILE], [0, 0]]).unwrap());
        assert_eq!(s.score_delta, MAX_TILE);
    }

    #[test]
    fn display_renders_every_row() {
        let b = Board::from_rows(&[[2, 0], [0, 1024]]).unwrap();
        let text = b.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("   2   |       "));
        assert!(text.contains(" 1024  "));
    }
}
