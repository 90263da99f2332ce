use crate::engine::{Board, Tile};

/// Number of empty cells.
#[inline]
pub fn count_empty(board: &Board) -> usize {
    board.count_empty()
}

/// Value of the tile in the fixed top-left corner.
#[inline]
pub fn corner_value(board: &Board) -> Tile {
    board.cells()[0]
}

/// Direction changes along a line of tiles.
///
/// Walks the differences between neighbours and counts every time the sign
/// flips from rising to falling or back. Equal neighbours (difference 0)
/// carry the previous sign. A monotone line scores 0.
pub fn line_inversions(line: &[Tile]) -> u32 {
    let mut inversions = 0;
    let mut prev_sign = 0i8;
    for pair in line.windows(2) {
        let sign = match pair[1].cmp(&pair[0]) {
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => continue,
        };
        if prev_sign != 0 && sign != prev_sign {
            inversions += 1;
        }
        prev_sign = sign;
    }
    inversions
}

/// Sum of [`line_inversions`] over every row and every column.
pub fn monotonicity(board: &Board) -> u32 {
    let n = board.size();
    let rows: u32 = board.rows().map(line_inversions).sum();
    let mut column = Vec::with_capacity(n);
    let mut cols = 0;
    for col in 0..n {
        column.clear();
        column.extend((0..n).map(|row| board.cells()[row * n + col]));
        cols += line_inversions(&column);
    }
    rows + cols
}
