use super::board::can_merge;
use super::{Board, Move, Tile};

/// Outcome of sliding a board in one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// The board after compaction and merging.
    pub board: Board,
    /// Points earned: the sum of every tile produced by a merge.
    pub score_delta: u64,
    /// Whether `board` differs from the input. A move is legal iff this is set.
    pub changed: bool,
}

impl Board {
    /// Slide/merge every row (Left/Right) or column (Up/Down) in `dir`.
    ///
    /// Pure: the same board and direction always produce the same result,
    /// and nothing is spawned.
    ///
    /// ```
    /// use sim_2048::engine::{Board, Move};
    /// let b = Board::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    /// let s = b.slide(Move::Left);
    /// assert!(s.changed);
    /// assert_eq!(s.score_delta, 4);
    /// assert_eq!(s.board.get(0, 0), 4);
    /// ```
    pub fn slide(&self, dir: Move) -> Slide {
        let n = self.size();
        let mut board = self.clone();
        let mut score_delta = 0;
        let mut line: Vec<Tile> = Vec::with_capacity(n);
        for i in 0..n {
            line.clear();
            line.extend(line_indices(n, dir, i).map(|idx| self.tile_value(idx)));
            score_delta += compact_line(&mut line);
            for (idx, &val) in line_indices(n, dir, i).zip(line.iter()) {
                board.set(idx, val);
            }
        }
        let changed = board != *self;
        Slide { board, score_delta, changed }
    }

    /// Return the board resulting from sliding/merging tiles in `dir` (no random insert).
    #[inline]
    pub fn shift(&self, dir: Move) -> Board {
        self.slide(dir).board
    }
}

/// Row-major indices of line `i`, starting at the edge tiles slide toward.
///
/// Walking Right/Down lines from the far end is the "reverse, compact left,
/// reverse back" formulation without materializing the reversal.
fn line_indices(n: usize, dir: Move, i: usize) -> impl Iterator<Item = usize> {
    let toward_end = dir.toward_end();
    let vertical = dir.is_vertical();
    (0..n).map(move |k| {
        let k = if toward_end { n - 1 - k } else { k };
        if vertical { k * n + i } else { i * n + k }
    })
}

/// Compact `line` toward index 0, merging each equal adjacent pair once.
///
/// Returns the points scored (sum of the merged tiles, saturating).
pub(crate) fn compact_line(line: &mut [Tile]) -> u64 {
    let mut score: u64 = 0;
    let mut write = 0;
    let mut pending: Tile = 0;
    for read in 0..line.len() {
        let val = line[read];
        if val == 0 {
            continue;
        }
        if can_merge(pending, val) {
            line[write] = val * 2;
            score = score.saturating_add(val * 2);
            write += 1;
            pending = 0;
        } else {
            if pending != 0 {
                line[write] = pending;
                write += 1;
            }
            pending = val;
        }
    }
    if pending != 0 {
        line[write] = pending;
        write += 1;
    }
    line[write..].fill(0);
    score
}
