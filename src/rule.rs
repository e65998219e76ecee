use crate::board::Board;

/// The 8 Moore-neighborhood offsets of a square grid.
const SQUARE8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// First hex ring, indexed by row parity (even table first).
///
/// Hex rows are staggered, so the cells that touch a given cell depend on
/// whether its row is even or odd.
const HEX_RING1: [[(i32, i32); 6]; 2] = [
    [(-1, 0), (0, -1), (0, 1), (1, 0), (-1, -1), (1, -1)],
    [(-1, 0), (0, -1), (0, 1), (1, 0), (-1, 1), (1, 1)],
];

/// Second hex ring (the six corner cells two steps out), indexed by row
/// parity.
const HEX_RING2: [[(i32, i32); 6]; 2] = [
    [(-2, 0), (2, 0), (-1, -2), (-1, 1), (1, 1), (1, -2)],
    [(-2, 0), (2, 0), (-1, 2), (-1, -1), (1, -1), (1, 2)],
];

/// Neighbor-adjacency scheme deciding which cells count toward a cell's
/// live-neighbor score, and the birth/survival thresholds applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    /// 8-neighbor rules on a square grid.
    Square8,
    /// 6-neighbor rules on a hex grid.
    #[default]
    Hex6,
    /// 12-neighbor rules on a hex grid, per
    /// <http://www.well.com/~dgb/hexrules.html>.
    Hex12,
}

impl Topology {
    /// Live-neighbor score of the cell at `(row, col)`, in tenths.
    ///
    /// A first-ring neighbor scores 1.0; for [`Topology::Hex12`] a
    /// second-ring neighbor scores 0.3. Keeping the score in integer tenths
    /// makes the hex-12 thresholds exact without any floating point.
    /// Neighbors outside the grid never score.
    pub fn score(self, board: &Board, row: usize, col: usize) -> u32 {
        match self {
            Self::Square8 => 10 * count_live(board, row, col, &SQUARE8),
            Self::Hex6 => 10 * count_live(board, row, col, &HEX_RING1[row % 2]),
            Self::Hex12 => {
                10 * count_live(board, row, col, &HEX_RING1[row % 2])
                    + 3 * count_live(board, row, col, &HEX_RING2[row % 2])
            }
        }
    }

    /// Whether a cell is alive in the next generation, given its current
    /// state and its neighbor score in tenths.
    ///
    /// Square and hex-6 grids use the classic rule: a live cell survives on
    /// exactly 2 or 3 live neighbors, a dead cell is born on exactly 3.
    /// Hex-12 uses the weighted rule: survive when 2.0 < score < 3.3, birth
    /// when 2.3 < score < 2.9, bounds strict.
    pub fn next_state(self, alive: bool, score: u32) -> bool {
        match self {
            Self::Square8 | Self::Hex6 => {
                if alive {
                    score == 20 || score == 30
                } else {
                    score == 30
                }
            }
            Self::Hex12 => {
                if alive {
                    20 < score && score < 33
                } else {
                    23 < score && score < 29
                }
            }
        }
    }

    pub const ALL: [Self; 3] = [Self::Square8, Self::Hex6, Self::Hex12];
}

fn count_live(board: &Board, row: usize, col: usize, offsets: &[(i32, i32)]) -> u32 {
    offsets
        .iter()
        .filter(|&&(dr, dc)| board.alive_at(row as i32 + dr, col as i32 + dc))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Board {
        let mut board = Board::new(width, height);
        for &(row, col) in alive {
            board.set(row, col, true);
        }
        board
    }

    #[test]
    fn square_counts_moore_neighborhood() {
        let board = board_with(3, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2)]);
        assert_eq!(Topology::Square8.score(&board, 1, 1), 50);
    }

    #[test]
    fn hex_ring_depends_on_row_parity() {
        // (1, 2) is in an odd row; its ring reaches up-right, so both live
        // cells count
        let board = board_with(5, 5, &[(0, 2), (0, 3)]);
        assert_eq!(Topology::Hex6.score(&board, 1, 2), 20);

        // (2, 2) is in an even row; neither live cell is in its ring
        assert_eq!(Topology::Hex6.score(&board, 2, 2), 0);
    }

    #[test]
    fn hex12_second_ring_scores_in_tenths() {
        // one first-ring and one second-ring neighbor of the even-row (2, 2)
        let board = board_with(6, 6, &[(1, 2), (0, 2)]);
        assert_eq!(Topology::Hex12.score(&board, 2, 2), 13);
    }

    #[test]
    fn classic_rule_thresholds() {
        for topology in [Topology::Square8, Topology::Hex6] {
            assert!(!topology.next_state(true, 10));
            assert!(topology.next_state(true, 20));
            assert!(topology.next_state(true, 30));
            assert!(!topology.next_state(true, 40));
            assert!(!topology.next_state(false, 20));
            assert!(topology.next_state(false, 30));
            assert!(!topology.next_state(false, 40));
        }
    }

    #[test]
    fn hex12_rule_bounds_are_strict() {
        assert!(!Topology::Hex12.next_state(true, 20));
        assert!(Topology::Hex12.next_state(true, 21));
        assert!(Topology::Hex12.next_state(true, 32));
        assert!(!Topology::Hex12.next_state(true, 33));
        assert!(!Topology::Hex12.next_state(false, 23));
        assert!(Topology::Hex12.next_state(false, 24));
        assert!(Topology::Hex12.next_state(false, 28));
        assert!(!Topology::Hex12.next_state(false, 29));
    }

    #[test]
    fn corner_scores_less_than_interior() {
        // all-live board: a corner cell must see strictly fewer neighbors
        // than an interior cell, since out-of-bounds never scores
        let mut board = Board::new(5, 5);
        for row in 0..5 {
            for col in 0..5 {
                board.set(row, col, true);
            }
        }
        for topology in Topology::ALL {
            assert!(
                topology.score(&board, 0, 0) < topology.score(&board, 2, 2),
                "{topology:?}"
            );
        }
    }
}
