use crate::{board::Board, rule::Topology};

/// Drives a board through successive generations under one topology.
#[derive(Debug)]
pub struct Automaton {
    board: Board,
    topology: Topology,
    generation: u64,
}

impl Automaton {
    pub fn new(board: Board, topology: Topology) -> Self {
        Self {
            board,
            topology,
            generation: 0,
        }
    }

    /// Advances one generation.
    ///
    /// Every cell is scored against the previous board, so no cell sees a
    /// neighbor's updated state within the same step. The old board is
    /// replaced wholesale.
    pub fn step(&mut self) {
        let prev = &self.board;
        let mut next = Board::new(prev.width(), prev.height());
        for row in 0..prev.height() {
            for col in 0..prev.width() {
                let score = self.topology.score(prev, row, col);
                next.set(row, col, self.topology.next_state(prev.get(row, col), score));
            }
        }
        self.board = next;
        self.generation += 1;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
