use rand::Rng;

/// Character used for a live cell in text form.
pub const ALIVE: char = 'X';
/// Character used for a dead cell in text form.
pub const DEAD: char = '.';

/// A fixed-size grid of binary cell states, row-major.
///
/// Dimensions never change after creation. Lookups through [`Board::alive_at`]
/// treat anything outside the grid as dead (non-wrapping boundary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates an all-dead board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Creates a board where each cell is alive with probability `prob`,
    /// drawn independently.
    ///
    /// `prob` must lie within `[0, 1]`.
    pub fn random<R: Rng>(width: usize, height: usize, prob: f64, rng: &mut R) -> Self {
        let cells = (0..width * height).map(|_| rng.random_bool(prob)).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// State of an in-bounds cell. Panics if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.height && col < self.width);
        self.cells[self.index(row, col)]
    }

    /// Sets an in-bounds cell. Panics if out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        debug_assert!(row < self.height && col < self.width);
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// State of a cell addressed with signed coordinates; anything outside
    /// the grid reads as dead.
    #[inline]
    pub fn alive_at(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        row < self.height && col < self.width && self.cells[self.index(row, col)]
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}
