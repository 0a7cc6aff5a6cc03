use crate::cell::{Cell, Life};

/// One generation: a fixed-size, fully populated rectangle of cells.
///
/// Every coordinate in `[0, width) × [0, height)` holds exactly one [`Cell`];
/// nothing outside that range is addressable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major storage, index `y * width + x`
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid::from_fn(width, height, |_, _| Life::Dead)
    }

    /// Builds a grid by asking `life` for the state of every coordinate, row by row.
    pub fn from_fn<F>(width: usize, height: usize, mut life: F) -> Grid
    where
        F: FnMut(usize, usize) -> Life,
    {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| Cell::new(x, y, life(x, y)))
            .collect();

        Grid {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if self.contains(x, y) {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Like [`Grid::get`] but for signed coordinates, so neighbor offsets
    /// can step past the top or left edge.
    pub fn get_signed(&self, x: i64, y: i64) -> Option<&Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Only the living cells, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_alive())
    }

    /// Counts the living cells of this generation.
    pub fn population(&self) -> u64 {
        self.live_cells().count() as u64
    }

    /// Marks `(x, y)` alive; out-of-range coordinates are ignored.
    pub(crate) fn set_alive(&mut self, x: usize, y: usize) {
        if self.contains(x, y) {
            let idx = y * self.width + x;
            self.cells[idx].life = Life::Alive;
        }
    }
}
