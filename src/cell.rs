/// Life state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Life {
    Alive,
    Dead,
}

impl Life {
    /// Returns `true` for [`Life::Alive`].
    pub fn is_alive(self) -> bool {
        self == Life::Alive
    }
}

/// One cell of a generation.
///
/// Cells are never mutated across ticks: every call to
/// [`advance`](crate::engine::advance) builds fresh values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Column in the owning grid
    pub x: usize,
    /// Row in the owning grid
    pub y: usize,
    /// Whether the cell is alive in this generation
    pub life: Life,
}

impl Cell {
    /// Creates a cell at `(x, y)` with the given state.
    pub fn new(x: usize, y: usize, life: Life) -> Self {
        Cell { x, y, life }
    }

    /// Whether the cell is alive in this generation.
    pub fn is_alive(&self) -> bool {
        self.life.is_alive()
    }
}
