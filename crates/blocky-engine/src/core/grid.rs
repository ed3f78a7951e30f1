use super::{block::Block, colour::Colour};

/// A block flattened into a square grid of unit-cell colours.
///
/// Cells are addressed as `(column, row)`; `(0, 0)` is the upper-left corner.
///
/// # Example
///
/// ```
/// use blocky_engine::{Block, Colour, Grid};
///
/// let mut board = Block::new(1, Colour::REAL_RED);
/// board.split([
///     Colour::PACIFIC_POINT,
///     Colour::REAL_RED,
///     Colour::REAL_RED,
///     Colour::REAL_RED,
/// ]);
/// let grid = Grid::flatten(&board);
/// assert_eq!(grid.side(), 2);
/// assert_eq!(grid.get(1, 0), Colour::PACIFIC_POINT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Colour>,
}

impl Grid {
    /// Flattens `block` into a `2^(max_depth - level)`-sided grid.
    #[must_use]
    pub fn flatten(block: &Block) -> Self {
        let side = block.size();
        let mut cells = Vec::with_capacity(side * side);
        for x in 0..side {
            for y in 0..side {
                cells.push(block.colour_at((x, y)));
            }
        }
        Self { side, cells }
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the colour at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Colour {
        assert!(x < self.side && y < self.side, "cell ({x}, {y}) out of bounds");
        self.cells[x * self.side + y]
    }

    /// Returns the colour at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn try_get(&self, x: isize, y: isize) -> Option<Colour> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.side && y < self.side).then(|| self.cells[x * self.side + y])
    }

    /// Number of cells with the given colour.
    #[must_use]
    pub fn count(&self, colour: Colour) -> usize {
        self.cells.iter().filter(|&&c| c == colour).count()
    }

    /// Iterates over all cells as `((x, y), colour)`.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Colour)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &colour)| ((i / side, i % side), colour))
    }
}
