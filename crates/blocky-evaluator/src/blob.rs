//! Blob scoring: the largest 4-connected group of target-colour unit cells.

use blocky_engine::{Colour, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    NotTarget,
    Target,
}

/// Scores `grid` for a blob goal of `colour`.
///
/// Every cell is visited exactly once across the scan; the result is the size
/// of the largest connected component of `colour` cells, or 0 if there is none.
#[must_use]
pub fn blob_score(grid: &Grid, colour: Colour) -> usize {
    let side = grid.side();
    let mut visited = vec![Visit::Unvisited; side * side];
    let mut largest = 0;
    for x in 0..side {
        for y in 0..side {
            let size = undiscovered_blob_size(grid, colour, &mut visited, (x, y));
            largest = largest.max(size);
        }
    }
    largest
}

/// Size of the blob of `colour` containing `start`, counting only cells not
/// visited before. Marks every cell it inspects.
fn undiscovered_blob_size(
    grid: &Grid,
    colour: Colour,
    visited: &mut [Visit],
    start: (usize, usize),
) -> usize {
    let side = grid.side();
    let mut stack = vec![start];
    let mut size = 0;
    while let Some((x, y)) = stack.pop() {
        let visit = &mut visited[x * side + y];
        if *visit != Visit::Unvisited {
            continue;
        }
        if grid.get(x, y) != colour {
            *visit = Visit::NotTarget;
            continue;
        }
        *visit = Visit::Target;
        size += 1;

        // Out-of-bounds neighbours are skipped.
        if y > 0 {
            stack.push((x, y - 1));
        }
        if x + 1 < side {
            stack.push((x + 1, y));
        }
        if y + 1 < side {
            stack.push((x, y + 1));
        }
        if x > 0 {
            stack.push((x - 1, y));
        }
    }
    size
}

#[cfg(test)]
mod tests {
    use blocky_engine::{Block, BlockPath, Palette};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    const A: Colour = Colour::PACIFIC_POINT;
    const B: Colour = Colour::REAL_RED;

    /// Flood fill that only answers "are all `colour` cells connected?".
    fn all_connected(grid: &Grid, colour: Colour) -> bool {
        let total = grid.count(colour);
        let Some((start, _)) = grid.cells().find(|&(_, c)| c == colour) else {
            return true;
        };
        let mut visited = vec![Visit::Unvisited; grid.side() * grid.side()];
        undiscovered_blob_size(grid, colour, &mut visited, start) == total
    }

    #[test]
    fn test_uniform_depth_one_board() {
        let grid = Grid::flatten(&Block::new(1, A));
        assert_eq!(blob_score(&grid, A), 4);
        assert_eq!(blob_score(&grid, B), 0);
    }

    #[test]
    fn test_quadrant_blob() {
        let mut board = Block::new(2, B);
        assert!(board.split([B, B, A, B]));
        let grid = Grid::flatten(&board);
        assert_eq!(blob_score(&grid, A), 4);
        assert_eq!(blob_score(&grid, B), 12);
    }

    #[test]
    fn test_diagonal_cells_are_not_connected() {
        let mut board = Block::new(1, B);
        assert!(board.split([A, B, A, B]));
        let grid = Grid::flatten(&board);
        // Upper-right and lower-left only touch at a corner.
        assert_eq!(grid.count(A), 2);
        assert_eq!(blob_score(&grid, A), 1);
    }

    #[test]
    fn test_largest_of_several_blobs() {
        let mut board = Block::new(2, B);
        assert!(board.split([A, B, B, B]));
        let lower_left = board.get_mut(&BlockPath::root().child(2)).unwrap();
        assert!(lower_left.split([B, B, A, B]));
        let grid = Grid::flatten(&board);
        assert_eq!(grid.count(A), 5);
        assert_eq!(blob_score(&grid, A), 4);
    }

    #[test]
    fn test_score_bounded_by_cell_count() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(33);
        for _ in 0..30 {
            let board = Block::random(3, &palette, &mut rng);
            let grid = Grid::flatten(&board);
            for &colour in palette.colours() {
                let score = blob_score(&grid, colour);
                let count = grid.count(colour);
                assert!(score <= count);
                assert_eq!(score == count, all_connected(&grid, colour));
            }
        }
    }
}
