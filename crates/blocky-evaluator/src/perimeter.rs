//! Perimeter scoring: target-colour unit cells on the board's border.

use blocky_engine::{Colour, Grid};

/// Points for a target-colour corner cell.
pub const CORNER_WEIGHT: usize = 2;
/// Points for a target-colour border cell that is not a corner.
pub const EDGE_WEIGHT: usize = 1;

/// Scores `grid` for a perimeter goal of `colour`.
///
/// Corner cells count [`CORNER_WEIGHT`], other border cells count
/// [`EDGE_WEIGHT`], interior cells count nothing. A 1×1 grid is its own four
/// corners.
#[must_use]
pub fn perimeter_score(grid: &Grid, colour: Colour) -> usize {
    let last = grid.side() - 1;
    let matches = |&(x, y): &(usize, usize)| grid.get(x, y) == colour;

    let corners = [(0, 0), (0, last), (last, 0), (last, last)];
    let corner_score = corners.into_iter().filter(matches).count() * CORNER_WEIGHT;
    let edge_score = (1..last)
        .map(|i| {
            [(0, i), (last, i), (i, 0), (i, last)]
                .into_iter()
                .filter(matches)
                .count()
        })
        .sum::<usize>()
        * EDGE_WEIGHT;

    corner_score + edge_score
}

/// Highest possible perimeter score on a grid of the given side.
#[must_use]
pub fn max_perimeter_score(side: usize) -> usize {
    4 * CORNER_WEIGHT + 4 * side.saturating_sub(2) * EDGE_WEIGHT
}

#[cfg(test)]
mod tests {
    use blocky_engine::{Block, BlockPath, Palette};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    const A: Colour = Colour::PACIFIC_POINT;
    const B: Colour = Colour::REAL_RED;

    #[test]
    fn test_uniform_depth_one_board() {
        let grid = Grid::flatten(&Block::new(1, A));
        assert_eq!(perimeter_score(&grid, A), 8);
        assert_eq!(perimeter_score(&grid, B), 0);
    }

    #[test]
    fn test_full_border_reaches_maximum() {
        for depth in 0..=4 {
            let grid = Grid::flatten(&Block::new(depth, A));
            assert_eq!(
                perimeter_score(&grid, A),
                max_perimeter_score(grid.side()),
                "depth {depth}"
            );
        }
        assert_eq!(max_perimeter_score(4), 16);
    }

    #[test]
    fn test_interior_cells_do_not_count() {
        // 4x4 board, all B except the inner 2x2 square.
        let mut board = Block::new(2, B);
        assert!(board.split([B, B, B, B]));
        for (quadrant, inner) in [(0, 2), (1, 3), (2, 0), (3, 1)] {
            let child = board.get_mut(&BlockPath::root().child(quadrant)).unwrap();
            let mut colours = [B; 4];
            colours[inner] = A;
            assert!(child.split(colours));
        }
        let grid = Grid::flatten(&board);
        assert_eq!(grid.count(A), 4);
        assert_eq!(perimeter_score(&grid, A), 0);
        assert_eq!(perimeter_score(&grid, B), max_perimeter_score(4));
    }

    #[test]
    fn test_corner_quadrant() {
        // 2x2 A square in the upper-left quadrant touches one corner and two edge cells.
        let mut board = Block::new(2, B);
        assert!(board.split([B, A, B, B]));
        let grid = Grid::flatten(&board);
        assert_eq!(perimeter_score(&grid, A), 2 + 1 + 1);
    }

    #[test]
    fn test_score_never_exceeds_maximum() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(17);
        for _ in 0..20 {
            let board = Block::random(3, &palette, &mut rng);
            let grid = Grid::flatten(&board);
            for &colour in palette.colours() {
                assert!(perimeter_score(&grid, colour) <= max_perimeter_score(grid.side()));
            }
        }
    }
}
