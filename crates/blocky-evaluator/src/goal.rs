//! Player goals and their generation.

use blocky_engine::{Block, Colour, Grid, Palette};
use rand::{Rng, seq::IndexedRandom as _};
use serde::{Deserialize, Serialize};

use crate::{TooManyGoalsError, blob::blob_score, perimeter::perimeter_score};

/// The scoring strategy of a goal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    #[display("perimeter")]
    Perimeter,
    #[display("blob")]
    Blob,
}

impl GoalKind {
    pub const ALL: [Self; 2] = [Self::Perimeter, Self::Blob];
}

/// A target colour together with the strategy used to score it.
///
/// Goals are immutable and scoring never modifies the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    kind: GoalKind,
    colour: Colour,
}

impl Goal {
    #[must_use]
    pub const fn new(kind: GoalKind, colour: Colour) -> Self {
        Self { kind, colour }
    }

    #[must_use]
    pub const fn kind(&self) -> GoalKind {
        self.kind
    }

    /// The target colour, also the colour this goal's owner paints with.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// Returns the current score of `board` for this goal.
    #[must_use]
    pub fn score(&self, board: &Block) -> usize {
        self.score_grid(&Grid::flatten(board))
    }

    /// Like [`Self::score`], for a board that has already been flattened.
    #[must_use]
    pub fn score_grid(&self, grid: &Grid) -> usize {
        match self.kind {
            GoalKind::Perimeter => perimeter_score(grid, self.colour),
            GoalKind::Blob => blob_score(grid, self.colour),
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        let name = self.colour.name();
        match self.kind {
            GoalKind::Perimeter => format!(
                "Aim to put the most number of unit cells of colour {name} on the perimeter."
            ),
            GoalKind::Blob => format!("Aim to create the largest connected blob of colour {name}."),
        }
    }
}

/// Generates `count` goals of one randomly chosen kind.
///
/// Each goal gets a different colour, drawn from `palette` without repetition.
pub fn generate_goals<R>(
    count: usize,
    palette: &Palette,
    rng: &mut R,
) -> Result<Vec<Goal>, TooManyGoalsError>
where
    R: Rng + ?Sized,
{
    let kind = GoalKind::ALL[rng.random_range(0..GoalKind::ALL.len())];
    generate_goals_of_kind(kind, count, palette, rng)
}

/// Like [`generate_goals`], but with a fixed goal kind.
pub fn generate_goals_of_kind<R>(
    kind: GoalKind,
    count: usize,
    palette: &Palette,
    rng: &mut R,
) -> Result<Vec<Goal>, TooManyGoalsError>
where
    R: Rng + ?Sized,
{
    if count > palette.len() {
        return Err(TooManyGoalsError {
            requested: count,
            available: palette.len(),
        });
    }
    Ok(palette
        .colours()
        .choose_multiple(rng, count)
        .map(|&colour| Goal::new(kind, colour))
        .collect())
}
