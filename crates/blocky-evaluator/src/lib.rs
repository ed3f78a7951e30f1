//! Goal evaluation: scoring a Blocky board for one player.
//!
//! Every player owns a [`Goal`](goal::Goal): a target colour plus one of two
//! scoring strategies.
//!
//! - **Perimeter** ([`perimeter`]) - Counts target-colour unit cells on the
//!   board's border, corners counting double.
//! - **Blob** ([`blob`]) - Size of the largest 4-connected group of
//!   target-colour unit cells.
//!
//! Both strategies read a [`Grid`](blocky_engine::Grid) flattened from the
//! board and never modify the board itself.
//!
//! # Example
//!
//! ```
//! use blocky_engine::{Block, Colour};
//! use blocky_evaluator::goal::{Goal, GoalKind};
//!
//! let board = Block::new(1, Colour::REAL_RED);
//! let perimeter = Goal::new(GoalKind::Perimeter, Colour::REAL_RED);
//! let blob = Goal::new(GoalKind::Blob, Colour::REAL_RED);
//! assert_eq!(perimeter.score(&board), 8);
//! assert_eq!(blob.score(&board), 4);
//! ```

pub mod blob;
pub mod goal;
pub mod perimeter;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("requested {requested} goals but the palette has only {available} colours")]
pub struct TooManyGoalsError {
    pub requested: usize,
    pub available: usize,
}
