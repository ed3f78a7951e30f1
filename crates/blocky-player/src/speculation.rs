//! Trying moves on copies of the board.
//!
//! Random and smart agents share this machinery: pick a block by a random
//! walk down the tree, pick an action, and apply it to a deep copy of the
//! board. The original board is only ever read.

use blocky_engine::{Action, Block, BlockPath, Colour, Move, Palette};
use rand::Rng;

/// Probability of stopping at the current block during a random descent.
///
/// Each level the walk either stops here or continues into one of the four
/// children chosen uniformly, so a block at depth `d` below an internal chain
/// is reached with probability `STOP_PROBABILITY * ((1 - STOP_PROBABILITY) / 4)^d`.
/// Leaves always stop the walk.
pub const STOP_PROBABILITY: f64 = 0.5;

/// Picks a block of `board` by random descent and returns its path.
pub fn pick_random_block<R>(board: &Block, rng: &mut R) -> BlockPath
where
    R: Rng + ?Sized,
{
    let mut path = BlockPath::root();
    let mut node = board;
    while let Some(children) = node.children() {
        if rng.random_bool(STOP_PROBABILITY) {
            break;
        }
        let index = rng.random_range(0..children.len());
        path.push(index);
        node = &children[index];
    }
    path
}

/// Picks one of [`Action::SPECULATIVE`] uniformly.
pub fn pick_random_action<R>(rng: &mut R) -> Action
where
    R: Rng + ?Sized,
{
    Action::SPECULATIVE[rng.random_range(0..Action::SPECULATIVE.len())]
}

/// Draws a random move: a block from [`pick_random_block`] and an action from
/// [`pick_random_action`].
pub fn pick_random_move<R>(board: &Block, rng: &mut R) -> Move
where
    R: Rng + ?Sized,
{
    let target = pick_random_block(board, rng);
    let action = pick_random_action(rng);
    Move::new(action, target)
}

/// Applies `mv` to a deep copy of `board`.
///
/// Returns the modified copy if the move succeeded, `None` otherwise.
pub fn try_move<R>(
    board: &Block,
    mv: &Move,
    paint_colour: Colour,
    palette: &Palette,
    rng: &mut R,
) -> Option<Block>
where
    R: Rng + ?Sized,
{
    let mut copy = board.create_copy();
    mv.apply(&mut copy, paint_colour, palette, rng)
        .then_some(copy)
}

/// Returns whether any move other than a pass can succeed on `board`.
///
/// Only a board that is a single unit cell already painted `paint_colour`
/// has no such move: any other leaf root can be smashed and any internal
/// root can be rotated.
#[must_use]
pub fn has_speculative_move(board: &Block, paint_colour: Colour) -> bool {
    !(board.is_unit_cell() && board.colour() == Some(paint_colour))
}
