//! The random agent: plays the first random move that turns out to be valid.

use blocky_engine::{Block, Move, Palette};
use blocky_evaluator::goal::Goal;
use rand::Rng;

use crate::speculation::{has_speculative_move, pick_random_move, try_move};

/// An agent that draws random moves until one succeeds on a copy of the board.
///
/// It never passes while any other move is possible.
#[derive(Debug, Clone, Default)]
pub struct RandomAgent {
    proceed: bool,
}

impl RandomAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows the next [`RandomAgent::generate_move`] call to produce a move.
    pub fn trigger(&mut self) {
        self.proceed = true;
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.proceed
    }

    /// Returns a valid move, or `None` if the agent has not been triggered.
    ///
    /// `board` is only read: candidate moves are tried on deep copies.
    pub fn generate_move<R>(
        &mut self,
        board: &Block,
        goal: &Goal,
        palette: &Palette,
        rng: &mut R,
    ) -> Option<Move>
    where
        R: Rng + ?Sized,
    {
        if !self.proceed {
            return None;
        }
        self.proceed = false;

        if !has_speculative_move(board, goal.colour()) {
            log::debug!("random agent has no valid move, passing");
            return Some(Move::pass());
        }
        let mut attempts = 0_usize;
        loop {
            attempts += 1;
            let mv = pick_random_move(board, rng);
            if try_move(board, &mv, goal.colour(), palette, rng).is_some() {
                log::trace!("random agent chose {mv} after {attempts} attempts");
                return Some(mv);
            }
        }
    }
}
