//! The smart agent: greedy one-step lookahead over random trial moves.
//!
//! Each turn the agent collects `difficulty` distinct valid moves, scores the
//! board each would produce against its goal, and plays the best one. If no
//! trial beats the current score it passes.
//!
//! Trials are drawn with the same random descent as [`RandomAgent`](crate::RandomAgent),
//! so deeper blocks are sampled less often than shallow ones. Duplicate
//! `(block, action)` pairs are redrawn. Small boards may have fewer than
//! `difficulty` valid moves; after [`STALL_LIMIT`] consecutive draws without a
//! new valid trial the agent decides with the trials it has.

use std::collections::HashSet;

use blocky_engine::{Action, Block, BlockPath, Move, Palette};
use blocky_evaluator::goal::Goal;
use rand::Rng;

use crate::speculation::{pick_random_move, try_move};

/// Consecutive draws without a new valid trial after which the search stops.
pub const STALL_LIMIT: usize = 1000;

/// A trial move and the score of the board it produces.
#[derive(Debug, Clone)]
struct Trial {
    mv: Move,
    score: usize,
}

/// An agent that plays the best of `difficulty` random trial moves.
#[derive(Debug, Clone)]
pub struct SmartAgent {
    difficulty: usize,
    proceed: bool,
}

impl SmartAgent {
    #[must_use]
    pub fn new(difficulty: usize) -> Self {
        Self {
            difficulty,
            proceed: false,
        }
    }

    /// Number of distinct trial moves evaluated per turn.
    #[must_use]
    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Allows the next [`SmartAgent::generate_move`] call to produce a move.
    pub fn trigger(&mut self) {
        self.proceed = true;
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.proceed
    }

    /// Returns the best trial move, a pass, or `None` if not triggered.
    ///
    /// The returned move is either a pass or strictly improves the goal score
    /// of the board it was evaluated on. Ties between trials go to the one
    /// drawn first. `board` is only read.
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

        let current_score = goal.score(board);
        let trials = self.collect_trials(board, goal, palette, rng);
        let best = trials
            .into_iter()
            .reduce(|best, trial| if trial.score > best.score { trial } else { best });

        match best {
            Some(best) if best.score > current_score => {
                log::debug!(
                    "smart agent chose {} (score {current_score} -> {})",
                    best.mv,
                    best.score
                );
                Some(best.mv)
            }
            _ => {
                log::debug!("smart agent found no improvement over {current_score}, passing");
                Some(Move::pass())
            }
        }
    }

    fn collect_trials<R>(
        &self,
        board: &Block,
        goal: &Goal,
        palette: &Palette,
        rng: &mut R,
    ) -> Vec<Trial>
    where
        R: Rng + ?Sized,
    {
        let mut tried = HashSet::<(BlockPath, Action)>::new();
        let mut trials = Vec::with_capacity(self.difficulty);
        let mut stalled = 0;
        while trials.len() < self.difficulty {
            if stalled >= STALL_LIMIT {
                log::debug!(
                    "smart agent stalled after {} of {} trials",
                    trials.len(),
                    self.difficulty
                );
                break;
            }
            let mv = pick_random_move(board, rng);
            if tried.contains(&(mv.target().clone(), mv.action())) {
                stalled += 1;
                continue;
            }
            let Some(result) = try_move(board, &mv, goal.colour(), palette, rng) else {
                log::trace!("smart agent trial {mv} rejected");
                stalled += 1;
                continue;
            };
            stalled = 0;
            tried.insert((mv.target().clone(), mv.action()));
            let score = goal.score(&result);
            log::debug!("smart agent trial {mv}: score {score}");
            trials.push(Trial { mv, score });
        }
        trials
    }
}

#[cfg(test)]
mod tests {
    use blocky_engine::{Colour, Grid};
    use blocky_evaluator::goal::GoalKind;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_waits_for_trigger() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(0);
        let board = Block::random(2, &palette, &mut rng);
        let goal = Goal::new(GoalKind::Blob, Colour::REAL_RED);
        let mut agent = SmartAgent::new(3);
        assert_eq!(agent.generate_move(&board, &goal, &palette, &mut rng), None);
        agent.trigger();
        assert!(agent.generate_move(&board, &goal, &palette, &mut rng).is_some());
        assert_eq!(agent.generate_move(&board, &goal, &palette, &mut rng), None);
    }

    #[test]
    fn test_move_passes_or_improves() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(17);
        for (i, &goal_colour) in palette.colours().iter().enumerate() {
            let kind = GoalKind::ALL[i % 2];
            let goal = Goal::new(kind, goal_colour);
            let mut agent = SmartAgent::new(5);
            for _ in 0..5 {
                let board = Block::random(3, &palette, &mut rng);
                let before = board.clone();
                agent.trigger();
                let mv = agent.generate_move(&board, &goal, &palette, &mut rng).unwrap();
                assert_eq!(board, before);
                if mv.action().is_pass() {
                    continue;
                }
                // Smash is scored on a copy with different random colours.
                if mv.action().is_smash() {
                    continue;
                }
                let mut copy = board.create_copy();
                assert!(mv.apply(&mut copy, goal.colour(), &palette, &mut rng));
                assert!(goal.score(&copy) > goal.score(&board), "{mv}");
            }
        }
    }

    #[test]
    fn test_zero_difficulty_passes() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let board = Block::random(2, &palette, &mut rng);
        let goal = Goal::new(GoalKind::Perimeter, Colour::PACIFIC_POINT);
        let mut agent = SmartAgent::new(0);
        agent.trigger();
        assert_eq!(
            agent.generate_move(&board, &goal, &palette, &mut rng),
            Some(Move::pass())
        );
    }

    #[test]
    fn test_unreachable_difficulty_terminates() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let board = Block::new(0, Colour::REAL_RED);
        let goal = Goal::new(GoalKind::Blob, Colour::OLD_OLIVE);
        let mut agent = SmartAgent::new(50);
        agent.trigger();
        let mv = agent.generate_move(&board, &goal, &palette, &mut rng).unwrap();
        assert_eq!(mv, Move::new(Action::Paint, BlockPath::root()));
    }

    #[test]
    fn test_optimal_board_passes() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(4);
        let board = Block::new(2, Colour::DAFFODIL_DELIGHT);
        let goal = Goal::new(GoalKind::Blob, Colour::DAFFODIL_DELIGHT);
        assert_eq!(goal.score_grid(&Grid::flatten(&board)), 16);
        let mut agent = SmartAgent::new(20);
        agent.trigger();
        assert_eq!(
            agent.generate_move(&board, &goal, &palette, &mut rng),
            Some(Move::pass())
        );
    }
}
