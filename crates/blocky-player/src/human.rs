//! The human agent: moves are assembled from UI input events.

use blocky_engine::{Action, Block, Location, Move};

/// A UI event routed to a human agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Requests an action on the currently selected block.
    Action(Action),
    /// Selects a larger block (one level closer to the root).
    LevelUp,
    /// Selects a smaller block (one level deeper).
    LevelDown,
    /// Moves the selection point, in unit-cell coordinates.
    Pointer(Location),
}

/// An agent driven by [`Input`] events.
///
/// The selected block is whichever block at the selected level contains the
/// pointer. Choosing an action while a block is selected produces a move on
/// the next [`HumanAgent::generate_move`] call.
#[derive(Debug, Clone, Default)]
pub struct HumanAgent {
    level: usize,
    pointer: Option<Location>,
    desired_action: Option<Action>,
}

impl HumanAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected level; 0 selects the whole board.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn pointer(&self) -> Option<Location> {
        self.pointer
    }

    #[must_use]
    pub fn desired_action(&self) -> Option<Action> {
        self.desired_action
    }

    /// Updates the selection state.
    ///
    /// Changing the level discards any pending action. The level never
    /// drops below 0.
    pub fn process_input(&mut self, input: Input) {
        match input {
            Input::Action(action) => self.desired_action = Some(action),
            Input::LevelUp => {
                self.level = self.level.saturating_sub(1);
                self.desired_action = None;
            }
            Input::LevelDown => {
                self.level += 1;
                self.desired_action = None;
            }
            Input::Pointer(location) => self.pointer = Some(location),
        }
    }

    /// Returns the block currently under the selection, if any.
    #[must_use]
    pub fn selected_block<'a>(&self, board: &'a Block) -> Option<&'a Block> {
        board.lookup(self.pointer?, self.level)
    }

    /// Returns the pending move, if a block is selected and an action chosen.
    ///
    /// The pending action is consumed only when a move is produced.
    pub fn generate_move(&mut self, board: &Block) -> Option<Move> {
        let target = board.lookup_path(self.pointer?, self.level)?;
        let action = self.desired_action.take()?;
        Some(Move::new(action, target))
    }
}
