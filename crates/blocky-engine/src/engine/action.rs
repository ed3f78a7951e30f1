use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{Axis, Block, BlockPath, Colour, Palette, Rotation};

/// An action a player can take on a block.
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
    derive_more::IsVariant,
)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    #[display("rotate clockwise")]
    RotateClockwise,
    #[display("rotate counter-clockwise")]
    RotateCounterClockwise,
    #[display("swap horizontally")]
    SwapHorizontal,
    #[display("swap vertically")]
    SwapVertical,
    #[display("smash")]
    Smash,
    #[display("combine")]
    Combine,
    #[display("paint")]
    Paint,
    #[display("pass")]
    Pass,
}

/// The direction argument carried by rotate and swap actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Rotate(Rotation),
    Swap(Axis),
}

impl Action {
    /// Every action except [`Action::Pass`], in the order agents sample them from.
    pub const SPECULATIVE: [Self; 7] = [
        Self::RotateClockwise,
        Self::RotateCounterClockwise,
        Self::SwapHorizontal,
        Self::SwapVertical,
        Self::Combine,
        Self::Smash,
        Self::Paint,
    ];

    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::RotateClockwise => Some(Direction::Rotate(Rotation::Clockwise)),
            Self::RotateCounterClockwise => Some(Direction::Rotate(Rotation::CounterClockwise)),
            Self::SwapHorizontal => Some(Direction::Swap(Axis::Horizontal)),
            Self::SwapVertical => Some(Direction::Swap(Axis::Vertical)),
            Self::Smash | Self::Combine | Self::Paint | Self::Pass => None,
        }
    }

    /// Performs this action on `block`.
    ///
    /// `paint_colour` is the colour used by [`Action::Paint`], normally the
    /// acting player's goal colour. Returns whether the action succeeded;
    /// [`Action::Pass`] always succeeds and changes nothing.
    pub fn apply<R>(
        self,
        block: &mut Block,
        paint_colour: Colour,
        palette: &Palette,
        rng: &mut R,
    ) -> bool
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::RotateClockwise => block.rotate(Rotation::Clockwise),
            Self::RotateCounterClockwise => block.rotate(Rotation::CounterClockwise),
            Self::SwapHorizontal => block.swap(Axis::Horizontal),
            Self::SwapVertical => block.swap(Axis::Vertical),
            Self::Smash => block.smash(palette, rng),
            Self::Combine => block.combine(),
            Self::Paint => block.paint(paint_colour),
            Self::Pass => true,
        }
    }
}

/// A move proposed by a player: an action and the block it targets.
///
/// The target is a [`BlockPath`], so a move found by experimenting on a copy
/// of the board can be applied to the original.
///
/// # Example
///
/// ```
/// use blocky_engine::{Action, Block, BlockPath, Colour, Move, Palette};
///
/// let palette = Palette::default();
/// let mut rng = rand::rng();
/// let mut board = Block::new(1, Colour::REAL_RED);
///
/// let smash = Move::new(Action::Smash, BlockPath::root());
/// assert!(smash.apply(&mut board, Colour::OLD_OLIVE, &palette, &mut rng));
/// assert!(!board.is_leaf());
///
/// let paint = Move::new(Action::Paint, BlockPath::root().child(0));
/// let _ = paint.apply(&mut board, Colour::OLD_OLIVE, &palette, &mut rng);
/// assert_eq!(board.get(paint.target()).unwrap().colour(), Some(Colour::OLD_OLIVE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{action} @ {target}")]
pub struct Move {
    action: Action,
    target: BlockPath,
}

impl Move {
    #[must_use]
    pub fn new(action: Action, target: BlockPath) -> Self {
        Self { action, target }
    }

    /// A pass, targeting the whole board.
    #[must_use]
    pub fn pass() -> Self {
        Self::new(Action::Pass, BlockPath::root())
    }

    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    #[must_use]
    pub fn target(&self) -> &BlockPath {
        &self.target
    }

    /// Applies this move to `board`.
    ///
    /// Returns `false` if the target does not exist on `board` or the action
    /// is invalid for it; the board is then unchanged.
    pub fn apply<R>(
        &self,
        board: &mut Block,
        paint_colour: Colour,
        palette: &Palette,
        rng: &mut R,
    ) -> bool
    where
        R: Rng + ?Sized,
    {
        let Some(block) = board.get_mut(&self.target) else {
            log::trace!("{self}: target not on board");
            return false;
        };
        self.action.apply(block, paint_colour, palette, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_direction() {
        assert_eq!(
            Action::RotateCounterClockwise.direction(),
            Some(Direction::Rotate(Rotation::CounterClockwise))
        );
        assert_eq!(
            Action::SwapHorizontal.direction(),
            Some(Direction::Swap(Axis::Horizontal))
        );
        assert_eq!(Action::Paint.direction(), None);
        assert!(!Action::SPECULATIVE.contains(&Action::Pass));
    }

    #[test]
    fn test_pass_always_succeeds_without_change() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(0);
        let mut board = Block::random(2, &palette, &mut rng);
        let before = board.clone();
        assert!(Move::pass().apply(&mut board, Colour::REAL_RED, &palette, &mut rng));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_to_missing_target_fails() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(0);
        let mut board = Block::new(2, Colour::REAL_RED);
        let mv = Move::new(Action::Smash, BlockPath::root().child(2));
        assert!(!mv.apply(&mut board, Colour::REAL_RED, &palette, &mut rng));
        assert_eq!(board, Block::new(2, Colour::REAL_RED));
    }

    #[test]
    fn test_display_and_serde() {
        let mv = Move::new(Action::SwapVertical, BlockPath::root().child(3).child(0));
        assert_eq!(mv.to_string(), "swap vertically @ 3.0");
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"action":"swap-vertical","target":[3,0]}"#);
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
    }
}
