use arrayvec::ArrayVec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    block_path::BlockPath,
    colour::{Colour, Palette},
};

/// A coordinate pair `(x, y)` in unit cells, measured from the board's top-left corner.
pub type Location = (usize, usize);

/// Quadrant index of the upper-right child.
pub const UPPER_RIGHT: usize = 0;
/// Quadrant index of the upper-left child.
pub const UPPER_LEFT: usize = 1;
/// Quadrant index of the lower-left child.
pub const LOWER_LEFT: usize = 2;
/// Quadrant index of the lower-right child.
pub const LOWER_RIGHT: usize = 3;

/// Per-level decay of the smash probability used by [`Block::random`].
///
/// A leaf at level `l` is smashed with probability `exp(-SMASH_DECAY * l)`.
pub const SMASH_DECAY: f64 = 0.25;

/// Direction of a 90° rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Axis along which a block's halves are exchanged by [`Block::swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Exchange the left and right halves.
    Horizontal,
    /// Exchange the top and bottom halves.
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Leaf(Colour),
    Split(Box<[Block; 4]>),
}

/// A square region of the board: one node of the Blocky quadtree.
///
/// A block is either a leaf with a colour, or an internal node with exactly
/// four children ordered upper-right, upper-left, lower-left, lower-right
/// (see [`UPPER_RIGHT`] and friends). Each child has half the side length and
/// one more level than its parent. Leaves at `level == max_depth` are unit
/// cells.
///
/// Every structural operator returns `true` iff it changed the block. A
/// failed operator leaves the block untouched.
///
/// # Example
///
/// ```
/// use blocky_engine::{Block, Colour, Rotation};
///
/// let mut board = Block::new(2, Colour::REAL_RED);
/// assert_eq!(board.size(), 4);
/// assert!(!board.rotate(Rotation::Clockwise)); // leaves cannot rotate
///
/// assert!(board.split([
///     Colour::REAL_RED,
///     Colour::OLD_OLIVE,
///     Colour::REAL_RED,
///     Colour::PACIFIC_POINT,
/// ]));
/// assert!(board.rotate(Rotation::Clockwise));
/// assert!(board.combine());
/// assert_eq!(board.colour(), Some(Colour::REAL_RED));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    position: Location,
    size: usize,
    level: usize,
    max_depth: usize,
    content: Content,
}

impl Block {
    /// Deepest supported tree; keeps flattened grids addressable.
    pub const DEPTH_LIMIT: usize = 12;

    /// Creates a single-colour root block covering a `2^max_depth`-sided board.
    ///
    /// # Panics
    ///
    /// Panics if `max_depth` exceeds [`Self::DEPTH_LIMIT`].
    #[must_use]
    pub fn new(max_depth: usize, colour: Colour) -> Self {
        assert!(
            max_depth <= Self::DEPTH_LIMIT,
            "max_depth {max_depth} exceeds limit {}",
            Self::DEPTH_LIMIT
        );
        Self::leaf((0, 0), 0, max_depth, colour)
    }

    /// Generates a random board.
    ///
    /// Starting from a root leaf, every leaf at level `l < max_depth` is
    /// smashed with probability `exp(-SMASH_DECAY * l)` and its children are
    /// considered in turn, so the root is always subdivided and deeper levels
    /// become progressively rarer.
    pub fn random<R>(max_depth: usize, palette: &Palette, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut root = Self::new(max_depth, palette.choose(rng));
        root.smash_randomly(palette, rng);
        root
    }

    fn smash_randomly<R>(&mut self, palette: &Palette, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        #[expect(clippy::cast_precision_loss)]
        let probability = (-SMASH_DECAY * self.level as f64).exp();
        if !self.can_smash() || !rng.random_bool(probability) {
            return;
        }
        self.smash(palette, rng);
        if let Content::Split(children) = &mut self.content {
            for child in children.iter_mut() {
                child.smash_randomly(palette, rng);
            }
        }
    }

    fn leaf(position: Location, level: usize, max_depth: usize, colour: Colour) -> Self {
        Self {
            position,
            size: 1 << (max_depth - level),
            level,
            max_depth,
            content: Content::Leaf(colour),
        }
    }

    #[must_use]
    pub fn position(&self) -> Location {
        self.position
    }

    /// Side length in unit cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the colour of a leaf, or `None` for an internal node.
    #[must_use]
    pub fn colour(&self) -> Option<Colour> {
        match self.content {
            Content::Leaf(colour) => Some(colour),
            Content::Split(_) => None,
        }
    }

    /// Returns the four children of an internal node, or `None` for a leaf.
    #[must_use]
    pub fn children(&self) -> Option<&[Block; 4]> {
        match &self.content {
            Content::Leaf(_) => None,
            Content::Split(children) => Some(children),
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Leaf(_))
    }

    #[must_use]
    pub fn is_unit_cell(&self) -> bool {
        self.is_leaf() && self.level == self.max_depth
    }

    #[must_use]
    pub fn can_smash(&self) -> bool {
        self.is_leaf() && self.level < self.max_depth
    }

    /// Returns whether `location` lies in this block.
    ///
    /// Top and left edges are inside, bottom and right edges are outside.
    #[must_use]
    pub fn contains(&self, (x, y): Location) -> bool {
        let (left, top) = self.position;
        (left..left + self.size).contains(&x) && (top..top + self.size).contains(&y)
    }

    /// Rotates this block by 90°, turning every descendant with it.
    ///
    /// Fails on leaves.
    pub fn rotate(&mut self, rotation: Rotation) -> bool {
        if self.is_leaf() {
            return false;
        }
        self.rotate_subtree(rotation);
        self.set_position(self.position);
        true
    }

    fn rotate_subtree(&mut self, rotation: Rotation) {
        let Content::Split(children) = &mut self.content else {
            return;
        };
        for child in children.iter_mut() {
            child.rotate_subtree(rotation);
        }
        // Clockwise: upper-left moves to upper-right, upper-right to
        // lower-right, and so on around the square.
        match rotation {
            Rotation::Clockwise => children.rotate_left(1),
            Rotation::CounterClockwise => children.rotate_right(1),
        }
    }

    /// Mirrors the quadrant layout of this block along `axis`.
    ///
    /// The children trade places but their own contents are not mirrored.
    /// Fails on leaves.
    pub fn swap(&mut self, axis: Axis) -> bool {
        let Content::Split(children) = &mut self.content else {
            return false;
        };
        match axis {
            Axis::Horizontal => {
                children.swap(UPPER_RIGHT, UPPER_LEFT);
                children.swap(LOWER_LEFT, LOWER_RIGHT);
            }
            Axis::Vertical => {
                children.swap(UPPER_RIGHT, LOWER_RIGHT);
                children.swap(UPPER_LEFT, LOWER_LEFT);
            }
        }
        self.set_position(self.position);
        true
    }

    /// Subdivides a leaf into four leaves with the given colours, in quadrant order.
    ///
    /// Fails on internal nodes and on unit cells.
    pub fn split(&mut self, colours: [Colour; 4]) -> bool {
        if !self.can_smash() {
            return false;
        }
        let children = std::array::from_fn(|index| {
            Self::leaf(
                quadrant_position(self.position, self.size, index),
                self.level + 1,
                self.max_depth,
                colours[index],
            )
        });
        self.content = Content::Split(Box::new(children));
        true
    }

    /// Subdivides a leaf into four leaves of random palette colours.
    ///
    /// Fails on internal nodes and on unit cells.
    pub fn smash<R>(&mut self, palette: &Palette, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        if !self.can_smash() {
            return false;
        }
        let colours = std::array::from_fn(|_| palette.choose(&mut *rng));
        self.split(colours)
    }

    /// Merges four leaf children into a single leaf of their majority colour.
    ///
    /// Ties go to the colour that appears first in quadrant order. Fails if
    /// this block is a leaf or any child has children of its own.
    pub fn combine(&mut self) -> bool {
        let Content::Split(children) = &self.content else {
            return false;
        };
        let mut counts = ArrayVec::<(Colour, usize), 4>::new();
        for child in children.iter() {
            let Some(colour) = child.colour() else {
                return false;
            };
            match counts.iter_mut().find(|(c, _)| *c == colour) {
                Some((_, count)) => *count += 1,
                None => counts.push((colour, 1)),
            }
        }
        let Some(&(majority, _)) = counts
            .iter()
            .reduce(|best, entry| if entry.1 > best.1 { entry } else { best })
        else {
            return false;
        };
        self.content = Content::Leaf(majority);
        true
    }

    /// Recolours a unit cell.
    ///
    /// Fails on internal nodes, on leaves above the maximum depth, and when
    /// the cell already has `colour`.
    pub fn paint(&mut self, colour: Colour) -> bool {
        match &mut self.content {
            Content::Leaf(current) if self.level == self.max_depth && *current != colour => {
                *current = colour;
                true
            }
            _ => false,
        }
    }

    /// Returns an independent deep copy of this subtree.
    #[must_use]
    pub fn create_copy(&self) -> Self {
        self.clone()
    }

    /// Returns the block containing `location` at `level`.
    ///
    /// If the leaf containing `location` is shallower than `level`, that leaf
    /// is returned instead. Returns `None` if `location` is outside this block.
    #[must_use]
    pub fn lookup(&self, location: Location, level: usize) -> Option<&Block> {
        if !self.contains(location) {
            return None;
        }
        match &self.content {
            Content::Split(children) if self.level < level => children
                .iter()
                .find_map(|child| child.lookup(location, level)),
            _ => Some(self),
        }
    }

    /// Like [`Self::lookup`], but returns the path of the found block relative to this one.
    #[must_use]
    pub fn lookup_path(&self, location: Location, level: usize) -> Option<BlockPath> {
        if !self.contains(location) {
            return None;
        }
        let mut path = BlockPath::root();
        let mut node = self;
        while let Content::Split(children) = &node.content {
            if node.level >= level {
                break;
            }
            let index = children.iter().position(|child| child.contains(location))?;
            path.push(index);
            node = &children[index];
        }
        Some(path)
    }

    /// Resolves a path relative to this block.
    #[must_use]
    pub fn get(&self, path: &BlockPath) -> Option<&Block> {
        let mut node = self;
        for index in path.indices() {
            node = match &node.content {
                Content::Split(children) => &children[index],
                Content::Leaf(_) => return None,
            };
        }
        Some(node)
    }

    /// Resolves a path relative to this block, mutably.
    #[must_use]
    pub fn get_mut(&mut self, path: &BlockPath) -> Option<&mut Block> {
        let mut node = self;
        for index in path.indices() {
            node = match &mut node.content {
                Content::Split(children) => &mut children[index],
                Content::Leaf(_) => return None,
            };
        }
        Some(node)
    }

    /// Returns the colour of the unit cell at `location`, relative to this block's corner.
    ///
    /// Descends by comparing each coordinate against the midpoint of the
    /// current block: `x >= mid, y < mid` selects the upper-right child,
    /// both below selects upper-left, `x < mid, y >= mid` selects lower-left
    /// and both at or above selects lower-right.
    ///
    /// # Panics
    ///
    /// Panics if `location` is not within `0..size` on both axes.
    #[must_use]
    pub fn colour_at(&self, (x, y): Location) -> Colour {
        assert!(
            x < self.size && y < self.size,
            "location ({x}, {y}) outside block of size {}",
            self.size
        );
        match &self.content {
            Content::Leaf(colour) => *colour,
            Content::Split(children) => {
                let mid = self.size / 2;
                let (index, x, y) = match (x >= mid, y >= mid) {
                    (true, false) => (UPPER_RIGHT, x - mid, y),
                    (false, false) => (UPPER_LEFT, x, y),
                    (false, true) => (LOWER_LEFT, x, y - mid),
                    (true, true) => (LOWER_RIGHT, x - mid, y - mid),
                };
                children[index].colour_at((x, y))
            }
        }
    }

    fn set_position(&mut self, position: Location) {
        self.position = position;
        let size = self.size;
        if let Content::Split(children) = &mut self.content {
            for (index, child) in children.iter_mut().enumerate() {
                child.set_position(quadrant_position(position, size, index));
            }
        }
    }
}

/// Position of the `index`-th child of a block at `position` with side `size`.
fn quadrant_position((x, y): Location, size: usize, index: usize) -> Location {
    let half = size / 2;
    match index {
        UPPER_RIGHT => (x + half, y),
        UPPER_LEFT => (x, y),
        LOWER_LEFT => (x, y + half),
        _ => (x + half, y + half),
    }
}
