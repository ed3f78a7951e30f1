use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a block by the child indices leading to it from the root.
///
/// Paths are how moves refer to blocks: a path found on a copy of a board
/// resolves to the corresponding block on the original, so a move planned on a
/// copy can be replayed on the authoritative board.
///
/// # Example
///
/// ```
/// use blocky_engine::BlockPath;
///
/// let path = BlockPath::root().child(1).child(3);
/// assert_eq!(path.depth(), 2);
/// assert_eq!(path.to_string(), "1.3");
/// assert_eq!(BlockPath::root().to_string(), "root");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockPath(Vec<u8>);

impl BlockPath {
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns the path of the `index`-th child of the block at this path.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a quadrant index (0-3).
    #[must_use]
    pub fn child(mut self, index: usize) -> Self {
        self.push(index);
        self
    }

    pub fn push(&mut self, index: usize) {
        assert!(index < 4, "quadrant index out of range: {index}");
        #[expect(clippy::cast_possible_truncation)]
        self.0.push(index as u8);
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of steps from the root, equal to the level of the addressed block.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&i| usize::from(i))
    }
}

impl fmt::Display for BlockPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("root");
        }
        for (i, index) in self.indices().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}
