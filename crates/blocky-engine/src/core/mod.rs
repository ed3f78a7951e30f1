pub use self::{block::*, block_path::*, colour::*, grid::*};

pub(crate) mod block;
pub(crate) mod block_path;
pub(crate) mod colour;
pub(crate) mod grid;
