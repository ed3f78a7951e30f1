//! Board representation for the game of Blocky.
//!
//! The board is a quadtree of square [`Block`]s. Players change it with the
//! structural operators on [`Block`] (rotate, swap, smash, combine, paint),
//! usually packaged as a [`Move`]. Goals read the board through a flattened
//! [`Grid`] of unit-cell colours.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseColourError {
    #[display("colour {input:?} must start with '#'")]
    MissingHash { input: String },
    #[display("colour {input:?} must have exactly six hex digits")]
    InvalidLength { input: String },
    #[display("colour {input:?} contains a non-hex digit")]
    InvalidHex { input: String },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParsePaletteError {
    #[display("palette must contain at least one colour")]
    Empty,
    #[display("colour {colour} appears more than once in the palette")]
    Duplicate { colour: Colour },
    #[display("invalid palette colour: {_0}")]
    Colour(ParseColourError),
}
