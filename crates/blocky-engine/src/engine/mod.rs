//! Moves players exchange with the game driver.
//!
//! - [`Action`] - What to do to a block (rotate, swap, smash, combine, paint, pass)
//! - [`Move`] - An action paired with the [`BlockPath`](crate::BlockPath) of its target
//!
//! Agents plan moves by applying them to a copy of the board made with
//! [`Block::create_copy`](crate::Block::create_copy); only the driver applies
//! the chosen [`Move`] to the authoritative board.

pub use self::action::*;

mod action;
