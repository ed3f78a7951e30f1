//! Players and the turn loop of a Blocky game.
//!
//! A [`Player`] pairs a [`Goal`](blocky_evaluator::goal::Goal) with an
//! [`Agent`] that proposes moves:
//!
//! - [`HumanAgent`] - assembles a move from UI [`Input`] events
//! - [`RandomAgent`] - plays the first random move that is valid
//! - [`SmartAgent`] - plays the best of several random trial moves, or passes
//!
//! Agents read the board and return a [`Move`](blocky_engine::Move); they never
//! modify it. [`GameSession`] owns the authoritative board, applies moves and
//! rotates turns.

pub use self::{game_session::*, human::*, player::*, random::*, smart::*};

mod game_session;
mod human;
mod player;
mod random;
pub mod smart;
pub mod speculation;
