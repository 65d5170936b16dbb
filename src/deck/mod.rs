//! Deck generation: sample faces, pair them, shuffle, lay out a grid.
//!
//! ## Algorithm
//!
//! 1. Draw `pairs` faces without replacement, each draw uniform over what
//!    is left in the pool
//! 2. Duplicate every drawn face
//! 3. Fisher–Yates shuffle the tokens
//! 4. Chunk into rows of `columns` cards, assigning fresh `CardId`s

pub mod dealer;
pub mod grid;

pub use dealer::{deal, Dealer};
pub use grid::Grid;
