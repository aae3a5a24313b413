//! **travails-board** — the 8×8 chess board.
//!
//! [`Board`] owns a flat arena of 64 [`Square`]s, places the standard
//! starting layout (or a caller-supplied one), precomputes knight-move
//! adjacency for every square once at construction, and exposes piece
//! movement and shortest-path queries on top of the
//! `travails-paths` engine.

pub mod board;
pub mod square;

pub use board::{Board, BoardError};
pub use square::Square;
