//! **travails-core** — shared value types for the travails workspace.
//!
//! This crate provides the board coordinate model and the chess-piece
//! model used by the board and pathfinding crates: [`Coord`] with its
//! algebraic-notation rendering and parsing, and [`Color`] /
//! [`PieceKind`] / [`Piece`] with their notation and glyph tables.

pub mod coord;
pub mod piece;

pub use coord::{Coord, ParseCoordError};
pub use piece::{Color, InvalidPieceError, KNIGHT_OFFSETS, Piece, PieceKind};
