//! A single board cell: [`Square`].

use std::fmt;

use travails_core::{Coord, KNIGHT_OFFSETS, Piece, PieceKind};
use travails_paths::{Adjacency, Leaper};

use crate::board::SIZE;

/// A board cell: its fixed position, an optional occupying piece, and
/// the cached knight-move adjacency list.
///
/// The adjacency cache holds coordinates (index pairs into the board's
/// square arena) rather than references, so squares carry no lifetime
/// ties to each other. Once computed at board construction the list is
/// immutable: piece movement never changes geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    rank: i32,
    file: i32,
    piece: Option<Piece>,
    knight_moves: Vec<Coord>,
}

impl Square {
    pub(crate) fn new(rank: i32, file: i32, piece: Option<Piece>) -> Self {
        Self {
            rank,
            file,
            piece,
            knight_moves: Vec::new(),
        }
    }

    /// Position of this square.
    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.rank, self.file)
    }

    /// The occupying piece, if any.
    #[inline]
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// Cached destination squares one legal `kind`-move away, in the
    /// kind's fixed offset order. Empty for kinds without a move rule
    /// (currently everything but the knight).
    pub fn moves(&self, kind: PieceKind) -> &[Coord] {
        match kind {
            PieceKind::Knight => &self.knight_moves,
            _ => &[],
        }
    }

    /// Chess notation: piece symbol (empty if unoccupied) + file letter
    /// + rank digit, e.g. `"Nb8"` or `"e4"`.
    pub fn notation(&self) -> String {
        let c = self.coord();
        let mut out = String::new();
        if let Some(piece) = self.piece {
            out.push(piece.symbol());
        }
        out.push(c.display_file());
        out.push_str(&c.display_rank().to_string());
        out
    }

    pub(crate) fn set_piece(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    pub(crate) fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    /// Precompute the adjacency caches for this square's position.
    pub(crate) fn compute_moves(&mut self) {
        self.knight_moves.clear();
        Leaper::new(&KNIGHT_OFFSETS, SIZE, SIZE).neighbors(self.coord(), &mut self.knight_moves);
    }
}

impl fmt::Display for Square {
    /// Glyph of the occupying piece, or a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.piece {
            Some(piece) => write!(f, "{piece}"),
            None => write!(f, " "),
        }
    }
}
