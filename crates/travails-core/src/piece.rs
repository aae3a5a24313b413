//! The chess-piece model: [`Color`], [`PieceKind`] and [`Piece`].
//!
//! Movement geometry lives here as per-kind offset tables; kinds whose
//! moves cannot be expressed as fixed leaps (the sliding pieces) have no
//! table and would need ray generation instead.

use std::fmt;
use std::str::FromStr;

/// Knight move offsets as `(Δrank, Δfile)`, in fixed order:
/// left/up, left/up2, left/down, left/down2, right/up, right/up2,
/// right/down, right/down2.
///
/// Adjacency lists preserve this order; it determines which of several
/// equally short paths a search returns.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, 1),
    (-1, 2),
    (-2, -1),
    (-1, -2),
    (2, 1),
    (1, 2),
    (2, -1),
    (1, -2),
];

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Piece color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six chess piece kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    King,
    Queen,
    Knight,
    Rook,
    Bishop,
}

impl PieceKind {
    /// Single-letter notation symbol.
    pub const fn symbol(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Knight => 'N',
            Self::Rook => 'R',
            Self::Bishop => 'B',
        }
    }

    /// Lowercase kind name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::King => "king",
            Self::Queen => "queen",
            Self::Knight => "knight",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
        }
    }

    /// Fixed-leap move offsets for this kind, or `None` for kinds whose
    /// moves are not fixed leaps (sliding pieces, pawns).
    pub const fn leap_offsets(self) -> Option<&'static [(i32, i32)]> {
        match self {
            Self::Knight => Some(&KNIGHT_OFFSETS),
            _ => None,
        }
    }
}

/// Error for a piece name that names no [`PieceKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPieceError(pub String);

impl fmt::Display for InvalidPieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid chess piece: \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for InvalidPieceError {}

impl FromStr for PieceKind {
    type Err = InvalidPieceError;

    /// Parse a case-insensitive kind name (`"knight"`, `"Rook"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pawn" => Ok(Self::Pawn),
            "king" => Ok(Self::King),
            "queen" => Ok(Self::Queen),
            "knight" => Ok(Self::Knight),
            "rook" => Ok(Self::Rook),
            "bishop" => Ok(Self::Bishop),
            _ => Err(InvalidPieceError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A colored piece occupying a board square.
///
/// The value itself is immutable; a piece "moves" by having its owning
/// square slot transfer it to another square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    /// Create a new piece.
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub const fn color(self) -> Color {
        self.color
    }

    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Single-letter notation symbol of the kind.
    pub const fn symbol(self) -> char {
        self.kind.symbol()
    }

    /// Display glyph for this piece.
    pub const fn glyph(self) -> char {
        match (self.kind, self.color) {
            (PieceKind::King, Color::White) => '\u{2654}',
            (PieceKind::Queen, Color::White) => '\u{2655}',
            (PieceKind::Rook, Color::White) => '\u{2656}',
            (PieceKind::Bishop, Color::White) => '\u{2657}',
            (PieceKind::Knight, Color::White) => '\u{2658}',
            (PieceKind::Pawn, Color::White) => '\u{2659}',
            (PieceKind::King, Color::Black) => '\u{265A}',
            (PieceKind::Queen, Color::Black) => '\u{265B}',
            (PieceKind::Rook, Color::Black) => '\u{265C}',
            (PieceKind::Bishop, Color::Black) => '\u{265D}',
            (PieceKind::Knight, Color::Black) => '\u{265E}',
            (PieceKind::Pawn, Color::Black) => '\u{265F}',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn piece_round_trip() {
        let p = Piece::new(Color::Black, PieceKind::Knight);
        let json = serde_json::to_string(&p).unwrap();
        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
