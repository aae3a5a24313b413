//! The [`Board`] type: square arena, layout, movement and path queries.

use std::fmt;

use travails_core::{Color, Coord, Piece, PieceKind};
use travails_paths::{Adjacency, NoPathError, Path, PathGrid};

use crate::square::Square;

/// Number of ranks and files.
pub(crate) const SIZE: i32 = 8;

/// Back-rank piece order, file 0 to 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by board access, movement and path queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Rank or file outside `[0, 7]`.
    OutOfBounds { rank: i32, file: i32 },
    /// A path query started from a square with no piece on it.
    EmptySquare(Coord),
    /// A move was requested from a square with no piece on it.
    IllegalMove(Coord),
    /// The destination is unreachable from the start.
    NoPath(NoPathError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { rank, file } => {
                write!(f, "invalid rank ({rank}) or file ({file})")
            }
            Self::EmptySquare(c) => write!(f, "square {c} has no piece"),
            Self::IllegalMove(c) => write!(f, "cannot move from empty square {c}"),
            Self::NoPath(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<NoPathError> for BoardError {
    fn from(e: NoPathError) -> Self {
        Self::NoPath(e)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// An 8×8 chess board.
///
/// Squares live in a flat rank-major arena; adjacency lists hold
/// coordinates into it, never references, so the board can be moved,
/// cloned and serialized freely. Knight adjacency is computed for every
/// square exactly once at construction — movement never changes
/// geometry, so it is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Create a board with the standard chess starting layout.
    pub fn new() -> Self {
        Self::from_layout(standard_layout())
    }

    /// Create a board from caller-supplied content, rank-major with rank
    /// 0 at the top (displayed rank 8). Adjacency is computed the same
    /// way as for [`new`](Self::new).
    pub fn from_layout(layout: [[Option<Piece>; 8]; 8]) -> Self {
        let mut squares = Vec::with_capacity((SIZE * SIZE) as usize);
        for (rank, row) in layout.iter().enumerate() {
            for (file, piece) in row.iter().enumerate() {
                squares.push(Square::new(rank as i32, file as i32, *piece));
            }
        }
        let mut board = Self { squares };
        for square in board.squares.iter_mut() {
            square.compute_moves();
        }
        board
    }

    /// Convert rank and file to a flat index. `None` if out of bounds.
    #[inline]
    fn idx(&self, rank: i32, file: i32) -> Option<usize> {
        if rank < 0 || rank >= SIZE || file < 0 || file >= SIZE {
            return None;
        }
        Some((rank * SIZE + file) as usize)
    }

    /// The square at `(rank, file)`.
    pub fn square(&self, rank: i32, file: i32) -> Result<&Square, BoardError> {
        let idx = self
            .idx(rank, file)
            .ok_or(BoardError::OutOfBounds { rank, file })?;
        Ok(&self.squares[idx])
    }

    /// The piece at `(rank, file)`, if any.
    pub fn piece(&self, rank: i32, file: i32) -> Result<Option<Piece>, BoardError> {
        Ok(self.square(rank, file)?.piece())
    }

    /// Move the piece on `from` to `to`, emptying `from`. A piece
    /// already on `to` is captured by overwrite; no capture list is
    /// kept.
    ///
    /// The transfer is a single board-level operation: on any error the
    /// board is untouched, and no caller can observe a state where the
    /// piece is on neither or both squares.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<(), BoardError> {
        let fi = self.idx(from.rank, from.file).ok_or(BoardError::OutOfBounds {
            rank: from.rank,
            file: from.file,
        })?;
        let ti = self.idx(to.rank, to.file).ok_or(BoardError::OutOfBounds {
            rank: to.rank,
            file: to.file,
        })?;
        let Some(piece) = self.squares[fi].take_piece() else {
            return Err(BoardError::IllegalMove(from));
        };
        self.squares[ti].set_piece(piece);
        Ok(())
    }

    /// Find a minimum-move path for a `kind`-moving piece from `from`
    /// to `to`, using the precomputed adjacency.
    ///
    /// Fails with [`BoardError::EmptySquare`] when `from` holds no
    /// piece. Does not mutate the board — callers apply the moves
    /// afterwards, step by step, via [`move_piece`](Self::move_piece).
    /// A kind without a move rule has empty adjacency everywhere, so
    /// such queries surface [`BoardError::NoPath`].
    pub fn find_path(&self, kind: PieceKind, from: Coord, to: Coord) -> Result<Path, BoardError> {
        let start = self.square(from.rank, from.file)?;
        self.square(to.rank, to.file)?;
        if start.piece().is_none() {
            return Err(BoardError::EmptySquare(from));
        }
        let mut grid = PathGrid::new(SIZE, SIZE);
        let path = grid.shortest_path(&BoardMoves { board: self, kind }, from, to)?;
        Ok(path)
    }

    /// Fixed-width rendering with rank and file labels.
    pub fn render(&self) -> String {
        let mut out = String::from("   ╔══╦══╦══╦══╦══╦══╦══╦══╗\n");
        for rank in 0..SIZE {
            out.push_str(&format!("{}-{}║", rank, SIZE - rank));
            for file in 0..SIZE {
                out.push_str(&format!("{} ║", self.squares[(rank * SIZE + file) as usize]));
            }
            out.push('\n');
            if rank < SIZE - 1 {
                out.push_str("   ╠══╬══╬══╬══╬══╬══╬══╬══╣\n");
            }
        }
        out.push_str("   ╚══╩══╩══╩══╩══╩══╩══╩══╝\n");
        out.push_str("    0  1  2  3  4  5  6  7 \n");
        out.push_str("    a  b  c  d  e  f  g  h\n");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Standard chess starting layout: black on ranks 0-1, white on 6-7.
fn standard_layout() -> [[Option<Piece>; 8]; 8] {
    let mut layout: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];
    for file in 0..8 {
        layout[0][file] = Some(Piece::new(Color::Black, BACK_RANK[file]));
        layout[1][file] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        layout[6][file] = Some(Piece::new(Color::White, PieceKind::Pawn));
        layout[7][file] = Some(Piece::new(Color::White, BACK_RANK[file]));
    }
    layout
}

/// The board's cached adjacency for one piece kind, as seen by the
/// pathfinding engine.
struct BoardMoves<'a> {
    board: &'a Board,
    kind: PieceKind,
}

impl Adjacency for BoardMoves<'_> {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        if let Ok(square) = self.board.square(c.rank, c.file) {
            buf.extend_from_slice(square.moves(self.kind));
        }
    }
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

// Only the piece layout is serialized; adjacency caches are rebuilt on
// deserialization, the same as at construction.
#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.squares.len()))?;
        for square in &self.squares {
            seq.serialize_element(&square.piece())?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pieces: Vec<Option<Piece>> = Vec::deserialize(deserializer)?;
        if pieces.len() != (SIZE * SIZE) as usize {
            return Err(serde::de::Error::invalid_length(pieces.len(), &"64 squares"));
        }
        let mut layout: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];
        for (i, piece) in pieces.into_iter().enumerate() {
            layout[i / 8][i % 8] = piece;
        }
        Ok(Board::from_layout(layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece_count(board: &Board) -> usize {
        (0..SIZE)
            .flat_map(|r| (0..SIZE).map(move |f| (r, f)))
            .filter(|&(r, f)| board.piece(r, f).unwrap().is_some())
            .count()
    }

    fn is_knight_move(a: Coord, b: Coord) -> bool {
        let (dr, df) = ((a.rank - b.rank).abs(), (a.file - b.file).abs());
        (dr == 2 && df == 1) || (dr == 1 && df == 2)
    }

    #[test]
    fn standard_layout_spot_checks() {
        let board = Board::new();
        let b8 = board.piece(0, 1).unwrap().unwrap();
        assert_eq!(b8.color(), Color::Black);
        assert_eq!(b8.kind(), PieceKind::Knight);
        let a8 = board.piece(0, 0).unwrap().unwrap();
        assert_eq!(a8.kind(), PieceKind::Rook);
        let e1 = board.piece(7, 4).unwrap().unwrap();
        assert_eq!(e1.color(), Color::White);
        assert_eq!(e1.kind(), PieceKind::King);
        for file in 0..8 {
            assert_eq!(
                board.piece(6, file).unwrap().unwrap().kind(),
                PieceKind::Pawn
            );
        }
        assert!(board.piece(3, 3).unwrap().is_none());
        assert_eq!(piece_count(&board), 32);
    }

    #[test]
    fn adjacency_correct_for_all_squares() {
        let board = Board::new();
        for rank in 0..SIZE {
            for file in 0..SIZE {
                let square = board.square(rank, file).unwrap();
                let moves = square.moves(PieceKind::Knight);
                // Every cached move is a legal knight leap landing on
                // the board.
                for &m in moves {
                    assert!(m.on_board());
                    assert!(is_knight_move(square.coord(), m));
                }
                // No duplicates.
                let mut sorted: Vec<Coord> = moves.to_vec();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), moves.len());
                // And nothing is missing: count matches the number of
                // in-bounds knight leaps from this square.
                let expected = (-2i32..=2)
                    .flat_map(|dr| (-2i32..=2).map(move |df| (dr, df)))
                    .filter(|&(dr, df)| dr.abs() + df.abs() == 3 && dr != 0 && df != 0)
                    .filter(|&(dr, df)| Coord::new(rank, file).shift(dr, df).on_board())
                    .count();
                assert_eq!(moves.len(), expected, "square ({rank},{file})");
            }
        }
        // Region spot checks: 2 in corners, 4 on most edges, 8 centrally.
        let counts = |r, f| {
            board
                .square(r, f)
                .unwrap()
                .moves(PieceKind::Knight)
                .len()
        };
        assert_eq!(counts(0, 0), 2);
        assert_eq!(counts(7, 7), 2);
        assert_eq!(counts(0, 3), 4);
        assert_eq!(counts(1, 1), 4);
        assert_eq!(counts(4, 4), 8);
    }

    #[test]
    fn square_bounds_errors() {
        let board = Board::new();
        for (rank, file) in [(8, 0), (-1, 0), (0, 8), (0, -1)] {
            assert_eq!(
                board.square(rank, file).unwrap_err(),
                BoardError::OutOfBounds { rank, file }
            );
        }
    }

    #[test]
    fn move_piece_transfers_ownership() {
        let mut board = Board::new();
        let knight = board.piece(0, 1).unwrap().unwrap();
        board.move_piece(Coord::new(0, 1), Coord::new(2, 2)).unwrap();
        assert!(board.piece(0, 1).unwrap().is_none());
        assert_eq!(board.piece(2, 2).unwrap(), Some(knight));
    }

    #[test]
    fn move_from_empty_square_is_illegal_and_harmless() {
        let mut board = Board::new();
        let before = board.clone();
        let err = board
            .move_piece(Coord::new(4, 4), Coord::new(2, 3))
            .unwrap_err();
        assert_eq!(err, BoardError::IllegalMove(Coord::new(4, 4)));
        assert_eq!(board, before);
    }

    #[test]
    fn move_piece_checks_bounds_before_mutating() {
        let mut board = Board::new();
        let before = board.clone();
        assert!(board.move_piece(Coord::new(0, 1), Coord::new(8, 0)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn capture_overwrites_silently() {
        let mut board = Board::new();
        assert!(board.piece(6, 4).unwrap().is_some());
        let knight = board.piece(0, 1).unwrap().unwrap();
        board.move_piece(Coord::new(0, 1), Coord::new(6, 4)).unwrap();
        assert_eq!(board.piece(6, 4).unwrap(), Some(knight));
        assert_eq!(piece_count(&board), 31);
    }

    #[test]
    fn find_path_requires_a_piece() {
        let board = Board::new();
        let err = board
            .find_path(PieceKind::Knight, Coord::new(4, 4), Coord::new(2, 3))
            .unwrap_err();
        assert_eq!(err, BoardError::EmptySquare(Coord::new(4, 4)));
    }

    #[test]
    fn find_path_golden_end_to_end() {
        // The driver's canonical run: black knight b8 -> e2.
        let board = Board::new();
        let path = board
            .find_path(PieceKind::Knight, Coord::new(0, 1), Coord::new(6, 4))
            .unwrap();
        assert_eq!(path.moves, 3);
        assert_eq!(
            path.steps,
            vec![
                Coord::new(0, 1),
                Coord::new(2, 2),
                Coord::new(4, 3),
                Coord::new(6, 4),
            ]
        );
    }

    #[test]
    fn find_path_does_not_mutate() {
        let board = Board::new();
        let before = board.clone();
        board
            .find_path(PieceKind::Knight, Coord::new(0, 1), Coord::new(6, 4))
            .unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn find_path_is_deterministic() {
        let board = Board::new();
        let first = board
            .find_path(PieceKind::Knight, Coord::new(7, 6), Coord::new(3, 3))
            .unwrap();
        for _ in 0..3 {
            let again = board
                .find_path(PieceKind::Knight, Coord::new(7, 6), Coord::new(3, 3))
                .unwrap();
            assert_eq!(first.steps, again.steps);
        }
    }

    #[test]
    fn walking_a_path_applies_capture_semantics() {
        let mut board = Board::new();
        let knight = board.piece(0, 1).unwrap().unwrap();
        let path = board
            .find_path(PieceKind::Knight, Coord::new(0, 1), Coord::new(6, 4))
            .unwrap();
        for pair in path.steps.windows(2) {
            board.move_piece(pair[0], pair[1]).unwrap();
        }
        // The knight sits on the destination; every other visited square
        // is empty; the white pawn that was on e2 is gone.
        assert_eq!(board.piece(6, 4).unwrap(), Some(knight));
        for &c in &path.steps[..path.steps.len() - 1] {
            assert!(board.piece(c.rank, c.file).unwrap().is_none());
        }
        assert_eq!(piece_count(&board), 31);
    }

    #[test]
    fn from_layout_custom_board() {
        let mut layout: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];
        layout[0][0] = Some(Piece::new(Color::White, PieceKind::Knight));
        let board = Board::from_layout(layout);
        assert_eq!(piece_count(&board), 1);
        let path = board
            .find_path(PieceKind::Knight, Coord::new(0, 0), Coord::new(7, 7))
            .unwrap();
        assert_eq!(path.moves, 6);
    }

    #[test]
    fn kind_without_rule_finds_no_path() {
        let board = Board::new();
        let err = board
            .find_path(PieceKind::Rook, Coord::new(0, 0), Coord::new(0, 5))
            .unwrap_err();
        assert!(matches!(err, BoardError::NoPath(_)));
    }

    #[test]
    fn render_reflects_board_state() {
        let board = Board::new();
        let out = board.render();
        // Rank 0 row carries the black back rank, rank 7 the white one.
        let rows: Vec<&str> = out.lines().collect();
        assert!(rows[1].starts_with("0-8║"));
        assert!(rows[1].contains('♞'));
        assert!(rows[15].starts_with("7-1║"));
        assert!(rows[15].contains('♘'));
        // Label footer.
        assert!(out.ends_with("    a  b  c  d  e  f  g  h\n"));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip_rebuilds_adjacency() {
        let board = Board::new();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
        // Adjacency was recomputed, not deserialized: queries still work.
        let path = back
            .find_path(PieceKind::Knight, Coord::new(0, 1), Coord::new(6, 4))
            .unwrap();
        assert_eq!(path.moves, 3);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = serde_json::from_str::<Board>("[null, null]").unwrap_err();
        assert!(err.to_string().contains("64"));
    }
}
