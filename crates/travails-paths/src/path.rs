use std::fmt;

use travails_core::Coord;

/// A shortest path between two squares.
///
/// `steps` starts at the query's start coordinate and ends at its
/// destination; `moves == steps.len() - 1`. A query whose start equals
/// its destination yields a single-step path with zero moves.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub steps: Vec<Coord>,
    pub moves: usize,
}

impl Path {
    /// First coordinate of the path.
    pub fn start(&self) -> Coord {
        self.steps[0]
    }

    /// Last coordinate of the path.
    pub fn end(&self) -> Coord {
        self.steps[self.steps.len() - 1]
    }
}

/// Error returned when the destination is unreachable from the start.
///
/// Cannot happen for knight moves on the full board (that graph is
/// connected); it is reachable with a custom or disconnected
/// [`Adjacency`](crate::Adjacency) source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoPathError {
    pub from: Coord,
    pub to: Coord,
}

impl fmt::Display for NoPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no path from {} to {}", self.from, self.to)
    }
}

impl std::error::Error for NoPathError {}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path {
            steps: vec![Coord::new(0, 1), Coord::new(2, 2), Coord::new(4, 3)],
            moves: 2,
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
