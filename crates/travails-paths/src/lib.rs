//! Breadth-first shortest-path search over piece-move adjacency.
//!
//! The engine is parameterized over an [`Adjacency`] source, so the same
//! search serves any piece's move rule (and any custom graph supplied in
//! tests). All queries run through [`PathGrid`], which owns its distance
//! and predecessor caches so repeated queries incur no allocations after
//! warm-up.
//!
//! Every move has unit cost, which is why plain BFS is sufficient: the
//! first time a square is discovered, its distance is already minimal.
//! With a fixed neighbor order the search is fully deterministic: it
//! returns one canonical shortest path, not an arbitrary one among ties.

mod bfs;
mod path;
mod traits;

pub use bfs::{PathGrid, UNREACHABLE};
pub use path::{NoPathError, Path};
pub use traits::{Adjacency, Leaper};
