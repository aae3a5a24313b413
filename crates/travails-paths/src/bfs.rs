use std::collections::VecDeque;

use travails_core::Coord;

use crate::path::{NoPathError, Path};
use crate::traits::Adjacency;

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// No predecessor recorded (search roots).
const NO_PARENT: usize = usize::MAX;

/// Central coordinator for breadth-first queries on a board rectangle.
///
/// `PathGrid` owns the distance map, the predecessor map, the FIFO
/// frontier and a neighbor scratch buffer, so repeated queries incur no
/// allocations after the first use. The maps are flat arrays indexed by
/// rank-major position; adjacency results are plain coordinates, so
/// there is no ownership or lifetime entanglement with the caller's
/// board representation.
pub struct PathGrid {
    width: i32,
    height: i32,
    dist: Vec<i32>,
    parent: Vec<usize>,
    queue: VecDeque<usize>,
    // shared scratch buffer for neighbor queries
    nbuf: Vec<Coord>,
}

impl PathGrid {
    /// Create a new `PathGrid` for a `width × height` board.
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width: width.max(0),
            height: height.max(0),
            dist: vec![UNREACHABLE; len],
            parent: vec![NO_PARENT; len],
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Board width used by this grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height used by this grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Convert a coordinate to a flat index. `None` if out of range.
    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if c.rank < 0 || c.rank >= self.height || c.file < 0 || c.file >= self.width {
            return None;
        }
        Some((c.rank * self.width + c.file) as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx as i32 / self.width, idx as i32 % self.width)
    }

    fn reset(&mut self) {
        for d in self.dist.iter_mut() {
            *d = UNREACHABLE;
        }
        for p in self.parent.iter_mut() {
            *p = NO_PARENT;
        }
        self.queue.clear();
    }

    /// Distance recorded for `c` by the last query, or `None` if `c` is
    /// out of range or was not reached.
    ///
    /// After [`shortest_path`](Self::shortest_path) only the explored
    /// region carries distances (the search stops once the destination
    /// is discovered); use [`distance_map`](Self::distance_map) to fill
    /// the whole reachable region.
    pub fn distance(&self, c: Coord) -> Option<i32> {
        let d = self.dist[self.idx(c)?];
        (d != UNREACHABLE).then_some(d)
    }

    /// Compute the shortest path from `from` to `to` over `adj`.
    ///
    /// Unit-cost breadth-first search with first-discovery-wins
    /// tie-breaking: a square already assigned a finite distance is
    /// never revisited, so with a fixed neighbor order the returned
    /// path is exactly reproducible. The search stops as soon as the
    /// destination is discovered — BFS guarantees that first distance
    /// is already minimal.
    ///
    /// Coordinates outside the grid are treated as unreachable.
    pub fn shortest_path<A: Adjacency>(
        &mut self,
        adj: &A,
        from: Coord,
        to: Coord,
    ) -> Result<Path, NoPathError> {
        let no_path = NoPathError { from, to };
        let (Some(si), Some(ti)) = (self.idx(from), self.idx(to)) else {
            return Err(no_path);
        };

        self.reset();
        self.dist[si] = 0;

        if si == ti {
            return Ok(Path {
                steps: vec![from],
                moves: 0,
            });
        }

        self.queue.push_back(si);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        'search: while let Some(ci) = self.queue.pop_front() {
            let current_dist = self.dist[ci];
            let cp = self.coord(ci);

            nbuf.clear();
            adj.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                // First discovery wins; never revisit a finite distance.
                if self.dist[ni] != UNREACHABLE {
                    continue;
                }
                self.dist[ni] = current_dist + 1;
                self.parent[ni] = ci;
                if ni == ti {
                    found = true;
                    break 'search;
                }
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;

        if !found {
            return Err(no_path);
        }

        // Reconstruct by walking predecessors back from the destination.
        let moves = self.dist[ti] as usize;
        let mut steps = Vec::with_capacity(moves + 1);
        let mut ci = ti;
        while ci != NO_PARENT {
            steps.push(self.coord(ci));
            ci = self.parent[ci];
        }
        steps.reverse();
        debug_assert_eq!(steps.len(), moves + 1);
        Ok(Path { steps, moves })
    }

    /// Fill the distance map with the move count from the nearest of
    /// `sources` to every reachable square, without early exit. Query
    /// the result with [`distance`](Self::distance).
    pub fn distance_map<A: Adjacency>(&mut self, adj: &A, sources: &[Coord]) {
        self.reset();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                if self.dist[si] != UNREACHABLE {
                    continue;
                }
                self.dist[si] = 0;
                self.queue.push_back(si);
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.queue.pop_front() {
            let current_dist = self.dist[ci];
            let cp = self.coord(ci);

            nbuf.clear();
            adj.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.dist[ni] != UNREACHABLE {
                    continue;
                }
                self.dist[ni] = current_dist + 1;
                self.parent[ni] = ci;
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
    }
}
