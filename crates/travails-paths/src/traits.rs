use travails_core::Coord;

/// A source of move adjacency — maps a coordinate to the coordinates one
/// legal move away.
pub trait Adjacency {
    /// Append the neighbors of `c` into `buf`, in this source's fixed
    /// order. The caller clears `buf` before calling.
    ///
    /// The order matters: breadth-first search visits neighbors in the
    /// order given here, and among equally short paths the first
    /// discovery wins.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Adjacency for a fixed-leap piece: a `(Δrank, Δfile)` offset table
/// applied to the query coordinate and filtered to a `width × height`
/// board, preserving table order.
#[derive(Debug, Clone, Copy)]
pub struct Leaper<'a> {
    offsets: &'a [(i32, i32)],
    width: i32,
    height: i32,
}

impl<'a> Leaper<'a> {
    /// Create a leaper adjacency from an offset table and board size.
    pub const fn new(offsets: &'a [(i32, i32)], width: i32, height: i32) -> Self {
        Self {
            offsets,
            width,
            height,
        }
    }
}

impl Adjacency for Leaper<'_> {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for &(dr, df) in self.offsets {
            let n = c.shift(dr, df);
            if n.rank >= 0 && n.rank < self.height && n.file >= 0 && n.file < self.width {
                buf.push(n);
            }
        }
    }
}
