//! Print the knight-move distance from one square to every square.
//!
//! Run: cargo run --bin knight-distances -- d4

use clap::Parser;

use travails_core::{Coord, KNIGHT_OFFSETS};
use travails_paths::{Leaper, PathGrid};

#[derive(Parser)]
#[command(about = "Knight-move distance map from a square")]
struct Args {
    /// Source square, algebraic notation.
    #[arg(default_value = "d4")]
    from: Coord,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut grid = PathGrid::new(8, 8);
    grid.distance_map(&Leaper::new(&KNIGHT_OFFSETS, 8, 8), &[args.from]);

    println!("Knight moves needed from {}:", args.from);
    for rank in 0..8 {
        let mut row = format!("{} ", Coord::new(rank, 0).display_rank());
        for file in 0..8 {
            match grid.distance(Coord::new(rank, file)) {
                Some(d) => row.push_str(&format!(" {d}")),
                None => row.push_str(" -"),
            }
        }
        println!("{row}");
    }
    println!("   a b c d e f g h");
}
