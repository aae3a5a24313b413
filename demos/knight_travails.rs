//! Knight travails: shortest knight path between two board squares.
//!
//! Run: cargo run --bin knight-travails -- b8 e2

use clap::Parser;
use rand::RngExt;

use travails_board::{Board, BoardError};
use travails_core::Coord;

/// Squares holding knights in the standard layout.
const KNIGHTS: [Coord; 4] = [
    Coord::new(0, 1),
    Coord::new(0, 6),
    Coord::new(7, 1),
    Coord::new(7, 6),
];

#[derive(Parser)]
#[command(about = "Find the shortest knight path between two squares")]
struct Args {
    /// Start square, algebraic notation.
    #[arg(default_value = "b8")]
    from: Coord,
    /// Destination square, algebraic notation.
    #[arg(default_value = "e2")]
    to: Coord,
    /// Ignore FROM/TO and pick a random knight and destination.
    #[arg(long)]
    random: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut board = Board::new();
    let (from, to) = if args.random {
        random_query()
    } else {
        (args.from, args.to)
    };
    tracing::debug!(%from, %to, "running path query");

    println!("Create Board");
    println!("{board}");

    let start = board.square(from.rank, from.file)?.notation();
    let end = board.square(to.rank, to.file)?.notation();
    println!(
        "Get {start} [{},{}] to {end} [{},{}]",
        from.rank, from.file, to.rank, to.file
    );

    let Some(piece) = board.piece(from.rank, from.file)? else {
        return Err(Box::new(BoardError::EmptySquare(from)));
    };
    let path = board.find_path(piece.kind(), from, to)?;

    println!("You made it in {} moves! Here is your path:", path.moves);
    for pair in path.steps.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let prev_notation = board.square(prev.rank, prev.file)?.notation();
        let next_square = board.square(next.rank, next.file)?;
        let separator = if next_square.piece().is_none() {
            "to"
        } else {
            "takes"
        };
        let next_notation = next_square.notation();
        println!("{prev_notation} {separator} {next_notation}.");
        board.move_piece(prev, next)?;
    }

    println!("{board}");
    Ok(())
}

fn random_query() -> (Coord, Coord) {
    let mut rng = rand::rng();
    let from = KNIGHTS[rng.random_range(0..KNIGHTS.len())];
    let to = Coord::new(rng.random_range(0..8), rng.random_range(0..8));
    (from, to)
}
