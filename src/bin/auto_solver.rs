use clap::Parser;
use hanoi_tower::engine::{optimal_move_count, GameState};
use hanoi_tower::solver::solve;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of disks to solve for
    #[clap(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=16))]
    disks: u32,

    /// Print only the move list, not every intermediate position
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let initial = GameState::new(args.disks);
    println!("Solving the {}-disk Tower of Hanoi...\n", args.disks);
    println!("Initial position:\n{}\n", initial);

    let solution = solve(args.disks);

    println!("Moves ({}):", solution.move_count);
    let mut replay = initial;
    for (i, &(from, to)) in solution.moves.iter().enumerate() {
        println!("  Move {}: {} -> {}", i + 1, from, to);
        if !args.quiet {
            replay = replay.apply_move(from, to);
            println!("{}\n", replay);
        }
    }

    println!(
        "\nSolved in {} moves (2^{} - 1 = {}).",
        solution.move_count,
        args.disks,
        optimal_move_count(args.disks)
    );
    println!("Final position:\n{}", solution.final_state);
}
