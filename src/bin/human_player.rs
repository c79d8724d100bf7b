use clap::Parser;
use hanoi_tower::engine::{GameState, Pole};
use hanoi_tower::session::{ClickOutcome, Session};
use std::io::{self, Write}; // For input/output

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of disks (3-8)
    #[clap(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(3..=8))]
    disks: u32,

    /// Pre-apply this many random valid moves before play begins
    #[clap(long, default_value_t = 0)]
    scramble: u32,

    /// Seed for the scramble
    #[clap(long, default_value_t = 0)]
    seed: u64,
}

/// Maps a typed token to a pole: `l`/`c`/`r` or the raw indices `0`/`1`/`2`.
fn parse_pole(token: &str) -> Option<Pole> {
    match token {
        "l" | "L" => Some(Pole::Left),
        "c" | "C" => Some(Pole::Center),
        "r" | "R" => Some(Pole::Right),
        _ => token
            .parse::<usize>()
            .ok()
            .and_then(Pole::from_index),
    }
}

fn main() {
    let args = Args::parse();

    let mut session = if args.scramble > 0 {
        Session::with_state(GameState::scrambled(args.disks, args.scramble, args.seed))
    } else {
        Session::new(args.disks)
    };

    println!("Welcome to the Tower of Hanoi!");
    println!("Move all disks to the Right pole. A disk may never rest on a smaller one.");

    let mut was_complete = session.state().is_complete();

    loop {
        println!("---------------------");
        println!(
            "Moves: {}, Optimal: {}, Efficiency: {}%",
            session.state().moves(),
            session.optimal_moves(),
            session.efficiency_percent()
        );
        println!(
            "{}",
            session
                .state()
                .to_string_with_selection(session.selection().map(|s| s.pole))
        );

        if session.state().is_complete() && !was_complete {
            println!();
            println!("---------------------");
            println!("🎉 Congratulations! 🎉");
            println!(
                "You solved the puzzle in {} moves (optimal: {}).",
                session.state().moves(),
                session.optimal_moves()
            );
            println!("---------------------");
        }
        was_complete = session.state().is_complete();

        print!("Click a pole (l/c/r), 'n K' for a new K-disk game, 'reset', or 'q' to quit: ");
        io::stdout().flush().unwrap(); // Ensure prompt is shown before input

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "reset" {
            session.reset();
            println!("Game reset.");
            was_complete = false;
            continue;
        }

        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        if parts.len() == 2 && parts[0] == "n" {
            match parts[1].parse::<u32>() {
                Ok(count) if (3..=8).contains(&count) => {
                    session.initialize(count);
                    println!("New game with {} disks.", count);
                    was_complete = false;
                }
                _ => println!("Disk count must be a number between 3 and 8."),
            }
            continue;
        }

        if parts.len() == 1 {
            if let Some(pole) = parse_pole(parts[0]) {
                match session.click_pole(pole) {
                    ClickOutcome::Selected => {
                        // top_disk is present: the click just selected it.
                        let disk = session.state().top_disk(pole).unwrap();
                        println!("Picked up disk {} from the {} pole.", disk, pole);
                    }
                    ClickOutcome::Deselected => println!("Selection cleared."),
                    ClickOutcome::Moved => println!("Moved."),
                    ClickOutcome::RejectedMove => {
                        println!("Invalid move: a disk may not rest on a smaller one.")
                    }
                    ClickOutcome::EmptyPole => println!("The {} pole is empty.", pole),
                }
                continue;
            }
        }

        println!("Invalid input. Use 'l', 'c', 'r' (or 0/1/2), 'n K', 'reset', or 'q'.");
    }
}
