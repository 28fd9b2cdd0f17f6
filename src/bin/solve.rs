//! Batch solver: solve one opening and report the moves and timing.

use std::path::PathBuf;
use std::time::Instant;

use marble_solitaire::board::{is_playable, Board};
use marble_solitaire::search::Solver;
use marble_solitaire::solution::{self, MoveDescription, SolveReport};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: solve <row> <col> [--json <path>]");
        std::process::exit(2);
    }

    let (Ok(row), Ok(col)) = (args[1].parse::<usize>(), args[2].parse::<usize>()) else {
        eprintln!("row and col must be digits 0 through 6");
        std::process::exit(2);
    };
    if !is_playable(row, col) {
        eprintln!("({row}, {col}) is not a playable hole of the cross");
        std::process::exit(2);
    }

    let mut json_path: Option<PathBuf> = None;
    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                let Some(p) = args.get(i + 1) else {
                    eprintln!("--json requires a path argument");
                    std::process::exit(2);
                };
                json_path = Some(PathBuf::from(p));
                i += 2;
            }
            x => {
                eprintln!("Unknown option: {x}");
                std::process::exit(2);
            }
        }
    }

    let board = Board::with_empty_at(row, col);
    let mut solver = Solver::new();

    let started = Instant::now();
    let moves = solver.solve(board);
    let elapsed = started.elapsed();
    let stats = solver.last_stats();

    if moves.is_empty() {
        println!("No solution exists for the ({row}, {col}) opening.");
        eprintln!(
            "Explored {} canonical states ({} duplicates pruned) in {:.3}s.",
            stats.nodes_expanded,
            stats.duplicate_hits,
            elapsed.as_secs_f64()
        );
        std::process::exit(1);
    }

    let descriptions: Vec<MoveDescription> =
        moves.iter().map(|&m| MoveDescription::from(m)).collect();
    for m in &descriptions {
        println!("{m}");
    }
    eprintln!(
        "{} moves; explored {} canonical states ({} duplicates pruned) in {:.3}s.",
        descriptions.len(),
        stats.nodes_expanded,
        stats.duplicate_hits,
        elapsed.as_secs_f64()
    );

    if let Some(path) = json_path {
        let report = SolveReport {
            opening: [row, col],
            move_count: descriptions.len(),
            moves: descriptions,
            elapsed_secs: elapsed.as_secs_f64(),
        };
        if let Err(e) = solution::write_json(&path, &report) {
            eprintln!("Failed to write report: {e}");
            std::process::exit(1);
        }
        eprintln!("Report written to {}.", path.display());
    }
}
