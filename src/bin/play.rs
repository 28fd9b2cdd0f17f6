//! Interactive terminal marble solitaire.

use std::io::{self, BufRead, Write};

use marble_solitaire::board::is_playable;
use marble_solitaire::game::Game;
use marble_solitaire::solution::MoveDescription;

fn main() {
    println!(
        "Welcome to Marble Solitaire!\n\n\
         Jump marbles over their neighbours into empty holes; every jumped\n\
         marble is removed. You win when a single marble remains.\n"
    );
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut game = Game::new();
    print!("Hole to start empty (row col, default 2 3): ");
    io::stdout().flush().ok();
    if let Some(Ok(line)) = lines.next() {
        if let Some((row, col)) = parse_opening(&line) {
            game.reset_with_empty(row, col);
        } else if !line.trim().is_empty() {
            println!("Could not read that; starting with the (2, 3) opening.");
        }
    }

    loop {
        println!();
        game.render(&mut io::stdout()).ok();
        println!(
            "\nMove {}, marbles left: {}",
            game.moves_made() + 1,
            game.peg_count()
        );

        if !game.has_any_legal_move() {
            break;
        }

        print!("> ");
        io::stdout().flush().ok();
        let Some(Ok(line)) = lines.next() else {
            return;
        };
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => return,
            "undo" => {
                if !game.undo_last_move() {
                    println!("No moves to undo.");
                }
            }
            "hint" => match game.best_next_move() {
                Some(m) => println!("Best move: {m}"),
                None => println!("No solution exists from here."),
            },
            "solve" => {
                let solution = game.full_solution();
                if solution.is_empty() {
                    println!("No solution exists from here.");
                } else {
                    for m in solution {
                        println!("{m}");
                    }
                }
            }
            _ => match cmd.parse::<MoveDescription>() {
                Ok(m) => {
                    if !game.try_make_move(m.row, m.col, m.direction) {
                        println!("That jump is not legal here.");
                    }
                }
                Err(e) => println!("{e}"),
            },
        }
    }

    if game.has_won() {
        println!("\nYou win!");
    } else {
        println!("\nNo more legal moves. You lose!");
    }
}

fn parse_opening(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !is_playable(row, col) {
        return None;
    }
    Some((row, col))
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 <row> <col> <direction>   jump the marble at (row, col); the\n\
         \x20                           direction is up, down, left or right\n\
         \x20 hint                      show one move that keeps a win reachable\n\
         \x20 solve                     print a full solution from here\n\
         \x20 undo                      take back the last move\n\
         \x20 help                      this text\n\
         \x20 quit                      leave the game"
    );
}
