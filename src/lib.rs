//! # marble_solitaire
//!
//! A solver and playable engine for French (37-hole) Marble Solitaire:
//! from a single-vacancy starting position on the cross board, find a
//! sequence of jump-captures that leaves exactly one marble.
//!
//! ## Architecture
//!
//! The codebase is structured as layered components:
//!
//! - [`board`]: allocation-free primitives: the bit-packed [`board::Board`],
//!   the static jump catalogue, the eight [`board::Transform`] symmetries of
//!   the square, and the 37-bit packed position index.
//! - [`search`]: the depth-first [`search::Solver`] over canonical states and
//!   the [`search::VisitedFilter`] backends it deduplicates with.
//! - [`game`]: stateful orchestration for an interactive front end: make and
//!   undo moves, ask for hints, ask for the full solution.
//! - [`solution`]: the textual move format ("`row col direction`") and JSON
//!   solve reports.
//!
//! The search space from a standard opening is on the order of 10^9 raw
//! states; it is traversable in seconds only because every successor is
//! folded through the D4 symmetry group before the visited check.
//! Canonicalization dominates runtime, so its inner loop is a single fused
//! pass over board rows with no allocation and no per-transform branching.
//!
//! ## Quick start (no heavy computation)
//!
//! ```
//! use marble_solitaire::board::Direction;
//! use marble_solitaire::game::Game;
//!
//! let mut game = Game::with_opening(0, 2);
//! assert!(game.try_make_move(2, 2, Direction::Up));
//! assert_eq!(game.peg_count(), 35);
//! assert!(game.undo_last_move());
//! ```
//!
//! Solving a whole opening is heavier (seconds, not microseconds):
//!
//! ```no_run
//! use marble_solitaire::board::Board;
//! use marble_solitaire::search::Solver;
//!
//! let mut solver = Solver::new();
//! let solution = solver.solve(Board::with_empty_at(0, 2));
//! assert!(!solution.is_empty());
//! ```

pub mod board;
pub mod game;
pub mod search;
pub mod solution;
