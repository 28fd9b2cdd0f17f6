//! Stateful orchestration for an interactive front end.
//!
//! A [`Game`] couples a board with its move history and an owned solver,
//! exposing exactly what a command loop needs: validated coordinate
//! moves, undo, win/stuck queries, rendering, and solver-backed hints.
//! Bad input is reported as `false` and never panics.

use std::io;

use crate::board::{Board, Direction, Move};
use crate::search::{DefaultFilter, Solver};
use crate::solution::MoveDescription;

pub struct Game {
    board: Board,
    history: Vec<Move>,
    solver: Solver<DefaultFilter>,
}

impl Game {
    /// Game on the standard opening (vacancy at (2,3)).
    pub fn new() -> Game {
        Game::from_board(Board::standard_opening())
    }

    /// Game with the vacancy at `(row, col)`; a non-playable coordinate
    /// falls back to the standard opening.
    pub fn with_opening(row: usize, col: usize) -> Game {
        Game::from_board(Board::with_empty_at(row, col))
    }

    /// Game resumed from an arbitrary position, with an empty history.
    pub fn from_position(board: Board) -> Game {
        Game::from_board(board)
    }

    fn from_board(board: Board) -> Game {
        Game {
            board,
            history: Vec::new(),
            solver: Solver::new(),
        }
    }

    /// Restarts on a fresh single-vacancy board, dropping the history.
    pub fn reset_with_empty(&mut self, row: usize, col: usize) {
        self.board = Board::with_empty_at(row, col);
        self.history.clear();
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn peg_count(&self) -> u32 {
        self.board.peg_count()
    }

    #[inline]
    pub fn has_won(&self) -> bool {
        self.board.has_won()
    }

    #[inline]
    pub fn has_any_legal_move(&self) -> bool {
        self.board.has_any_legal_move()
    }

    /// Moves played since the last reset.
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    pub fn render<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        self.board.render(w)
    }

    /// Would jumping the marble at `(row, col)` two cells towards `dir`
    /// be legal right now?
    pub fn is_valid_move(&self, row: usize, col: usize, dir: Direction) -> bool {
        match dir.destination_from(row, col) {
            Some((to_row, to_col)) => self.board.is_valid_move(row, col, to_row, to_col),
            None => false,
        }
    }

    /// Plays the jump if it is legal; reports whether it was played.
    pub fn try_make_move(&mut self, row: usize, col: usize, dir: Direction) -> bool {
        let Some((to_row, to_col)) = dir.destination_from(row, col) else {
            return false;
        };
        match self.board.move_between((row, col), (to_row, to_col)) {
            Ok(m) => {
                self.board = self.board.apply(m);
                self.history.push(m);
                true
            }
            Err(_) => false,
        }
    }

    /// Takes back the most recent move; false when there is none.
    pub fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some(m) => {
                self.board = self.board.undo(m);
                true
            }
            None => false,
        }
    }

    /// First move of a solution from the current board, if one exists.
    ///
    /// Solves the whole board, so this can take seconds on an early
    /// position.
    pub fn best_next_move(&mut self) -> Option<MoveDescription> {
        self.solver
            .solve(self.board)
            .first()
            .map(|&m| MoveDescription::from(m))
    }

    /// Complete solution from the current board; empty if stuck.
    pub fn full_solution(&mut self) -> Vec<MoveDescription> {
        self.solver
            .solve(self.board)
            .into_iter()
            .map(MoveDescription::from)
            .collect()
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
