//! The iterative depth-first solver.
//!
//! The solver walks canonical boards only: every successor is folded
//! through D4 before the visited check, which prunes close to a factor
//! of eight off the reachable state space (most positions have no
//! symmetry of their own). Legal moves are appended to one shared
//! buffer that grows on descent and is truncated back on every frame
//! pop, so the buffer is an arena that always mirrors the current DFS
//! path and the inner loop never allocates.

use crate::board::{Board, Move, Transform};

use super::visited::{DefaultFilter, VisitedFilter};

/// One node of the DFS path.
///
/// `board` is canonical. The window `[moves_start, move_end)` of the
/// shared buffer holds its legal moves; `move_index` is the cursor.
/// `transform` is the canonicalization step that produced `board` from
/// the parent's successor, and `incoming` is the move the parent played
/// to get here, expressed in the *parent's* canonical frame.
struct Frame {
    board: Board,
    move_index: usize,
    move_end: usize,
    moves_start: usize,
    transform: Transform,
    incoming: Option<Move>,
}

/// Counters from the most recent solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Canonical states expanded (frames pushed).
    pub nodes_expanded: u64,
    /// Successors skipped because their canonical form was already seen.
    pub duplicate_hits: u64,
}

const MOVE_BUFFER_CAPACITY: usize = 64;

/// Depth-first marble-solitaire solver.
///
/// Owns its visited filter, move buffer and frame stack, so repeated
/// [`Solver::solve`] calls reuse their capacity. The filter backend is a
/// compile-time choice; see [`super::DefaultFilter`].
pub struct Solver<F: VisitedFilter = DefaultFilter> {
    filter: F,
    moves: Vec<Move>,
    stack: Vec<Frame>,
    stats: SolveStats,
}

impl Solver<DefaultFilter> {
    pub fn new() -> Solver<DefaultFilter> {
        Solver::with_filter(DefaultFilter::default())
    }
}

impl Default for Solver<DefaultFilter> {
    fn default() -> Solver<DefaultFilter> {
        Solver::new()
    }
}

impl<F: VisitedFilter> Solver<F> {
    pub fn with_filter(filter: F) -> Solver<F> {
        Solver {
            filter,
            moves: Vec::with_capacity(MOVE_BUFFER_CAPACITY),
            stack: Vec::new(),
            stats: SolveStats::default(),
        }
    }

    /// Finds a jump sequence that takes `start` down to a single marble.
    ///
    /// The returned moves are expressed in `start`'s own coordinates and
    /// are legal in order from `start`. An empty vector means no
    /// solution exists, including the degenerate case of a board that
    /// has already won, which has nothing left to solve.
    pub fn solve(&mut self, start: Board) -> Vec<Move> {
        self.filter.clear();
        self.moves.clear();
        self.stack.clear();
        self.stats = SolveStats::default();

        let (canonical, transform) = start.canonical();
        canonical.list_legal_moves(&mut self.moves);
        self.stack.push(Frame {
            board: canonical,
            move_index: 0,
            move_end: self.moves.len(),
            moves_start: 0,
            transform,
            incoming: None,
        });
        self.stats.nodes_expanded += 1;

        loop {
            let Some(top) = self.stack.last_mut() else {
                return Vec::new();
            };

            if top.move_index >= top.move_end {
                let moves_start = top.moves_start;
                self.moves.truncate(moves_start);
                self.stack.pop();
                continue;
            }

            let m = self.moves[top.move_index];
            top.move_index += 1;

            let next = top.board.apply(m);
            let (canonical, transform) = next.canonical();

            if self.filter.test_and_set(canonical.pack_index()) {
                self.stats.duplicate_hits += 1;
                continue;
            }

            let moves_start = self.moves.len();
            canonical.list_legal_moves(&mut self.moves);
            let move_end = self.moves.len();
            let won = next.has_won();

            self.stack.push(Frame {
                board: canonical,
                move_index: moves_start,
                move_end,
                moves_start,
                transform,
                incoming: Some(m),
            });
            self.stats.nodes_expanded += 1;

            if won {
                return self.reconstruct();
            }
        }
    }

    /// Does any solution exist from `start`?
    pub fn is_solvable(&mut self, start: Board) -> bool {
        !self.solve(start).is_empty()
    }

    /// Counters from the most recent [`Solver::solve`] call.
    pub fn last_stats(&self) -> SolveStats {
        self.stats
    }

    /// Rebuilds the winning move sequence from the intact DFS stack.
    ///
    /// Frame `k`'s incoming move lives in the canonical frame of its
    /// parent, i.e. after the canonicalization transforms of frames
    /// `0..k` have been applied in order. Undoing means applying the
    /// inverses in reverse order, most recent transform first.
    fn reconstruct(&self) -> Vec<Move> {
        let mut solution = Vec::with_capacity(self.stack.len());
        for (k, frame) in self.stack.iter().enumerate().skip(1) {
            let Some(mut m) = frame.incoming else {
                continue;
            };
            for parent in self.stack[..k].iter().rev() {
                m = m.transformed(parent.transform.inverse());
            }
            solution.push(m);
        }
        solution
    }
}
