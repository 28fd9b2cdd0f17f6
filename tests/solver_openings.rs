//! End-to-end solver runs on known openings.

use marble_solitaire::board::{Board, Move};
use marble_solitaire::search::{HashSetFilter, Solver};
use marble_solitaire::solution::MoveDescription;
use rustc_hash::FxHashSet;

/// Replays a solution move by move, re-deriving every move from its
/// coordinates so each step is checked against the public validation
/// path, and returns the final board.
fn replay(start: Board, solution: &[Move]) -> Board {
    let mut board = start;
    for &m in solution {
        let description = MoveDescription::from(m);
        let from = (description.row, description.col);
        let to = description
            .direction
            .destination_from(from.0, from.1)
            .expect("solution move stays on the grid");
        let checked = board
            .move_between(from, to)
            .expect("solution move is legal when replayed");
        assert_eq!(checked, m);
        board = board.apply(checked);
    }
    board
}

#[test]
fn corner_opening_solves_to_one_marble() {
    let start = Board::with_empty_at(0, 2);
    let mut solver = Solver::with_filter(HashSetFilter::new());
    let solution = solver.solve(start);
    assert!(!solution.is_empty());
    assert_eq!(solution.len(), 35, "36 marbles take 35 jumps to reduce to 1");
    assert!(replay(start, &solution).has_won());
}

#[test]
fn row_one_opening_solves_to_one_marble() {
    let start = Board::with_empty_at(1, 3);
    let mut solver = Solver::with_filter(HashSetFilter::new());
    let solution = solver.solve(start);
    assert!(!solution.is_empty());
    assert!(replay(start, &solution).has_won());
}

// Only built where the host opted into the 16 GiB reservation; the
// (1,3) opening is the one expected to finish well under a minute on
// this backend.
#[cfg(feature = "dense-bitmap")]
#[test]
fn row_one_opening_solves_through_the_dense_bitmap() {
    use marble_solitaire::search::DenseBitmap;

    let start = Board::with_empty_at(1, 3);
    let mut solver = Solver::with_filter(DenseBitmap::new().unwrap());
    let solution = solver.solve(start);
    assert!(!solution.is_empty());
    assert!(replay(start, &solution).has_won());

    // Same search order either way, so the backends must agree.
    let fallback = Solver::with_filter(HashSetFilter::new()).solve(start);
    assert_eq!(solution, fallback);
}

#[test]
#[ignore = "full standard-opening search; tens of seconds"]
fn standard_opening_solves_to_one_marble() {
    let start = Board::standard_opening();
    let mut solver = Solver::with_filter(HashSetFilter::new());
    let solution = solver.solve(start);
    assert!(!solution.is_empty());
    assert!(replay(start, &solution).has_won());
}

#[test]
fn stranded_position_is_unsolvable() {
    // Two marbles with no neighbours: no jump will ever exist.
    let board = Board::from_pegs([(0, 2), (6, 4)]).unwrap();
    let mut solver = Solver::with_filter(HashSetFilter::new());
    assert!(solver.solve(board).is_empty());
    assert!(!solver.is_solvable(board));
}

#[test]
fn solutions_are_deterministic_across_runs() {
    let start = Board::with_empty_at(0, 2);
    let first = Solver::with_filter(HashSetFilter::new()).solve(start);
    let second = Solver::with_filter(HashSetFilter::new()).solve(start);
    let mut reused = Solver::with_filter(HashSetFilter::new());
    reused.solve(Board::with_empty_at(1, 3));
    let third = reused.solve(start);
    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn canonical_folding_reaches_fewer_states_than_raw_search() {
    let start = Board::standard_opening();
    let mut raw = FxHashSet::default();
    let mut canonical = FxHashSet::default();
    raw.insert(start.bits());
    canonical.insert(start.canonical().0.pack_index());

    let mut frontier = vec![start];
    let mut buf = Vec::new();
    for _ in 0..5 {
        let mut next_frontier = Vec::new();
        for board in frontier {
            buf.clear();
            board.list_legal_moves(&mut buf);
            for &m in &buf {
                let next = board.apply(m);
                canonical.insert(next.canonical().0.pack_index());
                if raw.insert(next.bits()) {
                    next_frontier.push(next);
                }
            }
        }
        frontier = next_frontier;
    }

    assert!(
        canonical.len() < raw.len(),
        "folding symmetries must shrink the visited set: {} vs {}",
        canonical.len(),
        raw.len()
    );
}
