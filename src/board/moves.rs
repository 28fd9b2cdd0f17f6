//! The static jump catalogue and the [`Move`] handle type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::transform::{self, Transform};
use super::{bit_index, coords_of, is_playable, NUM_COLS, NUM_ROWS};

/// A jump-capture, stored as the pair of masks needed to play it.
///
/// `set_mask` has the single destination bit; `clear_mask` has the origin
/// bit and the jumped-over bit. Only the board module constructs moves, so
/// the two masks are consistent by construction. The move is legal on a
/// board `b` iff `b & clear_mask == clear_mask` and `b & set_mask == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub(crate) set_mask: u64,
    pub(crate) clear_mask: u64,
}

/// One of the four jump directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Landing cell of a jump from `(row, col)`, or `None` when the jump
    /// would leave the grid.
    pub fn destination_from(self, row: usize, col: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Up => row.checked_sub(2).map(|row| (row, col)),
            Direction::Down => row
                .checked_add(2)
                .filter(|&row| row < NUM_ROWS)
                .map(|row| (row, col)),
            Direction::Left => col.checked_sub(2).map(|col| (row, col)),
            Direction::Right => col
                .checked_add(2)
                .filter(|&col| col < NUM_COLS)
                .map(|col| (row, col)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

impl Move {
    /// Cell of the marble that jumps.
    pub fn origin(&self) -> (usize, usize) {
        let dest = self.destination();
        let low = self.clear_mask & self.clear_mask.wrapping_neg();
        let (row, col) = coords_of(low.trailing_zeros());
        // The origin is two cells from the destination, the jumped marble
        // only one.
        if row.abs_diff(dest.0) + col.abs_diff(dest.1) == 2 {
            (row, col)
        } else {
            coords_of((self.clear_mask ^ low).trailing_zeros())
        }
    }

    /// Cell the marble lands on.
    #[inline]
    pub fn destination(&self) -> (usize, usize) {
        coords_of(self.set_mask.trailing_zeros())
    }

    /// Direction the marble jumps in.
    pub fn direction(&self) -> Direction {
        let (from_row, from_col) = self.origin();
        let (to_row, to_col) = self.destination();
        if to_row < from_row {
            Direction::Up
        } else if to_row > from_row {
            Direction::Down
        } else if to_col < from_col {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// The same jump seen through `t`: both masks are permuted the way
    /// the transform permutes board cells. To map a move out of a
    /// canonical frame, pass the inverse of the transform that built the
    /// frame.
    #[inline]
    pub fn transformed(self, t: Transform) -> Move {
        Move {
            set_mask: transform::apply_to_bits(self.set_mask, t),
            clear_mask: transform::apply_to_bits(self.clear_mask, t),
        }
    }
}

pub(crate) const CATALOGUE_LEN: usize = 92;

/// Every geometrically possible jump on the cross, in a fixed order:
/// row-major over source cells, directions up, down, left, right.
/// Computed once at compile time; move listing preserves this order so
/// solver output is reproducible.
pub(crate) static CATALOGUE: [Move; CATALOGUE_LEN] = build_catalogue();

const fn jump(
    from: (usize, usize),
    over: (usize, usize),
    to: (usize, usize),
) -> Move {
    Move {
        set_mask: 1 << bit_index(to.0, to.1),
        clear_mask: (1 << bit_index(from.0, from.1)) | (1 << bit_index(over.0, over.1)),
    }
}

const fn build_catalogue() -> [Move; CATALOGUE_LEN] {
    let mut moves = [Move {
        set_mask: 0,
        clear_mask: 0,
    }; CATALOGUE_LEN];
    let mut n = 0;
    let mut r = 0;
    while r < NUM_ROWS {
        let mut c = 0;
        while c < NUM_COLS {
            if is_playable(r, c) {
                if r >= 2 && is_playable(r - 1, c) && is_playable(r - 2, c) {
                    moves[n] = jump((r, c), (r - 1, c), (r - 2, c));
                    n += 1;
                }
                if r + 2 < NUM_ROWS && is_playable(r + 1, c) && is_playable(r + 2, c) {
                    moves[n] = jump((r, c), (r + 1, c), (r + 2, c));
                    n += 1;
                }
                if c >= 2 && is_playable(r, c - 1) && is_playable(r, c - 2) {
                    moves[n] = jump((r, c), (r, c - 1), (r, c - 2));
                    n += 1;
                }
                if c + 2 < NUM_COLS && is_playable(r, c + 1) && is_playable(r, c + 2) {
                    moves[n] = jump((r, c), (r, c + 1), (r, c + 2));
                    n += 1;
                }
            }
            c += 1;
        }
        r += 1;
    }
    assert!(n == CATALOGUE_LEN);
    moves
}
