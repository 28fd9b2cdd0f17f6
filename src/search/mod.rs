//! Depth-first search over canonical board states.

mod solver;
mod visited;

pub use self::solver::{SolveStats, Solver};
pub use self::visited::{DefaultFilter, DenseBitmap, HashSetFilter, VisitedFilter};
