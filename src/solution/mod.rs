//! Textual move descriptions and JSON solve reports.
//!
//! The interchange form of a move is "`<row> <col> <direction>`": the
//! 0-indexed cell of the marble that jumps, plus one of `up`, `down`,
//! `left`, `right`. Parsing and printing round-trip exactly. A
//! [`SolveReport`] packages a whole solution for saving and replaying.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Direction, Move};

#[derive(Debug)]
pub enum SolutionError {
    /// A textual move that does not follow "`<row> <col> <direction>`".
    ParseMove {
        input: String,
        reason: &'static str,
    },
    Io {
        path: String,
        error: String,
    },
    Format {
        error: String,
    },
}

impl fmt::Display for SolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionError::ParseMove { input, reason } => {
                write!(f, "cannot parse move {input:?}: {reason}")
            }
            SolutionError::Io { path, error } => write!(f, "io error for {path}: {error}"),
            SolutionError::Format { error } => write!(f, "malformed report: {error}"),
        }
    }
}

impl std::error::Error for SolutionError {}

fn parse_error(input: &str, reason: &'static str) -> SolutionError {
    SolutionError::ParseMove {
        input: input.to_string(),
        reason,
    }
}

/// A move in user coordinates: the jumping marble's cell and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescription {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl From<Move> for MoveDescription {
    fn from(m: Move) -> MoveDescription {
        let (row, col) = m.origin();
        MoveDescription {
            row,
            col,
            direction: m.direction(),
        }
    }
}

impl fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.row, self.col, self.direction)
    }
}

impl FromStr for MoveDescription {
    type Err = SolutionError;

    fn from_str(s: &str) -> Result<MoveDescription, SolutionError> {
        let mut parts = s.split_whitespace();
        let (Some(row), Some(col), Some(dir)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_error(s, "expected `<row> <col> <direction>`"));
        };
        if parts.next().is_some() {
            return Err(parse_error(s, "trailing input after the direction"));
        }
        let row: usize = row
            .parse()
            .map_err(|_| parse_error(s, "row is not a number"))?;
        let col: usize = col
            .parse()
            .map_err(|_| parse_error(s, "column is not a number"))?;
        if row > 6 || col > 6 {
            return Err(parse_error(s, "row and column must be within 0..=6"));
        }
        let direction = match dir {
            "up" => Direction::Up,
            "down" => Direction::Down,
            "left" => Direction::Left,
            "right" => Direction::Right,
            _ => return Err(parse_error(s, "direction must be up, down, left or right")),
        };
        Ok(MoveDescription {
            row,
            col,
            direction,
        })
    }
}

/// A saved solve: which opening, which moves, how long it took.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// Vacancy of the starting board, `[row, col]`.
    pub opening: [usize; 2],
    pub move_count: usize,
    pub moves: Vec<MoveDescription>,
    pub elapsed_secs: f64,
}

/// Writes a report as pretty JSON.
pub fn write_json(path: &Path, report: &SolveReport) -> Result<(), SolutionError> {
    let file = File::create(path).map_err(|e| SolutionError::Io {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), report).map_err(|e| {
        SolutionError::Format {
            error: e.to_string(),
        }
    })
}

/// Reads a report written by [`write_json`].
pub fn read_json(path: &Path) -> Result<SolveReport, SolutionError> {
    let file = File::open(path).map_err(|e| SolutionError::Io {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| SolutionError::Format {
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn display_and_parse_round_trip() {
        let text = "3 0 right";
        let parsed: MoveDescription = text.parse().unwrap();
        assert_eq!(
            parsed,
            MoveDescription {
                row: 3,
                col: 0,
                direction: Direction::Right,
            }
        );
        assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in [
            "",
            "3 0",
            "3 0 sideways",
            "3 0 right now",
            "seven 0 up",
            "3 9 left",
            "9 3 up",
        ] {
            assert!(bad.parse::<MoveDescription>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn parse_accepts_loose_whitespace() {
        let parsed: MoveDescription = "  4\t2   up ".parse().unwrap();
        assert_eq!(parsed.to_string(), "4 2 up");
    }

    #[test]
    fn descriptions_match_board_moves() {
        // "3 0 right" is the jump that fills the (3,2) vacancy.
        let board = Board::with_empty_at(3, 2);
        let m = board.move_between((3, 0), (3, 2)).unwrap();
        let description = MoveDescription::from(m);
        assert_eq!(description.to_string(), "3 0 right");
    }

    #[test]
    fn report_survives_a_save_and_load() {
        let report = SolveReport {
            opening: [0, 2],
            move_count: 2,
            moves: vec![
                "2 2 up".parse().unwrap(),
                "2 4 left".parse().unwrap(),
            ],
            elapsed_secs: 0.25,
        };
        let path = std::env::temp_dir().join("marble_solitaire_report_test.json");
        write_json(&path, &report).unwrap();
        let loaded = read_json(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.opening, report.opening);
        assert_eq!(loaded.move_count, report.move_count);
        assert_eq!(loaded.moves, report.moves);
    }
}
