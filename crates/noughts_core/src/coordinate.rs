//! Grid coordinates for tic-tac-toe moves.

use super::action::MoveError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A cell address on the 3x3 board.
///
/// A `Coordinate` can only be built with `row` and `col` in `0..=2`, so
/// [`Coordinate::index`] is always a valid row-major board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::at(0, 0),
        Coordinate::at(0, 1),
        Coordinate::at(0, 2),
        Coordinate::at(1, 0),
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
        Coordinate::at(2, 0),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
    ];

    /// Creates a coordinate, validating that it lies on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if `row` or `col` exceeds 2.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self::at(row as u8, col as u8))
    }

    /// Unchecked constructor for the fixed tables in this crate.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row (0 = top).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0 = left).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// Creates a coordinate from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Coordinate {
    type Err = MoveError;

    /// Accepts `"row,col"`, `"row col"`, or a single keypad digit `1`-`9`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || MoveError::Unparseable(format!("not a coordinate: {s:?}"));
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [digit] => {
                let n: usize = digit.parse().map_err(|_| unparseable())?;
                n.checked_sub(1)
                    .and_then(Self::from_index)
                    .ok_or_else(unparseable)
            }
            [row, col] => {
                let row: usize = row.parse().map_err(|_| unparseable())?;
                let col: usize = col.parse().map_err(|_| unparseable())?;
                Self::new(row, col)
            }
            _ => Err(unparseable()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, coord) in Coordinate::ALL.iter().enumerate() {
            assert_eq!(coord.index(), i);
            assert_eq!(Coordinate::from_index(i), Some(*coord));
        }
        assert_eq!(Coordinate::from_index(9), None);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(
            Coordinate::new(3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            Coordinate::new(0, 7),
            Err(MoveError::OutOfBounds { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_parse_forms() {
        let expected = Coordinate::new(1, 2).unwrap();
        assert_eq!("1,2".parse::<Coordinate>(), Ok(expected));
        assert_eq!(" 1 2 ".parse::<Coordinate>(), Ok(expected));
        assert_eq!("6".parse::<Coordinate>(), Ok(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "0".parse::<Coordinate>(),
            Err(MoveError::Unparseable(_))
        ));
        assert!(matches!(
            "a,b".parse::<Coordinate>(),
            Err(MoveError::Unparseable(_))
        ));
        assert!(matches!(
            "3,3".parse::<Coordinate>(),
            Err(MoveError::OutOfBounds { .. })
        ));
    }
}
