//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(try_from = "String", into = "String")]
pub enum Player {
    /// Player X (goes first, minimizes the score).
    X,
    /// Player O (goes second, maximizes the score).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl FromStr for Player {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(MoveError::IllegalPlayer(other.to_string())),
        }
    }
}

impl TryFrom<String> for Player {
    type Error = MoveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Player> for String {
    fn from(player: Player) -> Self {
        player.to_string()
    }
}

/// Contents of a single cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Mark {
    /// Unmarked cell.
    #[default]
    #[strum(to_string = ".")]
    Empty,
    /// Cell marked by X.
    X,
    /// Cell marked by O.
    O,
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl TryFrom<Mark> for Player {
    type Error = MoveError;

    fn try_from(mark: Mark) -> Result<Self, Self::Error> {
        match mark {
            Mark::X => Ok(Player::X),
            Mark::O => Ok(Player::O),
            Mark::Empty => Err(MoveError::IllegalPlayer(mark.to_string())),
        }
    }
}

/// A read view of one board cell: its coordinate and current mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Where the cell sits on the grid.
    pub coord: Coordinate,
    /// What the cell currently holds.
    pub mark: Mark,
}

impl Cell {
    /// Returns the player owning this cell, if it is marked.
    pub fn owner(&self) -> Option<Player> {
        Player::try_from(self.mark).ok()
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is the single owner of mark state. Cells are addressed
/// directly by [`Coordinate::index`], so there is no scanning to find one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Marks in row-major order (0-8).
    marks: [Mark; 9],
    /// Player expected to move next.
    turn: Player,
}

impl Board {
    /// Creates a new empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            marks: [Mark::Empty; 9],
            turn: Player::X,
        }
    }

    /// Marks `coord` for `player` and passes the turn to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the cell already carries a
    /// mark. The board is left untouched in that case.
    pub fn apply_move(&mut self, coord: Coordinate, player: Player) -> Result<(), MoveError> {
        let slot = &mut self.marks[coord.index()];
        if *slot != Mark::Empty {
            return Err(MoveError::CellOccupied(coord));
        }
        *slot = player.into();
        self.turn = player.opponent();
        Ok(())
    }

    /// Clears `coord` and hands the turn back to the player whose mark was removed.
    ///
    /// Meant for search backtracking: a caller that undoes moves it did not
    /// apply itself breaks the monotonic-board guarantee of a live game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellEmpty`] if there is no mark to remove.
    pub fn undo_move(&mut self, coord: Coordinate) -> Result<(), MoveError> {
        let slot = &mut self.marks[coord.index()];
        let owner = Player::try_from(*slot).map_err(|_| MoveError::CellEmpty(coord))?;
        *slot = Mark::Empty;
        self.turn = owner;
        Ok(())
    }

    /// Clears every cell and gives the move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.marks = [Mark::Empty; 9];
        self.turn = Player::X;
    }

    /// Returns the cell at `coord`.
    pub fn cell_at(&self, coord: Coordinate) -> Cell {
        Cell {
            coord,
            mark: self.mark_at(coord),
        }
    }

    /// Returns the mark at `coord`.
    pub fn mark_at(&self, coord: Coordinate) -> Mark {
        self.marks[coord.index()]
    }

    /// Iterates over all nine cells in row-major order.
    ///
    /// The iterator is `Clone`, so it can be restarted from any point.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + Clone + '_ {
        Coordinate::ALL.iter().map(move |&coord| self.cell_at(coord))
    }

    /// Iterates over the coordinates of unmarked cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + Clone + '_ {
        self.cells()
            .filter(|cell| cell.mark == Mark::Empty)
            .map(|cell| cell.coord)
    }

    /// Returns the player expected to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Overrides the player to move. Search uses this to restore its caller's view.
    pub(crate) fn set_turn(&mut self, turn: Player) {
        self.turn = turn;
    }

    /// Number of marked cells (0-9).
    pub fn marked_count(&self) -> usize {
        self.marks.iter().filter(|m| **m != Mark::Empty).count()
    }

    /// Returns a copy with every X and O swapped, turn included.
    #[instrument(skip(self))]
    pub fn mirrored(&self) -> Self {
        let mut marks = self.marks;
        for mark in &mut marks {
            *mark = match *mark {
                Mark::X => Mark::O,
                Mark::O => Mark::X,
                Mark::Empty => Mark::Empty,
            };
        }
        Self {
            marks,
            turn: self.turn.opponent(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders a 3-line grid; empty cells show their keypad number (1-9).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, cell) in self.cells().enumerate() {
            match cell.mark {
                Mark::Empty => write!(f, "{}", pos + 1)?,
                mark => write!(f, "{mark}")?,
            }
            if cell.coord.col() < 2 {
                f.write_str("|")?;
            } else if cell.coord.row() < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = MoveError;

    /// Parses nine cells written as `X`, `O`, or `.`/`_`/a digit for empty.
    ///
    /// Whitespace, `|` and grid separator lines are ignored, so the output of
    /// `Display` parses back. The side to move is X unless X has more marks.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut marks = Vec::with_capacity(9);
        for ch in s.chars() {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '_' | '1'..='9' => Mark::Empty,
                c if c.is_whitespace() || matches!(c, '|' | '+' | '-') => continue,
                other => {
                    return Err(MoveError::Unparseable(format!(
                        "unexpected character {other:?} in board"
                    )));
                }
            };
            marks.push(mark);
        }

        let marks: [Mark; 9] = marks.try_into().map_err(|found: Vec<Mark>| {
            MoveError::Unparseable(format!("expected 9 cells, found {}", found.len()))
        })?;

        let x_count = marks.iter().filter(|m| **m == Mark::X).count();
        let o_count = marks.iter().filter(|m| **m == Mark::O).count();
        let turn = if x_count > o_count { Player::O } else { Player::X };

        Ok(Self { marks, turn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.marked_count(), 0);
        assert_eq!(board.turn(), Player::X);
        assert!(board.cells().all(|c| c.mark == Mark::Empty));
    }

    #[test]
    fn test_apply_move_advances_turn() {
        let mut board = Board::new();
        board.apply_move(at(1, 1), Player::X).unwrap();
        assert_eq!(board.mark_at(at(1, 1)), Mark::X);
        assert_eq!(board.turn(), Player::O);
    }

    #[test]
    fn test_apply_move_on_marked_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        board.apply_move(at(0, 2), Player::X).unwrap();
        let before = board.clone();

        let result = board.apply_move(at(0, 2), Player::O);

        assert_eq!(result, Err(MoveError::CellOccupied(at(0, 2))));
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_restores_previous_board() {
        let mut board = Board::new();
        board.apply_move(at(0, 0), Player::X).unwrap();
        let before = board.clone();

        board.apply_move(at(2, 2), Player::O).unwrap();
        board.undo_move(at(2, 2)).unwrap();

        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_empty_cell_fails() {
        let mut board = Board::new();
        assert_eq!(
            board.undo_move(at(1, 2)),
            Err(MoveError::CellEmpty(at(1, 2)))
        );
    }

    #[test]
    fn test_cells_iterator_is_restartable() {
        let board: Board = "XO. ... ..X".parse().unwrap();
        let cells = board.cells();
        let first: Vec<_> = cells.clone().map(|c| c.mark).collect();
        let second: Vec<_> = cells.map(|c| c.mark).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
        assert_eq!(first[0], Mark::X);
        assert_eq!(first[1], Mark::O);
        assert_eq!(first[8], Mark::X);
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "X.O|.X.|O..".parse().unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered, "X|2|O\n-+-+-\n4|X|6\n-+-+-\nO|8|9");
        assert_eq!(rendered.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_infers_turn() {
        let x_to_move: Board = "XO.......".parse().unwrap();
        let o_to_move: Board = "X........".parse().unwrap();
        assert_eq!(x_to_move.turn(), Player::X);
        assert_eq!(o_to_move.turn(), Player::O);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(matches!(
            "XO".parse::<Board>(),
            Err(MoveError::Unparseable(_))
        ));
        assert!(matches!(
            "XO.Z.....".parse::<Board>(),
            Err(MoveError::Unparseable(_))
        ));
    }

    #[test]
    fn test_mirrored_swaps_marks_and_turn() {
        let board: Board = "X.O......".parse().unwrap();
        let mirrored = board.mirrored();
        assert_eq!(mirrored.mark_at(at(0, 0)), Mark::O);
        assert_eq!(mirrored.mark_at(at(0, 2)), Mark::X);
        assert_eq!(mirrored.turn(), board.turn().opponent());
        assert_eq!(mirrored.mirrored(), board);
    }

    #[test]
    fn test_empty_mark_is_not_a_player() {
        assert!(matches!(
            Player::try_from(Mark::Empty),
            Err(MoveError::IllegalPlayer(_))
        ));
        assert_eq!(Player::try_from(Mark::O), Ok(Player::O));
        assert!(matches!(
            "Z".parse::<Player>(),
            Err(MoveError::IllegalPlayer(_))
        ));
    }
}
