//! Board representation, move validation, and win detection.
//!
//! ## Layout
//!
//! Nine cells in row-major order: index 0 is the top-left corner, index 8
//! the bottom-right (`row = index / 3`, `col = index % 3`). `Board` is
//! `Copy` (nine one-byte cells), so search code takes trial copies via
//! [`Board::with_move`] instead of mutating and undoing.
//!
//! ## Win detection
//!
//! The eight winning lines are fixed in [`LINES`]: rows, then columns,
//! then diagonals. [`Board::winner`] returns the first completed line in
//! that scan order, so even boards that could never occur in play (two
//! complete lines for different players) get a deterministic answer
//! instead of a panic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Cell, Player};

/// The eight winning lines in scan order: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A rejected move.
///
/// Rejections are recoverable: the game is left exactly as it was, and
/// callers may simply drop the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidMove {
    /// Cell index outside `0..9`.
    OutOfRange(usize),
    /// Cell already claimed.
    Occupied(usize),
    /// No game mode selected yet.
    ModeNotSelected,
    /// The game already ended.
    GameOver,
    /// A computer reply is pending; human input is locked out.
    AwaitingComputer,
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfRange(index) => write!(f, "cell index {} out of range", index),
            InvalidMove::Occupied(index) => write!(f, "cell {} is already occupied", index),
            InvalidMove::ModeNotSelected => write!(f, "no game mode selected"),
            InvalidMove::GameOver => write!(f, "the game is over"),
            InvalidMove::AwaitingComputer => write!(f, "waiting for the computer to move"),
        }
    }
}

impl std::error::Error for InvalidMove {}

/// The 3x3 board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// A board with the given cells, row-major.
    #[must_use]
    pub const fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// The cell at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All nine cells, row-major.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of claimed cells.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether no cell is claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Whether every cell is claimed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indices of unclaimed cells, in ascending order.
    ///
    /// Empty exactly when the board is full. All move generation in the
    /// crate goes through this method, so search sweeps and random picks
    /// see the same ordering.
    #[must_use]
    pub fn available_moves(&self) -> SmallVec<[usize; 9]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Place `player`'s mark at `index`.
    ///
    /// On rejection the board is untouched.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), InvalidMove> {
        match self.cells.get(index) {
            None => Err(InvalidMove::OutOfRange(index)),
            Some(cell) if !cell.is_empty() => Err(InvalidMove::Occupied(index)),
            Some(_) => {
                self.cells[index] = player.cell();
                Ok(())
            }
        }
    }

    /// A copy of this board with `player`'s mark at `index`.
    ///
    /// The trial-move primitive for search: the receiver is never
    /// modified.
    pub fn with_move(&self, index: usize, player: Player) -> Result<Board, InvalidMove> {
        let mut next = *self;
        next.apply_move(index, player)?;
        Ok(next)
    }

    /// The winner, if any line is complete.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|(player, _)| player)
    }

    /// The winner together with the indices of the completed line.
    ///
    /// Lines are checked in [`LINES`] order and the first complete one
    /// wins.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Player, [usize; 3])> {
        for line in LINES {
            let [a, b, c] = line;
            if let Some(player) = self.cells[a].player() {
                if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] {
                    return Some((player, line));
                }
            }
        }
        None
    }
}

impl std::fmt::Display for Board {
    /// Render as a 3x3 grid, `.` for empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row * 3 + col])?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Failure to parse a board from its text form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    /// A character other than `X`, `O`, `.`, or whitespace.
    BadSymbol(char),
    /// Fewer or more than nine cell symbols.
    BadLength(usize),
}

impl std::fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBoardError::BadSymbol(symbol) => write!(f, "bad cell symbol {:?}", symbol),
            ParseBoardError::BadLength(count) => {
                write!(f, "expected 9 cell symbols, found {}", count)
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the [`Display`](std::fmt::Display) form back: `X`, `O`, or
    /// `.` per cell, whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for symbol in s.chars().filter(|symbol| !symbol.is_whitespace()) {
            match symbol {
                '.' => cells.push(Cell::Empty),
                'X' => cells.push(Cell::X),
                'O' => cells.push(Cell::O),
                other => return Err(ParseBoardError::BadSymbol(other)),
            }
        }
        let count = cells.len();
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|_| ParseBoardError::BadLength(count))?;
        Ok(Board { cells })
    }
}
