use std::fmt;

use super::token::Token;
use crate::error::MoveError;

pub const DEFAULT_NUM_COLUMNS: usize = 7;
pub const DEFAULT_NUM_ROWS: usize = 6;
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// Classification of the board after a move.
///
/// Recomputed fresh by every [`Board::drop_token`] call and never stored:
/// the engine keeps no game-over latch, so the outcome is advisory and the
/// caller decides when to stop feeding moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Draw,
    Winner(Token),
}

/// The four axes a just-placed token can complete a run along.
#[derive(Debug, Clone, Copy)]
enum Axis {
    Vertical,
    Horizontal,
    UpRight,
    UpLeft,
}

impl Axis {
    const ALL: [Axis; 4] = [Axis::Vertical, Axis::Horizontal, Axis::UpRight, Axis::UpLeft];

    /// The two opposite unit steps of this axis, as (column, row) deltas.
    fn steps(self) -> [(isize, isize); 2] {
        match self {
            Axis::Vertical => [(0, -1), (0, 1)],
            Axis::Horizontal => [(-1, 0), (1, 0)],
            Axis::UpRight => [(-1, -1), (1, 1)],
            Axis::UpLeft => [(1, -1), (-1, 1)],
        }
    }
}

/// A gravity board: one token stack per column, fixed capacity.
///
/// Row 0 is the bottom; a dropped token lands on its column's current fill
/// height. Because a stack only ever holds placed tokens, the gravity
/// invariant (no floating tokens, no gaps) holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Vec<Token>>,
    num_rows: usize,
    win_length: usize,
}

impl Board {
    /// Create an empty board. Zero-sized dimensions are legal; such a board
    /// is trivially full and rejects every drop.
    pub fn new(num_columns: usize, num_rows: usize, win_length: usize) -> Self {
        Board {
            columns: (0..num_columns).map(|_| Vec::with_capacity(num_rows)).collect(),
            num_rows,
            win_length,
        }
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Drop a token into a column and classify the resulting position.
    ///
    /// This is the only mutation path. A rejected drop leaves the board
    /// untouched: validation happens before the token is pushed.
    pub fn drop_token(&mut self, token: Token, column_index: usize) -> Result<GameOutcome, MoveError> {
        let row_index = self.place(column_index, token)?;
        if self.is_winning_move(token, column_index, row_index) {
            Ok(GameOutcome::Winner(token))
        } else if self.is_full() {
            Ok(GameOutcome::Draw)
        } else {
            Ok(GameOutcome::Ongoing)
        }
    }

    /// Push a token onto a column's stack, returning the row it landed in
    /// (the column's fill height before the push).
    fn place(&mut self, column_index: usize, token: Token) -> Result<usize, MoveError> {
        let num_rows = self.num_rows;
        let column = self
            .columns
            .get_mut(column_index)
            .ok_or(MoveError::InvalidColumnIndex(column_index))?;
        if column.len() >= num_rows {
            return Err(MoveError::ColumnFull(column_index));
        }
        column.push(token);
        Ok(column.len() - 1)
    }

    /// Get the token at a cell, or `None` if the cell is unfilled.
    pub fn get(&self, column_index: usize, row_index: usize) -> Result<Option<Token>, MoveError> {
        let column = self
            .columns
            .get(column_index)
            .ok_or(MoveError::InvalidColumnIndex(column_index))?;
        if row_index >= self.num_rows {
            return Err(MoveError::InvalidRowIndex(row_index));
        }
        Ok(column.get(row_index).copied())
    }

    /// Current number of tokens in a column; also the row the next drop
    /// into it would land in.
    pub fn column_height(&self, column_index: usize) -> Result<usize, MoveError> {
        self.columns
            .get(column_index)
            .map(Vec::len)
            .ok_or(MoveError::InvalidColumnIndex(column_index))
    }

    /// Check if a column is at capacity. Out-of-range columns report full.
    pub fn is_column_full(&self, column_index: usize) -> bool {
        match self.columns.get(column_index) {
            Some(column) => column.len() >= self.num_rows,
            None => true,
        }
    }

    /// Check if every column is at capacity. A board with zero columns or
    /// zero rows is trivially full.
    pub fn is_full(&self) -> bool {
        self.columns.iter().all(|column| column.len() >= self.num_rows)
    }

    /// Check if the token just placed at (column_index, row_index) completes
    /// a run of at least `win_length` along any axis.
    fn is_winning_move(&self, token: Token, column_index: usize, row_index: usize) -> bool {
        Axis::ALL.iter().any(|axis| {
            let [toward, away] = axis.steps();
            1 + self.count_matching(token, column_index, row_index, toward)
                + self.count_matching(token, column_index, row_index, away)
                >= self.win_length
        })
    }

    /// Count consecutive tokens matching `token` outward from
    /// (column_index, row_index) exclusive, stepping by the (column, row)
    /// delta, stopping at the first off-board, unfilled, or non-matching
    /// cell.
    ///
    /// Stacks hold only placed tokens, so a step above a column's fill
    /// height reads `None` and stops the count: an unfilled cell never
    /// matches, even when it is within `num_rows`. This also makes the
    /// upward vertical count 0 for free, since the placed token is always
    /// its column's top.
    fn count_matching(
        &self,
        token: Token,
        column_index: usize,
        row_index: usize,
        (column_step, row_step): (isize, isize),
    ) -> usize {
        let mut count = 0;
        let mut column = column_index as isize + column_step;
        let mut row = row_index as isize + row_step;
        while column >= 0 && (column as usize) < self.columns.len() && row >= 0 {
            match self.columns[column as usize].get(row as usize) {
                Some(&candidate) if candidate == token => count += 1,
                _ => break,
            }
            column += column_step;
            row += row_step;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_COLUMNS, DEFAULT_NUM_ROWS, DEFAULT_WIN_LENGTH)
    }
}

impl fmt::Display for Board {
    /// Rows top-down, each cell as `| X ` with a space for unfilled cells,
    /// closed by a boundary line of `-` of length `num_columns * 4 + 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.columns.is_empty() {
            for row in (0..self.num_rows).rev() {
                for column in &self.columns {
                    let cell = column.get(row).map_or(' ', |token| token.char_value());
                    write!(f, "| {} ", cell)?;
                }
                writeln!(f, "|")?;
            }
        }
        writeln!(f, "{}", "-".repeat(self.columns.len() * 4 + 1))
    }
}
