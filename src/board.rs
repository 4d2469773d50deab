use std::fmt;

use crate::error::{ConfigError, MoveError};
use crate::types::{Cell, Color, Position};

/// Smallest allowed row or column count.
pub const MIN_SIZE: usize = 4;
/// Largest allowed row or column count.
pub const MAX_SIZE: usize = 16;

/// N, NE, E, SE, S, SW, W, NW as (row, col) steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Rectangular Othello grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates the starting board: the four center cells are filled, with
    /// `nw_corner` on the NW/SE diagonal and its opponent on NE/SW.
    pub fn new(rows: usize, columns: usize, nw_corner: Color) -> Result<Self, ConfigError> {
        if !is_legal_dimension(rows) || !is_legal_dimension(columns) {
            return Err(ConfigError::BoardSize { rows, columns });
        }

        let mut board = Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        };

        let nw_row = rows / 2 - 1;
        let nw_col = columns / 2 - 1;
        let diagonal = nw_corner.to_cell();
        let anti_diagonal = nw_corner.opponent().to_cell();

        board.set(nw_row, nw_col, diagonal);
        board.set(nw_row + 1, nw_col + 1, diagonal);
        board.set(nw_row, nw_col + 1, anti_diagonal);
        board.set(nw_row + 1, nw_col, anti_diagonal);

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Returns every opponent piece `color` would flip by playing at
    /// `(row, col)`. Empty when the target is off the board, occupied or
    /// captures nothing.
    pub fn flips(&self, row: usize, col: usize, color: Color) -> Vec<Position> {
        if self.get(row, col) != Some(Cell::Empty) {
            return Vec::new();
        }

        let me = color.to_cell();
        let opp = color.opponent().to_cell();
        let mut flips = Vec::new();

        for (dr, dc) in DIRECTIONS {
            let mut line = Vec::new();
            let mut next = self.step(row, col, dr, dc);

            while let Some((r, c)) = next {
                let cell = self.cells[self.index(r, c)];
                if cell == opp {
                    line.push(Position::new(r, c));
                } else {
                    if cell == me {
                        flips.append(&mut line);
                    }
                    break;
                }

                next = self.step(r, c, dr, dc);
            }
        }

        flips
    }

    /// Checks a move for `color`, returning the pieces it would flip.
    pub fn check_move(&self, row: usize, col: usize, color: Color) -> Result<Vec<Position>, MoveError> {
        match self.get(row, col) {
            None => Err(MoveError::OutOfBounds { row, col }),
            Some(Cell::Black | Cell::White) => Err(MoveError::Occupied { row, col }),
            Some(Cell::Empty) => {
                let flips = self.flips(row, col, color);
                if flips.is_empty() {
                    Err(MoveError::NoCaptures { row, col })
                } else {
                    Ok(flips)
                }
            }
        }
    }

    pub fn is_legal(&self, row: usize, col: usize, color: Color) -> bool {
        !self.flips(row, col, color).is_empty()
    }

    /// Returns the legal targets for `color` in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        self.positions()
            .filter(|pos| self.is_legal(pos.row, pos.col, color))
            .collect()
    }

    /// Stops at the first legal target found.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.positions()
            .any(|pos| self.is_legal(pos.row, pos.col, color))
    }

    /// Places one piece and flips captured pieces.
    /// Returns the flipped positions. Returns an empty list, leaving the
    /// board untouched, when the move is illegal.
    pub fn place(&mut self, row: usize, col: usize, color: Color) -> Vec<Position> {
        let flips = self.flips(row, col, color);
        if flips.is_empty() {
            return flips;
        }

        let me = color.to_cell();
        self.set(row, col, me);
        for pos in &flips {
            self.set(pos.row, pos.col, me);
        }

        flips
    }

    /// Returns `(black_count, white_count)` from a full scan.
    pub fn count(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(black, white), cell| match cell {
                Cell::Black => (black + 1, white),
                Cell::White => (black, white + 1),
                Cell::Empty => (black, white),
            })
    }

    pub fn empty_count(&self) -> usize {
        let (black, white) = self.count();
        self.cells.len() - black - white
    }

    /// Converts the board to row-major codes where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.code()).collect()
    }

    fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| Position::new(row, col)))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    fn step(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.in_bounds(r, c).then_some((r, c))
    }

    /// Builds a board from rows of `-`, `B` and `W`, skipping size checks.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let columns = rows.first().map_or(0, |row| row.len());
        let cells = rows
            .iter()
            .flat_map(|row| {
                assert_eq!(row.len(), columns, "ragged test board");
                row.chars().map(|ch| match ch {
                    'B' => Cell::Black,
                    'W' => Cell::White,
                    '-' => Cell::Empty,
                    other => panic!("unexpected board character {other:?}"),
                })
            })
            .collect();

        Self {
            rows: rows.len(),
            columns,
            cells,
        }
    }
}

/// Renders a labelled grid, columns `a..` across and rows `1..` down.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.columns {
            let label = u8::try_from(col).map_err(|_| fmt::Error)?;
            write!(f, " {}", char::from(b'a' + label))?;
        }

        for row in 0..self.rows {
            write!(f, "\n{:>2}", row + 1)?;
            for col in 0..self.columns {
                write!(f, " {}", self.cells[self.index(row, col)].symbol())?;
            }
        }

        Ok(())
    }
}

/// Even and within `MIN_SIZE..=MAX_SIZE`.
pub(crate) fn is_legal_dimension(n: usize) -> bool {
    (MIN_SIZE..=MAX_SIZE).contains(&n) && n % 2 == 0
}
