use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ConfigError, ParsePositionError};

/// Cell code used in snapshots for an empty square.
pub const CELL_EMPTY: u8 = 0;
/// Cell code used in snapshots for a black piece.
pub const PLAYER_BLACK: u8 = 1;
/// Cell code used in snapshots for a white piece.
pub const PLAYER_WHITE: u8 = 2;

/// One of the two players, and the color of their pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Returns the other player.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The cell holding one of this player's pieces.
    pub fn to_cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    /// Snapshot code: 1 for black, 2 for white.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => PLAYER_BLACK,
            Color::White => PLAYER_WHITE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `B`, `W`, `Black` or `White` in any case.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(ColorError::new(s)),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<Cell> for Color {
    type Error = ColorError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Black => Ok(Color::Black),
            Cell::White => Ok(Color::White),
            Cell::Empty => Err(ColorError::new("empty")),
        }
    }
}

/// Contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Snapshot code: 0 for empty, 1 for black, 2 for white.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => CELL_EMPTY,
            Cell::Black => PLAYER_BLACK,
            Cell::White => PLAYER_WHITE,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        color.to_cell()
    }
}

/// Rule deciding the winner from the final piece counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum WinCriterion {
    #[default]
    MostPieces,
    FewestPieces,
}

/// Accepts `M`, `Most`, `MostPieces`, `F`, `Fewest` or `FewestPieces` in any case.
impl FromStr for WinCriterion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "most" | "mostpieces" => Ok(WinCriterion::MostPieces),
            "f" | "fewest" | "fewestpieces" => Ok(WinCriterion::FewestPieces),
            _ => Err(ConfigError::Criterion(s.to_string())),
        }
    }
}

impl TryFrom<String> for WinCriterion {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A board coordinate, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Formats as column letter plus 1-based row, e.g. `c4` for (3, 2).
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = u8::try_from(self.col)
            .ok()
            .filter(|c| *c < 26)
            .map(|c| char::from(b'a' + c))
            .ok_or(fmt::Error)?;
        write!(f, "{}{}", col, self.row + 1)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_char = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(|| ParsePositionError::new(s))?
            .to_ascii_lowercase();
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| ParsePositionError::new(s))?;
        if row == 0 {
            return Err(ParsePositionError::new(s));
        }

        Ok(Self {
            row: row - 1,
            col: (col_char as u8 - b'a') as usize,
        })
    }
}

/// Public game state handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub rows: usize,
    pub columns: usize,
    /// Row-major cell codes: 0 empty, 1 black, 2 white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: usize,
    pub white_count: usize,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the opponent had no reply to the previous move and
    ///   the turn returned to its mover.
    /// - `false` otherwise, including before any move.
    pub is_pass: bool,
    /// Positions flipped by the previous move, empty before any move.
    pub flipped: Vec<Position>,
}

/// Final (or provisional) result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 0 for a tie, otherwise the winner's color code.
    pub winner: u8,
    pub black_count: usize,
    pub white_count: usize,
}
