/// A color token that names neither Black nor White.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color `{token}`: expected Black or White")]
pub struct ColorError {
    pub token: String,
}

impl ColorError {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Errors that prevent a game from being constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid board size {rows}x{columns}: rows and columns must be even and between 4 and 16")]
    BoardSize { rows: usize, columns: usize },

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("invalid win criterion `{0}`: expected Most or Fewest")]
    Criterion(String),
}

/// Errors returned when a move is rejected. The game is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("({row}, {col}) captures no pieces")]
    NoCaptures { row: usize, col: usize },
}

/// Cell notation that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid position `{0}`: expected a column letter and a row number like `c4`")]
pub struct ParsePositionError(String);

impl ParsePositionError {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

/// Any error the engine can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("color error: {0}")]
    Color(#[from] ColorError),

    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_error_display() {
        let err = ConfigError::BoardSize {
            rows: 5,
            columns: 8,
        };
        assert_eq!(
            err.to_string(),
            "invalid board size 5x8: rows and columns must be even and between 4 and 16"
        );
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::Occupied { row: 1, col: 1 };
        assert_eq!(err.to_string(), "(1, 1) is already occupied");
    }

    #[test]
    fn umbrella_error_wraps_each_kind() {
        let err: Error = MoveError::NoCaptures { row: 0, col: 0 }.into();
        assert_eq!(err.to_string(), "invalid move: (0, 0) captures no pieces");

        let err: Error = ColorError::new("X").into();
        assert!(matches!(err, Error::Color(_)));

        let err: Error = ConfigError::from(ColorError::new("X")).into();
        assert_eq!(
            err.to_string(),
            "configuration error: invalid color `X`: expected Black or White"
        );
    }
}
