//! Game configuration collected by a front end before a game starts.

use serde::{Deserialize, Serialize};

use crate::board::is_legal_dimension;
use crate::error::ConfigError;
use crate::types::{Color, WinCriterion};

/// Everything fixed at the start of a game.
///
/// Deserializes from objects like
/// `{"rows": 8, "columns": 8, "first_player": "B", "nw_corner": "W", "win_criterion": "Most"}`.
/// Missing fields take their [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub first_player: Color,
    /// Color of the NW and SE center pieces.
    pub nw_corner: Color,
    pub win_criterion: WinCriterion,
}

impl Default for GameConfig {
    /// The standard game: 8x8, Black first, White on the NW/SE diagonal.
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
            first_player: Color::Black,
            nw_corner: Color::White,
            win_criterion: WinCriterion::MostPieces,
        }
    }
}

impl GameConfig {
    /// Builds a config from untyped tokens, e.g. `("B", "W", "M")`.
    pub fn from_tokens(
        rows: usize,
        columns: usize,
        first_player: &str,
        nw_corner: &str,
        win_criterion: &str,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            rows,
            columns,
            first_player: first_player.parse()?,
            nw_corner: nw_corner.parse()?,
            win_criterion: win_criterion.parse()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that both dimensions are even and within the allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_legal_dimension(self.rows) && is_legal_dimension(self.columns) {
            Ok(())
        } else {
            Err(ConfigError::BoardSize {
                rows: self.rows,
                columns: self.columns,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_sizes() {
        let config = GameConfig {
            rows: 6,
            columns: 9,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardSize { rows: 6, columns: 9 })
        );
    }

    #[test]
    fn from_tokens_parses_dialog_values() {
        let config = GameConfig::from_tokens(6, 10, "White", "B", "F").unwrap();

        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 10);
        assert_eq!(config.first_player, Color::White);
        assert_eq!(config.nw_corner, Color::Black);
        assert_eq!(config.win_criterion, WinCriterion::FewestPieces);
    }

    #[test]
    fn from_tokens_reports_color_errors() {
        let err = GameConfig::from_tokens(8, 8, "Green", "W", "M").unwrap_err();
        assert!(matches!(err, ConfigError::Color(e) if e.token == "Green"));
    }

    #[test]
    fn from_tokens_reports_size_errors() {
        let err = GameConfig::from_tokens(8, 20, "B", "W", "M").unwrap_err();
        assert_eq!(err, ConfigError::BoardSize { rows: 8, columns: 20 });
    }

    #[test]
    fn deserializes_from_json_with_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows": 4, "columns": 6, "win_criterion": "fewest"}"#).unwrap();

        assert_eq!(config.rows, 4);
        assert_eq!(config.columns, 6);
        assert_eq!(config.first_player, Color::Black);
        assert_eq!(config.nw_corner, Color::White);
        assert_eq!(config.win_criterion, WinCriterion::FewestPieces);
    }

    #[test]
    fn deserializing_a_bad_color_fails() {
        let err = serde_json::from_str::<GameConfig>(r#"{"first_player": "Purple"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid color `Purple`"));
    }

    #[test]
    fn serialized_config_reads_back() {
        let config = GameConfig::from_tokens(10, 4, "W", "W", "Most").unwrap();
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }
}
