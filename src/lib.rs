//! Othello rules engine for rectangular boards from 4x4 to 16x16.
//!
//! [`Game`] owns the board and the turn, score and game-over bookkeeping.
//! Front ends build one from a [`GameConfig`], feed it moves through
//! [`Game::make_move`] and read everything else back. Browser front ends
//! use the [`wasm::OthelloGame`] wrapper.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::GameConfig;
pub use error::{ColorError, ConfigError, Error, MoveError};
pub use game::Game;
pub use types::{Cell, Color, GameResult, GameState, Position, WinCriterion};
