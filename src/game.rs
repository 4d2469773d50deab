use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::types::{CELL_EMPTY, Cell, Color, GameResult, GameState, Position, WinCriterion};

/// A single Othello game from the opening position to its end.
///
/// The game only changes through [`Game::make_move`]. Once it is over it
/// stays over, and every later move is rejected by the normal legality
/// check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Color,
    black: usize,
    white: usize,
    game_over: bool,
    win_criterion: WinCriterion,
    is_pass: bool,
    flipped: Vec<Position>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.rows, config.columns, config.nw_corner)?;
        let (black, white) = board.count();

        info!(
            rows = config.rows,
            columns = config.columns,
            first_player = %config.first_player,
            nw_corner = %config.nw_corner,
            win_criterion = ?config.win_criterion,
            "new game"
        );

        Ok(Self {
            board,
            current_player: config.first_player,
            black,
            white,
            game_over: false,
            win_criterion: config.win_criterion,
            is_pass: false,
            flipped: Vec::new(),
        })
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn opposing_player(&self) -> Color {
        self.current_player.opponent()
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    pub fn black(&self) -> usize {
        self.black
    }

    pub fn white(&self) -> usize {
        self.white
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn win_criterion(&self) -> WinCriterion {
        self.win_criterion
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Whether the opponent had no reply to the last move, returning the
    /// turn to its mover.
    pub fn passed(&self) -> bool {
        self.is_pass
    }

    /// Pieces flipped by the last move.
    pub fn flipped(&self) -> &[Position] {
        &self.flipped
    }

    /// Winner under the game's criterion, `None` on equal counts.
    ///
    /// Only final once the game is over; before that it reflects the
    /// current counts.
    pub fn winner(&self) -> Option<Color> {
        if self.black == self.white {
            return None;
        }

        let black_ahead = self.black > self.white;
        let black_wins = match self.win_criterion {
            WinCriterion::MostPieces => black_ahead,
            WinCriterion::FewestPieces => !black_ahead,
        };

        Some(if black_wins { Color::Black } else { Color::White })
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.has_legal_move(self.current_player)
    }

    /// Legal targets for the current player in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.current_player)
    }

    /// Places the current player's piece at `(row, col)`, flips every
    /// captured run and hands the turn on.
    ///
    /// If the opponent then has no legal move the turn returns to the
    /// mover; if the mover has none either the game ends.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let mover = self.current_player;

        self.board
            .check_move(row, col, mover)
            .inspect_err(|err| debug!(player = %mover, %err, "move rejected"))?;

        self.flipped = self.board.place(row, col, mover);
        debug!(
            player = %mover,
            target = %Position::new(row, col),
            flipped = self.flipped.len(),
            "move applied"
        );

        self.update_game_state(mover);
        Ok(())
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            rows: self.rows(),
            columns: self.columns(),
            board: self.board.to_array(),
            current_player: self.current_player.code(),
            black_count: self.black,
            white_count: self.white,
            is_game_over: self.game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        GameResult {
            winner: self.winner().map_or(CELL_EMPTY, Color::code),
            black_count: self.black,
            white_count: self.white,
        }
    }

    fn update_game_state(&mut self, mover: Color) {
        self.update_scores();
        self.is_pass = false;
        self.current_player = mover.opponent();

        if self.has_legal_moves_for_current() {
            return;
        }

        self.current_player = mover;
        if self.has_legal_moves_for_current() {
            self.is_pass = true;
            debug!(player = %mover.opponent(), "no legal move, turn passes");
        } else {
            self.game_over = true;
            info!(
                black = self.black,
                white = self.white,
                winner = ?self.winner(),
                "game over"
            );
        }
    }

    fn update_scores(&mut self) {
        let (black, white) = self.board.count();
        self.black = black;
        self.white = white;
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Color) {
        self.board = board;
        self.current_player = current_player;
        self.game_over = false;
        self.is_pass = false;
        self.flipped.clear();
        self.update_scores();
    }
}
