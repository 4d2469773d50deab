//! JavaScript bindings for browser front ends.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::Error;
use crate::game::Game;

/// A game handle owned by the JavaScript side.
#[wasm_bindgen]
pub struct OthelloGame {
    inner: Game,
}

#[wasm_bindgen]
impl OthelloGame {
    /// Starts a game from a plain config object. `undefined` or `null`
    /// selects the standard 8x8 game.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<OthelloGame, JsError> {
        let config = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let inner = Game::new(config).map_err(Error::from)?;
        Ok(Self { inner })
    }

    /// Rejected moves leave the game unchanged.
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), JsError> {
        self.inner.make_move(row, col).map_err(Error::from)?;
        Ok(())
    }

    /// Snapshot of the board, scores and turn for rendering.
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_result())?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.legal_moves())?)
    }

    /// 1 for black, 2 for white.
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.current_player().code()
    }

    #[wasm_bindgen(js_name = opposingPlayer)]
    pub fn opposing_player(&self) -> u8 {
        self.inner.opposing_player().code()
    }

    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    pub fn columns(&self) -> usize {
        self.inner.columns()
    }

    pub fn black(&self) -> usize {
        self.inner.black()
    }

    pub fn white(&self) -> usize {
        self.inner.white()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// 0 for a tie, otherwise the winner's color code.
    pub fn winner(&self) -> u8 {
        self.inner.to_game_result().winner
    }
}
