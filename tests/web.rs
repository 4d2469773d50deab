#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use othello::wasm::OthelloGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn config(rows: u32, columns: u32, first: &str, nw: &str, criterion: &str) -> JsValue {
    let obj = Object::new();
    Reflect::set(&obj, &"rows".into(), &rows.into()).unwrap();
    Reflect::set(&obj, &"columns".into(), &columns.into()).unwrap();
    Reflect::set(&obj, &"first_player".into(), &first.into()).unwrap();
    Reflect::set(&obj, &"nw_corner".into(), &nw.into()).unwrap();
    Reflect::set(&obj, &"win_criterion".into(), &criterion.into()).unwrap();
    obj.into()
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &name.into()).unwrap()
}

#[wasm_bindgen_test]
fn default_game_starts_with_black() {
    let game = OthelloGame::new(JsValue::UNDEFINED).unwrap();

    assert_eq!(game.rows(), 8);
    assert_eq!(game.columns(), 8);
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.opposing_player(), 2);
    assert_eq!((game.black(), game.white()), (2, 2));
    assert!(!game.is_game_over());
    assert_eq!(game.winner(), 0);
    assert_eq!(Array::from(&game.legal_moves().unwrap()).length(), 4);
}

#[wasm_bindgen_test]
fn small_board_opening_move() {
    let mut game = OthelloGame::new(config(4, 4, "B", "W", "M")).unwrap();

    game.make_move(0, 1).unwrap();

    let state = game.state().unwrap();
    assert_eq!(field(&state, "current_player").as_f64(), Some(2.0));
    assert_eq!(field(&state, "black_count").as_f64(), Some(4.0));
    assert_eq!(field(&state, "white_count").as_f64(), Some(1.0));
    assert_eq!(field(&state, "is_pass").as_bool(), Some(false));

    let board = Array::from(&field(&state, "board"));
    assert_eq!(board.length(), 16);
    assert_eq!(board.get(5).as_f64(), Some(1.0));

    let flipped = Array::from(&field(&state, "flipped"));
    assert_eq!(flipped.length(), 1);
    assert_eq!(field(&flipped.get(0), "row").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn rejected_move_leaves_state_unchanged() {
    let mut game = OthelloGame::new(config(4, 4, "B", "W", "M")).unwrap();

    assert!(game.make_move(1, 1).is_err());
    assert_eq!(game.current_player(), 1);
    assert_eq!((game.black(), game.white()), (2, 2));
}

#[wasm_bindgen_test]
fn invalid_config_is_an_error() {
    assert!(OthelloGame::new(config(5, 4, "B", "W", "M")).is_err());
    assert!(OthelloGame::new(config(4, 4, "Red", "W", "M")).is_err());
    assert!(OthelloGame::new(config(4, 4, "B", "W", "Middle")).is_err());
}
