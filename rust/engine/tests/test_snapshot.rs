use tictactoe_engine::board::{Board, Coord};
use tictactoe_engine::cells::Side;
use tictactoe_engine::engine::{apply_move, create_game};

#[test]
fn snapshot_serializes_board_as_mark_strings() {
    let mut game = create_game(true);
    apply_move(&mut game, Coord::new(0, 0)).unwrap();
    apply_move(&mut game, Coord::new(2, 1)).unwrap();

    let json = serde_json::to_value(game.snapshot()).expect("serialize");
    assert_eq!(json["board"][0][0], "x");
    assert_eq!(json["board"][2][1], "o");
    assert_eq!(json["board"][1][1], "");
    assert_eq!(json["status"], "IN_PROGRESS");
    assert_eq!(json["next_move"], "X");
    assert_eq!(json["player_status"], "IN_PROGRESS");
    assert_eq!(json["human_goes_first"], true);
}

#[test]
fn finished_snapshot_has_null_next_move() {
    let mut game = create_game(false);
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        apply_move(&mut game, Coord::new(r, c)).unwrap();
    }
    let snapshot = game.snapshot();
    assert_eq!(snapshot.next_move, None);
    assert_eq!(snapshot.human_side, Side::O);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json["next_move"].is_null());
    assert_eq!(json["status"], "X_WINS");
    assert_eq!(json["player_status"], "LOST");
}

#[test]
fn rows_round_trip_through_from_rows() {
    let mut game = create_game(true);
    for (r, c) in [(1, 1), (0, 2), (2, 0)] {
        apply_move(&mut game, Coord::new(r, c)).unwrap();
    }
    let rows = game.board().rows();
    let grid: [[&str; 3]; 3] = std::array::from_fn(|r| std::array::from_fn(|c| rows[r][c].as_str()));
    let rebuilt = Board::from_rows(&grid).unwrap();
    assert_eq!(&rebuilt, game.board());
    assert_eq!(rebuilt.next_side(), game.next_move());
}
