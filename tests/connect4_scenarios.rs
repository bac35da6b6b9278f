//! End-to-end Connect Four games driven through the session surface.
//!
//! Flat positions are row-major on the 6x7 board: row 5 is the bottom, so
//! the bottom-left cell is 35 and the bottom-right is 41.

use engine::{
    Board, DirectionalScan, GameSession, GameVariant, MoveError, Player, Status, WinDetector,
};

#[test]
fn horizontal_win_on_the_bottom_row() {
    let mut game = GameSession::new(GameVariant::ConnectFour);
    // One drops in columns 0-3, Two stacks on top in columns 0-2
    for input in [0, 0, 1, 1, 2, 2, 3] {
        game.make_move(input).unwrap();
    }
    assert_eq!(
        game.status(),
        Status::Won {
            player: Player::One,
            winning_cells: vec![35, 36, 37, 38],
        }
    );
}

#[test]
fn vertical_win_in_one_column() {
    let mut game = GameSession::new(GameVariant::ConnectFour);
    // One stacks column 0, Two stacks column 1
    for input in [0, 1, 0, 1, 0, 1, 0] {
        game.make_move(input).unwrap();
    }
    match game.status() {
        Status::Won {
            player,
            winning_cells,
        } => {
            assert_eq!(player, Player::One);
            // Rows 2-5 of column 0
            assert_eq!(winning_cells, vec![14, 21, 28, 35]);
        }
        other => panic!("expected a win, got {:?}", other),
    }
}

#[test]
fn diagonal_win_through_a_staircase() {
    let mut game = GameSession::new(GameVariant::ConnectFour);
    for input in [0, 1, 1, 2, 2, 3, 2, 3, 3, 0, 3] {
        game.make_move(input).unwrap();
    }
    assert_eq!(
        game.status(),
        Status::Won {
            player: Player::One,
            winning_cells: vec![17, 23, 29, 35],
        }
    );
}

#[test]
fn alternating_drops_in_one_column_never_win() {
    let mut game = GameSession::new(GameVariant::ConnectFour);
    // red, yellow, red, yellow, red in column 0: no three of the five are
    // four contiguous same-player pieces
    for input in [0, 0, 0, 0, 0] {
        game.make_move(input).unwrap();
    }
    assert!(matches!(game.status(), Status::InProgress { .. }));
}

#[test]
fn constructed_same_player_column_wins() {
    // Skipping the opponent requires building the board directly; the
    // detector itself has no notion of turn order
    let mut board = Board::new(6, 7);
    for row in 2..6 {
        board = board.apply(board.index(row, 0), Player::One).unwrap();
    }
    let detector = DirectionalScan::new(4);
    let result = detector.evaluate(&board, board.index(2, 0), Player::One);
    assert_eq!(result.winner, Some(Player::One));
    assert_eq!(result.winning_cells, vec![14, 21, 28, 35]);
}

#[test]
fn gravity_stacks_pieces_bottom_up() {
    let mut game = GameSession::new(GameVariant::ConnectFour);
    game.make_move(3).unwrap();
    game.make_move(3).unwrap();
    game.make_move(3).unwrap();
    let board = game.board();
    assert_eq!(board.cell(board.index(5, 3)), Some(Player::One));
    assert_eq!(board.cell(board.index(4, 3)), Some(Player::Two));
    assert_eq!(board.cell(board.index(3, 3)), Some(Player::One));
}

#[test]
fn seventh_drop_in_a_column_is_rejected() {
    let mut game = GameSession::new(GameVariant::ConnectFour);
    for _ in 0..6 {
        game.make_move(6).unwrap();
    }
    assert_eq!(game.make_move(6), Err(MoveError::ColumnFull));
    // The rejection consumed nothing
    assert_eq!(game.entries().len(), 7);
    assert_eq!(game.current_player(), Player::One);
}

#[test]
fn column_index_out_of_range() {
    let mut game = GameSession::new(GameVariant::ConnectFour);
    assert_eq!(game.make_move(7), Err(MoveError::OutOfBounds));
}
