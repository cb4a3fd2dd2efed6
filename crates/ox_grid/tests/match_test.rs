//! Tests for the alternating-turn match controller.

use ox_grid::{
    AlternatingTurns, Coords, GridConfig, GridStatus, Match, MoveError, PlayerId, TurnSource,
};

const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

#[test]
fn test_players_alternate() {
    let mut game = Match::classic();
    assert_eq!(game.to_move(), P1);
    assert_eq!(game.play(Coords::new(1, 1)), Ok(GridStatus::Open));
    assert_eq!(game.to_move(), P2);
    assert_eq!(game.play(Coords::new(0, 0)), Ok(GridStatus::Open));
    assert_eq!(game.to_move(), P1);
}

#[test]
fn test_rejections_keep_the_turn() {
    let mut game = Match::classic();
    game.play(Coords::new(1, 1)).unwrap();

    assert_eq!(
        game.play(Coords::new(1, 1)),
        Err(MoveError::CellOccupied(Coords::new(1, 1)))
    );
    assert_eq!(
        game.play(Coords::new(3, 0)),
        Err(MoveError::OutOfBounds(Coords::new(3, 0)))
    );
    assert_eq!(game.to_move(), P2);
    assert_eq!(game.grid().marks_placed(), 1);
}

#[test]
fn test_win_ends_match() {
    let mut game = Match::classic();
    for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        assert_eq!(game.play(Coords::new(x, y)), Ok(GridStatus::Open));
    }
    assert_eq!(game.play(Coords::new(2, 0)), Ok(GridStatus::Won));
    assert_eq!(game.grid().winner(), Some(P1));

    // Winner keeps the turn; nothing more can be played
    assert_eq!(game.to_move(), P1);
    assert_eq!(game.play(Coords::new(2, 2)), Err(MoveError::GameOver));
}

#[test]
fn test_draw_ends_match() {
    let mut game = Match::classic();
    let moves = [(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2)];
    for (x, y) in moves {
        assert_eq!(game.play(Coords::new(x, y)), Ok(GridStatus::Open));
    }
    assert_eq!(game.play(Coords::new(2, 2)), Ok(GridStatus::Drawn));
    assert_eq!(game.play(Coords::new(0, 0)), Err(MoveError::GameOver));
}

#[test]
fn test_rematch_resets_board_and_turns() {
    let mut game = Match::classic();
    game.play(Coords::new(0, 0)).unwrap();
    game.play(Coords::new(1, 0)).unwrap();
    game.play(Coords::new(2, 2)).unwrap();

    game.rematch();
    assert_eq!(game.to_move(), P1);
    assert_eq!(game.grid().marks_placed(), 0);
    assert_eq!(game.grid().status(), GridStatus::Open);
}

#[test]
fn test_three_player_gomoku() {
    let config = GridConfig::new(7).with_cells_to_win(3);
    let turns = AlternatingTurns::new(vec![P1, P2, PlayerId::new(3)]).unwrap();
    let mut game = Match::with_turns(&config, turns).unwrap();

    // Rounds: P1 on row 0, P2 on row 3, P3 on row 6
    for x in 0..2 {
        game.play(Coords::new(x, 0)).unwrap();
        game.play(Coords::new(x, 3)).unwrap();
        game.play(Coords::new(x, 6)).unwrap();
    }
    assert_eq!(game.play(Coords::new(2, 0)), Ok(GridStatus::Won));
    assert_eq!(game.grid().winner(), Some(P1));
    assert_eq!(game.grid().turns().current_player(), P1);
}

#[test]
fn test_invalid_config_rejected() {
    let config = GridConfig::new(3).with_cells_to_win(5);
    let err = Match::new(&config).unwrap_err();
    assert!(err.message.contains("exceeds"));
}
