use sim_2048::agent::HeuristicAgent;
use sim_2048::config::GameConfig;
use sim_2048::engine::{Board, Move};
use sim_2048::error::EngineError;
use sim_2048::game::Game;
use sim_2048::heuristic::{evaluate, Strategy};
use sim_2048::record::{self, SessionRecord};

fn checkerboard() -> Board {
    Board::from_rows(&[[2, 4, 8, 16], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]).unwrap()
}

#[test]
fn left_merge_scenario() {
    let board = Board::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let slide = board.slide(Move::Left);
    assert_eq!(slide.board, Board::from_rows(&[[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap());
    assert_eq!(slide.score_delta, 4);
    assert!(slide.changed);
}

#[test]
fn up_on_top_row_scenario() {
    let board = Board::from_rows(&[[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let slide = board.slide(Move::Up);
    assert!(!slide.changed);
    assert_eq!(slide.score_delta, 0);
    assert_eq!(slide.board, board);
}

#[test]
fn merged_tiles_can_merge_on_the_next_slide() {
    let board = Board::from_rows(&[[2, 0, 0], [2, 0, 0], [4, 0, 0]]).unwrap();
    let first = board.slide(Move::Up);
    assert_eq!(first.board, Board::from_rows(&[[4, 0, 0], [4, 0, 0], [0, 0, 0]]).unwrap());
    assert_eq!(first.score_delta, 4);
    let second = first.board.slide(Move::Up);
    assert_eq!(second.board, Board::from_rows(&[[8, 0, 0], [0, 0, 0], [0, 0, 0]]).unwrap());
    assert_eq!(second.score_delta, 8);
    assert!(!second.board.slide(Move::Up).changed);
}

#[test]
fn checkerboard_is_terminal() {
    // Anti-diagonals repeat values, but no two orthogonal neighbours match.
    let board = checkerboard();
    assert!(board.is_game_over());
    let mut agent = HeuristicAgent::new(Strategy::CornerFocused);
    assert_eq!(agent.best_move(&board), None);

    let mut game = Game::from_board(board, GameConfig::default()).unwrap();
    assert!(game.is_terminal());
    assert_eq!(agent.select_move(&game), None);
    for dir in Move::ALL {
        assert!(!game.apply_move(dir));
    }
}

#[test]
fn evaluator_is_pure() {
    let board = checkerboard();
    for strategy in Strategy::ALL {
        let w = strategy.weights();
        assert_eq!(evaluate(&board, &w).to_bits(), evaluate(&board, &w).to_bits());
    }
}

#[test]
fn agent_plays_to_completion() {
    let mut game = Game::with_config(GameConfig::default().seeded(2048)).unwrap();
    let mut agent = HeuristicAgent::new(Strategy::CornerFocused);
    let metrics = agent.play(&mut game, None);
    assert!(game.is_terminal());
    assert!(game.board().is_game_over());
    assert_eq!(metrics.score, game.score());
    assert_eq!(metrics.highest_tile, game.highest_tile());
    // One decision per applied move plus nothing extra: play stops on terminal.
    assert_eq!(metrics.moves, game.move_count());
    assert!(metrics.highest_tile >= 32);
}

#[test]
fn larger_boards_play_too() {
    let mut game = Game::with_config(GameConfig { size: 6, ..GameConfig::default() }.seeded(8)).unwrap();
    let mut agent = HeuristicAgent::new(Strategy::Balanced);
    agent.play(&mut game, Some(200));
    assert_eq!(game.size(), 6);
    assert_eq!(game.move_count(), 200);
}

#[test]
fn reset_starts_a_fresh_game() {
    let mut game = Game::with_config(GameConfig::default().seeded(77)).unwrap();
    let mut agent = HeuristicAgent::new(Strategy::MergeFocused);
    agent.play(&mut game, Some(30));
    assert!(game.score() > 0);
    game.reset();
    assert_eq!(game.score(), 0);
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.board().count_empty(), 14);
}

#[test]
fn record_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut game = Game::with_config(GameConfig::default().seeded(31)).unwrap();
    HeuristicAgent::new(Strategy::Balanced).play(&mut game, Some(25));
    record::save_to_path(&path, &game.to_record()).unwrap();

    let loaded = record::load_from_path(&path).unwrap();
    assert_eq!(loaded, SessionRecord::from_game(&game));
    let restored = Game::from_record(loaded, GameConfig::default()).unwrap();
    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.score(), game.score());
    assert_eq!(restored.move_count(), 25);
    assert_eq!(restored.is_terminal(), game.is_terminal());
}

#[test]
fn invalid_inputs_are_rejected_at_the_boundary() {
    assert_eq!("sideways".parse::<Move>(), Err(EngineError::InvalidDirection("sideways".into())));
    assert_eq!(Board::new(0), Err(EngineError::InvalidBoardSize(0)));
    let ragged: Vec<Vec<u64>> = vec![vec![2, 0, 0], vec![0, 0]];
    assert!(matches!(Board::from_rows(&ragged), Err(EngineError::NonSquare { .. })));
}
