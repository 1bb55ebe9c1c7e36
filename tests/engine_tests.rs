//! Engine behavior through the public API.
//!
//! These tests drive `BoardEngine` the way a host does: build a config,
//! press cells, watch for the win and restart.

use lights_out::{
    run_session, BoardConfig, BoardEngine, BoardView, Coord, GameState, Grid, LightsOutError,
    Phase, TextView,
};
use std::io::Cursor;

fn flipped_cells(before: &GameState, after: &GameState) -> Vec<Coord> {
    let mut out = Vec::new();
    for row in 0..before.grid().rows() {
        for col in 0..before.grid().cols() {
            let c = Coord::new(row, col);
            if before.grid().get(c) != after.grid().get(c) {
                out.push(c);
            }
        }
    }
    out
}

/// Corner, edge and interior presses on the default 5x5 board.
#[test]
fn test_flip_counts_on_5x5() {
    let state = GameState::new(Grid::lit(5, 5));

    let (corner, _) = state.toggled_around(Coord::new(0, 0)).unwrap();
    assert_eq!(
        flipped_cells(&state, &corner),
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0)]
    );

    let (edge, _) = state.toggled_around(Coord::new(0, 2)).unwrap();
    assert_eq!(
        flipped_cells(&state, &edge),
        vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3), Coord::new(1, 2)]
    );

    let (interior, _) = state.toggled_around(Coord::new(2, 2)).unwrap();
    assert_eq!(
        flipped_cells(&state, &interior),
        vec![
            Coord::new(1, 2),
            Coord::new(2, 1),
            Coord::new(2, 2),
            Coord::new(2, 3),
            Coord::new(3, 2),
        ]
    );
}

/// Chance 0 means an already-solved board; chance 1 a fully lit one.
#[test]
fn test_chance_extremes() {
    for seed in 0..10 {
        let off = BoardEngine::with_seed(BoardConfig::new(4, 6, 0.0), seed).unwrap();
        assert!(off.state().has_won());
        assert_eq!(off.phase(), Phase::Won);

        let on = BoardEngine::with_seed(BoardConfig::new(4, 6, 1.0), seed).unwrap();
        assert!(!on.state().has_won());
        assert_eq!(on.state().grid().lit_count(), 24);
    }
}

/// Solve a known 3x3 puzzle by pressing the centre.
#[test]
fn test_solve_non_random_board() {
    let mut engine = BoardEngine::with_seed(BoardConfig::new(3, 3, 1.0), 0).unwrap();

    // All nine lit: pressing the four corners then the centre clears it.
    let presses = [(0, 0), (0, 2), (2, 0), (2, 2), (1, 1)];
    let mut outcomes = Vec::new();
    for (row, col) in presses {
        outcomes.push(engine.toggle_around(Coord::new(row, col)).unwrap());
    }

    assert!(outcomes[..4].iter().all(|o| !o.won));
    assert!(outcomes[4].won);
    assert!(engine.state().grid().is_all_off());
    assert_eq!(
        engine.toggle_around(Coord::new(1, 1)),
        Err(LightsOutError::AlreadyWon)
    );
}

/// Non-square boards scan every cell for the win.
#[test]
fn test_non_square_win_detection() {
    let mut engine = BoardEngine::with_seed(BoardConfig::new(1, 3, 1.0), 0).unwrap();

    // 1x3 all lit: pressing the middle clears all three.
    let outcome = engine.toggle_around(Coord::new(0, 1)).unwrap();
    assert_eq!(outcome.flipped.len(), 3);
    assert!(outcome.won);

    let mut tall = BoardEngine::with_seed(BoardConfig::new(4, 1, 1.0), 0).unwrap();
    assert!(!tall.toggle_around(Coord::new(0, 0)).unwrap().won);
    assert_eq!(tall.state().grid().lit_count(), 2);
    assert!(tall.toggle_around(Coord::new(3, 0)).unwrap().won);
}

/// Restart always yields a consistent state and counts games.
#[test]
fn test_restart_consistency() {
    let mut engine = BoardEngine::with_seed(BoardConfig::new(5, 5, 0.25), 2024).unwrap();

    for game in 2..=20 {
        let _ = engine.toggle_around(Coord::new(2, 2));
        let state = engine.restart().clone();
        assert_eq!(state.has_won(), state.grid().is_all_off());
        assert_eq!(state.grid().len(), 25);
        assert_eq!(engine.games_played(), game);
    }
}

/// A full scripted game through the text session.
#[test]
fn test_scripted_session() {
    let mut engine = BoardEngine::with_seed(BoardConfig::new(3, 3, 1.0), 0).unwrap();
    let script = "0-0\n0,2\n2 0\n2 2\n1 1\nrestart\nq\n";
    let mut out = Vec::new();

    let summary =
        run_session(&mut engine, &TextView::new(), Cursor::new(script), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(summary.wins, 1);
    assert_eq!(summary.games_played, 2);
    assert!(out.contains("You Win!"));
    assert!(out.contains("Play Again!"));
    assert!(out.ends_with(&TextView::new().render(engine.state())));
}
