//! Tests for the play, selfplay and analyze commands.

use oxo::{MatchOutcome, OxoConfig, analyze, play, selfplay};
use oxo_tictactoe::{GameStatus, Player, Position, Score, Square};
use std::io::Cursor;

fn run_play(input: &str, config: &OxoConfig) -> (Option<MatchOutcome>, String) {
    let mut output = Vec::new();
    let outcome = play(Cursor::new(input.to_string()), &mut output, config).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn test_play_prompts_for_marker_and_never_loses() {
    let (outcome, out) = run_play("Z\nx\n1\n2\n3\n4\n5\n6\n7\n8\n9\n", &OxoConfig::default());
    assert!(out.contains("Invalid option"));

    match outcome.expect("marker was chosen") {
        MatchOutcome::Finished { status, .. } => {
            assert_ne!(status, GameStatus::Won(Player::X));
            let expected = if status == GameStatus::Draw {
                "It's a draw"
            } else {
                "You lost :-("
            };
            assert!(out.contains(expected));
        }
        MatchOutcome::Abandoned { by, .. } => assert_eq!(by, Player::X),
    }
}

#[test]
fn test_play_quit_as_o() {
    let config = OxoConfig::default().with_marker(Some(Player::O));
    let (outcome, out) = run_play("quit\n", &config);
    assert!(!out.contains("Select player"));
    assert!(out.contains("Quitter..."));

    match outcome {
        Some(MatchOutcome::Abandoned { by, board }) => {
            assert_eq!(by, Player::O);
            // The bot, playing X, moved before the human quit.
            assert_eq!(board.occupied_count(), 1);
        }
        other => panic!("expected abandoned game, got {:?}", other),
    }
}

#[test]
fn test_play_without_marker_input() {
    let (outcome, _) = run_play("", &OxoConfig::default());
    assert_eq!(outcome, None);
}

#[test]
fn test_selfplay_draws() {
    let mut output = Vec::new();
    let results = selfplay(&mut output, &OxoConfig::default(), Some(2), None).unwrap();
    assert_eq!(results, vec![GameStatus::Draw, GameStatus::Draw]);

    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("Game 1: draw"));
    assert!(out.contains("Game 2: draw"));
    assert!(out.contains("Cache entries:"));
}

#[test]
fn test_selfplay_stats_once_per_game() {
    let config: OxoConfig = toml::from_str("show_stats = true").unwrap();
    let mut output = Vec::new();
    selfplay(&mut output, &config, Some(3), None).unwrap();

    let out = String::from_utf8(output).unwrap();
    assert_eq!(out.matches("Solver: ").count(), 3);
}

#[test]
fn test_play_stats_once_per_game() {
    let config: OxoConfig = toml::from_str("show_stats = true\nmarker = \"O\"").unwrap();
    let (_, out) = run_play("q\n", &config);
    assert_eq!(out.matches("Solver: ").count(), 1);
}

#[test]
fn test_play_accepts_square_names() {
    let config = OxoConfig::default().with_marker(Some(Player::X));
    let (outcome, out) = run_play("center\nq\n", &config);
    assert!(!out.contains("Illegal move center"));
    match outcome {
        Some(MatchOutcome::Abandoned { board, .. }) => {
            assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        }
        other => panic!("expected abandoned game, got {:?}", other),
    }
}

#[test]
fn test_selfplay_every_opening_draws() {
    for slot in 1..=9 {
        let results = selfplay(Vec::new(), &OxoConfig::default(), Some(1), Some(slot)).unwrap();
        assert_eq!(results, vec![GameStatus::Draw], "opening slot {}", slot);
    }
}

#[test]
fn test_selfplay_rejects_bad_opening() {
    assert!(selfplay(Vec::new(), &OxoConfig::default(), Some(1), Some(10)).is_err());
}

#[test]
fn test_analyze_text() {
    let mut output = Vec::new();
    let analysis = analyze(&mut output, "XX_/OO_/___", Player::X, false).unwrap();
    assert_eq!(analysis.best_slot, Some(3));
    assert_eq!(*analysis.evaluation.best_move(), Some(Position::TopRight));
    assert_eq!(*analysis.evaluation.score(), Score::Win);

    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("Best move for X: 3 (Top-right), score +1"));
}

#[test]
fn test_analyze_json() {
    let mut output = Vec::new();
    analyze(&mut output, "XOX/OXO/OXO", Player::O, true).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["status"], "Draw");
    assert_eq!(value["best_slot"], serde_json::Value::Null);
    assert_eq!(value["evaluation"]["score"], "Draw");
    assert_eq!(value["player"], "O");
}

#[test]
fn test_analyze_rejects_malformed_board() {
    assert!(analyze(Vec::new(), "XXQ", Player::X, false).is_err());
}
