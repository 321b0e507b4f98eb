//! Integration tests for whole draws: loading a list from disk and drawing
//! until the pool runs dry.

use std::collections::HashSet;

use lucky_draw_core::{candidates, DrawEngine, DrawState, Error};

fn sample_list() -> Vec<String> {
    (1..=25).map(|i| format!("Employee {:02}", i)).collect()
}

#[test]
fn test_draw_until_empty_removes_each_winner_once() {
    let list = sample_list();
    let mut engine = DrawEngine::with_seed(list.clone(), 2015);
    let mut seen = HashSet::new();

    for round in 0..list.len() {
        let before = engine.remaining();
        engine.start().expect("start failed");
        for _ in 0..(round % 5) {
            engine.tick().expect("tick failed");
        }
        let winner = engine.stop().expect("stop failed");

        assert_eq!(engine.remaining(), before - 1);
        assert!(seen.insert(winner.clone()), "{winner} drawn twice");
        assert!(!engine.pool().contains(&winner));
    }

    assert_eq!(engine.remaining(), 0);
    assert_eq!(seen.len(), list.len());
    assert_eq!(engine.winners().len(), list.len());
    assert!(matches!(engine.start(), Err(Error::EmptyPool)));
    assert_eq!(engine.state(), DrawState::Result);
}

#[test]
fn test_reset_after_partial_draw_restores_loaded_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("LIST.txt");
    std::fs::write(&path, "\u{feff}Ann\r\nBen\r\n\r\nCid  \r\n").unwrap();

    let list = candidates::load(&path).unwrap();
    assert_eq!(list, vec!["Ann", "Ben", "Cid"]);

    let mut engine = DrawEngine::with_seed(list.clone(), 9);
    engine.start().unwrap();
    engine.stop().unwrap();
    engine.start().unwrap();
    engine.tick().unwrap();

    engine.reset();
    assert_eq!(engine.state(), DrawState::Idle);
    assert_eq!(engine.pool(), list.as_slice());
}

#[test]
fn test_pick_is_always_from_current_pool() {
    let mut engine = DrawEngine::with_seed(sample_list(), 77);
    for _ in 0..10 {
        engine.start().unwrap();
        for _ in 0..20 {
            let pick = engine.tick().unwrap().to_string();
            assert!(engine.pool().contains(&pick));
        }
        engine.stop().unwrap();
    }
}

#[test]
fn test_every_candidate_can_win() {
    // Uniform picks over a small pool should hit every index quickly
    let list: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
    let mut engine = DrawEngine::with_seed(list.clone(), 1234);
    let mut hits = HashSet::new();

    engine.start().unwrap();
    for _ in 0..400 {
        hits.insert(engine.tick().unwrap().to_string());
    }
    assert_eq!(hits.len(), list.len());
}
