//! Superpower behavior through full sessions.
//!
//! Spawn rolls are pinned by using a 100% spawn rate with a single
//! enabled kind, so every placed token carries the kind under test.

use strife_engine::{
    EndReason, GameConfig, GameMode, GameSession, Memory, PlayerId, Stage, Superpower,
};

fn training_session(kinds: Vec<Superpower>, percent: u8, tokens: u32) -> GameSession {
    let config = GameConfig::new()
        .with_board_size(10)
        .with_tokens_per_player(tokens)
        .with_mode(GameMode::Training)
        .with_superpowers(kinds, percent);
    GameSession::new(config, 42).unwrap()
}

#[test]
fn test_placement_rolls_the_enabled_kind() {
    let mut session = training_session(vec![Superpower::Destroyer], 100, 2);
    session.place_token(2, 2, PlayerId::P0).unwrap();
    session.place_token(7, 7, PlayerId::P0).unwrap();

    assert_eq!(
        session.board().cell(2, 2).superpower,
        Some(Superpower::Destroyer)
    );
    assert_eq!(
        session.board().cell(7, 7).superpower,
        Some(Superpower::Destroyer)
    );
}

#[test]
fn test_zero_percent_never_rolls() {
    let mut session = training_session(vec![Superpower::Tank], 0, 1);
    session.place_token(5, 5, PlayerId::P0).unwrap();
    assert_eq!(session.board().cell(5, 5).superpower, None);
}

/// A pair of normal cells starves; a pair of Tanks holds the line
/// forever and wins on stability, remembering the cheated death.
#[test]
fn test_tank_pair_survives_where_normal_cells_die() {
    let mut session = training_session(vec![Superpower::Tank], 100, 2);
    session.place_token(4, 4, PlayerId::P0).unwrap();
    session.place_token(4, 5, PlayerId::P0).unwrap();

    session.advance_generation();
    assert_eq!(session.stage(), Stage::Finished);

    let end = session.end().unwrap();
    assert_eq!(end.reason, EndReason::StableState);
    assert_eq!(end.winner, Some(PlayerId::P0));
    assert_eq!(end.scores.get(PlayerId::P0), 2);

    for (row, col) in [(4, 4), (4, 5)] {
        let cell = session.board().cell(row, col);
        assert!(cell.alive);
        assert!(cell.memory.contains(Memory::SURVIVED_DEATH));
    }
}

/// A lone Survivor endures isolation indefinitely.
#[test]
fn test_lone_survivor_endures_isolation() {
    let mut session = training_session(vec![Superpower::Survivor], 100, 1);
    session.place_token(5, 5, PlayerId::P0).unwrap();

    session.advance_generation();
    assert_eq!(session.stage(), Stage::Finished);

    let end = session.end().unwrap();
    assert_eq!(end.reason, EndReason::StableState);
    assert_eq!(end.winner, Some(PlayerId::P0));

    let cell = session.board().cell(5, 5);
    assert!(cell.alive);
    assert!(cell.memory.contains(Memory::VETERAN));
}

/// Destroyer cells stay battle scarred for as long as they live.
#[test]
fn test_destroyer_cells_are_battle_scarred() {
    let mut session = training_session(vec![Superpower::Destroyer], 100, 2);
    session.place_token(4, 4, PlayerId::P0).unwrap();
    session.place_token(4, 5, PlayerId::P0).unwrap();

    session.advance_generation();

    for (row, col) in [(4, 4), (4, 5)] {
        let cell = session.board().cell(row, col);
        assert!(cell.alive);
        assert!(cell.memory.contains(Memory::BATTLE_SCARRED));
    }
}

/// A lone Hybrid combines the Tank and Survivor overrides and never
/// dies to the rules.
#[test]
fn test_lone_hybrid_never_dies() {
    let mut session = training_session(vec![Superpower::Hybrid], 100, 1);
    session.place_token(5, 5, PlayerId::P0).unwrap();

    session.advance_generation();
    assert_eq!(session.stage(), Stage::Finished);
    assert_eq!(session.end().unwrap().reason, EndReason::StableState);

    let cell = session.board().cell(5, 5);
    assert!(cell.alive);
    assert!(cell.memory.contains(Memory::VETERAN));
    assert!(cell.memory.contains(Memory::SURVIVED_DEATH));
}

/// Ghost games involve per-generation random draws; whatever happens,
/// the session must terminate and its record must replay to the same
/// final board.
#[test]
fn test_ghost_games_terminate_and_replay() {
    let mut session = training_session(vec![Superpower::Ghost], 100, 3);
    session.place_token(4, 3, PlayerId::P0).unwrap();
    session.place_token(4, 4, PlayerId::P0).unwrap();
    session.place_token(4, 5, PlayerId::P0).unwrap();

    while session.stage() == Stage::Simulation {
        session.advance_generation();
    }
    assert!(session.generation() <= session.config().max_generations);

    let record = session.record().unwrap();
    let replayed = record.replay().unwrap();
    assert_eq!(
        replayed.board().fingerprint(),
        session.board().fingerprint()
    );
    assert_eq!(replayed.end(), session.end());
}

/// Cells born during simulation can roll superpowers too: with a
/// 100% rate every newborn carries the enabled kind.
#[test]
fn test_births_inherit_the_spawn_mechanism() {
    let mut session = training_session(vec![Superpower::Tank], 100, 3);
    session.place_token(4, 3, PlayerId::P0).unwrap();
    session.place_token(4, 4, PlayerId::P0).unwrap();
    session.place_token(4, 5, PlayerId::P0).unwrap();

    session.advance_generation();

    // The blinker's newborn arms carry the rolled kind.
    assert_eq!(
        session.board().cell(3, 4).superpower,
        Some(Superpower::Tank)
    );
    assert_eq!(
        session.board().cell(5, 4).superpower,
        Some(Superpower::Tank)
    );
}
