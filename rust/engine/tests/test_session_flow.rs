mod common;

use common::Scripted;
use ecard_engine::cards::{CardKind, Role};
use ecard_engine::rules::Outcome;
use ecard_engine::session::{GameSession, Phase};

#[test]
fn play_and_resolve_walk_the_state_machine() {
    let mut session = GameSession::new(Role::Emperor, Scripted::new(&[CardKind::Citizen]));
    assert_eq!(session.phase(), Phase::AwaitingPlay);

    session.play_round(CardKind::Emperor).expect("play ok");
    assert_eq!(session.phase(), Phase::Resolving);

    let outcome = session.resolve_round().expect("resolve ok");
    assert_eq!(outcome, Outcome::PlayerWin);
    assert_eq!(session.phase(), Phase::RoundComplete);

    assert!(session.check_session_end());
    assert_eq!(session.phase(), Phase::SessionOver);
    assert!(session.is_over());
}

#[test]
fn emperor_beats_citizen_and_scores() {
    // role=Emperor, player leads with the Emperor, cpu answers with a Citizen
    let mut session = GameSession::new(Role::Emperor, Scripted::new(&[CardKind::Citizen]));
    session.play_round(CardKind::Emperor).unwrap();
    assert_eq!(session.resolve_round().unwrap(), Outcome::PlayerWin);
    assert_eq!(session.score().player_wins, 1);
    assert_eq!(session.score().cpu_wins, 0);
    assert_eq!(session.player_hand().count(CardKind::Emperor), 0);
    assert_eq!(session.player_hand().count(CardKind::Citizen), 4);
}

#[test]
fn cpu_emperor_beats_player_citizen() {
    // role=Slave: cpu holds the Emperor and leads with it
    let mut session = GameSession::new(Role::Slave, Scripted::new(&[CardKind::Emperor]));
    session.play_round(CardKind::Citizen).unwrap();
    assert_eq!(session.resolve_round().unwrap(), Outcome::CpuWin);
    assert_eq!(session.score().cpu_wins, 1);
}

#[test]
fn each_round_shrinks_both_hands_by_one() {
    let mut session = GameSession::new(
        Role::Emperor,
        Scripted::new(&[CardKind::Citizen, CardKind::Citizen]),
    );
    for expected in [4usize, 3] {
        session.play_round(CardKind::Citizen).unwrap();
        session.resolve_round().unwrap();
        assert!(!session.check_session_end());
        assert_eq!(session.player_hand().len(), expected);
        assert_eq!(session.cpu_hand().len(), expected);
    }
    assert_eq!(session.history().len(), 2);
}

#[test]
fn draws_keep_the_session_alive() {
    let mut session = GameSession::new(
        Role::Emperor,
        Scripted::new(&[CardKind::Citizen, CardKind::Citizen, CardKind::Citizen]),
    );
    for _ in 0..3 {
        session.play_round(CardKind::Citizen).unwrap();
        assert_eq!(session.resolve_round().unwrap(), Outcome::Draw);
        assert!(!session.check_session_end());
        assert_eq!(session.phase(), Phase::AwaitingPlay);
    }
    assert_eq!(session.score().player_wins, 0);
    assert_eq!(session.score().cpu_wins, 0);
    assert_eq!(session.history().len(), 3);
}
